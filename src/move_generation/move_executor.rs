//! Applies one candidate to a board.
//!
//! `execute` resolves the mover's own part of the move in a fixed order:
//! Twins pre-check, Archer shot, contact capture (Serpent transformation or
//! ordinary capture), the Skeleton Giant branch, relocation, Etourdie
//! recoil. Everything that touches another instance afterwards (Thief
//! resurrection, the Twins sibling move, General growth) comes back as an
//! ordered `DeferredEffect` list, and `apply_deferred` plays it out.
//! `resolve_move` does both and is what legality testing and the turn
//! controller use.

use crate::errors::ContractViolation;
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Square, Team};
use crate::game_state::piece_catalog::SpecialAbility;
use crate::game_state::piece_instance::PieceId;
use crate::move_generation::special_effects::{
    apply_sibling_move, captured_effect, destroy_with_effects, mirrored_destination,
    try_serpent_transform, try_thief_resurrect, CapturedRecord, Effect,
};
use crate::moves::move_candidate::MoveCandidate;

/// Why a Twins move cannot be played as a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwinRejection {
    MirrorOffBoard,
    MirrorBlockedByAlly(Square),
    /// The sibling would land on the mover's own destination.
    MirrorCollides(Square),
}

/// Cross-instance work staged by `execute`, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredEffect {
    Resurrect {
        team: Team,
        slot: Square,
        record: CapturedRecord,
    },
    SiblingMove {
        sibling: PieceId,
        to: Square,
    },
    GrowGeneralRange {
        general: PieceId,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedMove {
    pub effects: Vec<Effect>,
    pub deferred: Vec<DeferredEffect>,
    /// Most recent contact capture of this move, if any.
    pub last_captured: Option<CapturedRecord>,
    /// Whether the mover ended on a different square than it started.
    pub relocated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// The move is illegal as a whole; the board was not touched.
    Rejected(TwinRejection),
    Applied(AppliedMove),
}

impl ExecutionResult {
    pub fn is_rejected(&self) -> bool {
        matches!(self, ExecutionResult::Rejected(_))
    }

    pub fn applied(&self) -> Option<&AppliedMove> {
        match self {
            ExecutionResult::Applied(applied) => Some(applied),
            ExecutionResult::Rejected(_) => None,
        }
    }
}

/// Executes the mover's own steps and stages deferred effects without
/// applying them.
pub fn execute(
    board: &mut BoardState,
    mover: PieceId,
    candidate: MoveCandidate,
) -> Result<ExecutionResult, ContractViolation> {
    let (team, origin, special, original_square) = board
        .piece(mover)
        .map(|p| (p.team, p.square, p.special(), p.original_square))
        .ok_or(ContractViolation::MissingPiece(mover))?;

    let mut applied = AppliedMove::default();

    // Twins pre-check. Nothing is mutated before a rejection.
    let mut staged_sibling = None;
    if special == SpecialAbility::Twins && !board.piece(mover).is_some_and(|p| p.twin_lost) {
        match board.twin_sibling(mover).map(|s| (s.id, s.square)) {
            None => {
                if let Some(twin) = board.piece_mut(mover) {
                    twin.twin_lost = true;
                }
                applied.effects.push(Effect::TwinLost { piece: mover });
            }
            Some((sibling, sibling_square)) => {
                let Some(mirror) = mirrored_destination(sibling_square, origin, candidate.to) else {
                    return Ok(ExecutionResult::Rejected(TwinRejection::MirrorOffBoard));
                };
                if board.is_ally(mirror, team) {
                    return Ok(ExecutionResult::Rejected(TwinRejection::MirrorBlockedByAlly(
                        mirror,
                    )));
                }
                if mirror == candidate.to {
                    return Ok(ExecutionResult::Rejected(TwinRejection::MirrorCollides(mirror)));
                }
                staged_sibling = Some(DeferredEffect::SiblingMove { sibling, to: mirror });
            }
        }
    }

    if candidate.is_ranged_capture {
        let target = enemy_at(board, candidate.to, team)?;
        applied.effects.push(Effect::Shot {
            archer: mover,
            target: candidate.to,
        });
        let removed = destroy_with_effects(board, target, &mut applied.effects)?;
        applied.effects.push(captured_effect(&removed));
        applied.deferred.extend(staged_sibling);
        return Ok(ExecutionResult::Applied(applied));
    }

    let mut captured_giant = false;
    if candidate.is_capture {
        let victim = enemy_at(board, candidate.to, team)?;
        let transformed = if special == SpecialAbility::Serpent {
            try_serpent_transform(board, team, victim, &mut applied.effects)?
        } else {
            None
        };

        let removed = match transformed {
            Some(removed) => removed,
            None => {
                let removed = destroy_with_effects(board, victim, &mut applied.effects)?;
                captured_giant = removed.special() == SpecialAbility::SkeletonGiant;
                removed
            }
        };
        applied.effects.push(captured_effect(&removed));
        applied.last_captured = Some(CapturedRecord::of(&removed));
    } else if !board.is_empty(candidate.to) {
        return Err(ContractViolation::QuietTargetOccupied(candidate.to));
    }

    // A blast on the way may have taken the mover with it. Resurrection and
    // the sibling move still run; relocation, recoil and growth do not.
    if board.piece(mover).is_none() {
        applied.effects.push(Effect::MoverDestroyed { piece: mover });
        stage_resurrection(special, team, original_square, &mut applied);
        applied.deferred.extend(staged_sibling);
        return Ok(ExecutionResult::Applied(applied));
    }

    if captured_giant {
        if let Some(recoil) = candidate.recoil_target {
            recoil_to(board, mover, recoil, &mut applied)?;
        }
        stage_resurrection(special, team, original_square, &mut applied);
        applied.deferred.extend(staged_sibling);
        return Ok(ExecutionResult::Applied(applied));
    }

    let from = board.relocate(mover, candidate.to)?;
    applied.relocated = true;
    applied.effects.push(Effect::Moved {
        piece: mover,
        from,
        to: candidate.to,
    });

    if let Some(recoil) = candidate.recoil_target {
        if !board.is_empty(recoil) {
            return Err(ContractViolation::SquareOccupied(recoil));
        }
        let landed = board.place(mover, recoil)?;
        applied.effects.push(Effect::Recoiled {
            piece: mover,
            from: landed,
            to: recoil,
        });
    }

    stage_resurrection(special, team, original_square, &mut applied);
    applied.deferred.extend(staged_sibling);
    if special == SpecialAbility::General {
        applied
            .deferred
            .push(DeferredEffect::GrowGeneralRange { general: mover });
    }

    Ok(ExecutionResult::Applied(applied))
}

/// Plays the staged effects of `applied` in order, appending what they did.
pub fn apply_deferred(
    board: &mut BoardState,
    applied: &mut AppliedMove,
) -> Result<(), ContractViolation> {
    for deferred in std::mem::take(&mut applied.deferred) {
        match deferred {
            DeferredEffect::Resurrect { team, slot, record } => {
                try_thief_resurrect(board, team, slot, &record, &mut applied.effects)?;
            }
            DeferredEffect::SiblingMove { sibling, to } => {
                if let Some(record) = apply_sibling_move(board, sibling, to, &mut applied.effects)? {
                    applied.last_captured = Some(record);
                }
            }
            DeferredEffect::GrowGeneralRange { general } => {
                if let Some(piece) = board.piece_mut(general) {
                    piece.grow_general_range();
                    let range = piece.general_range;
                    applied.effects.push(Effect::RangeGrew {
                        piece: general,
                        range,
                    });
                }
            }
        }
    }
    Ok(())
}

/// `execute` followed by `apply_deferred`.
pub fn resolve_move(
    board: &mut BoardState,
    mover: PieceId,
    candidate: MoveCandidate,
) -> Result<ExecutionResult, ContractViolation> {
    let mut result = execute(board, mover, candidate)?;
    if let ExecutionResult::Applied(applied) = &mut result {
        apply_deferred(board, applied)?;
    }
    Ok(result)
}

fn enemy_at(board: &BoardState, square: Square, team: Team) -> Result<PieceId, ContractViolation> {
    board
        .piece_at(square)
        .filter(|p| p.team != team)
        .map(|p| p.id)
        .ok_or(ContractViolation::CaptureTargetNotEnemy(square))
}

/// Etourdie recoil out of the Skeleton Giant branch: the mover never left its
/// origin, so the retreat is a relocation from there.
fn recoil_to(
    board: &mut BoardState,
    mover: PieceId,
    recoil: Square,
    applied: &mut AppliedMove,
) -> Result<(), ContractViolation> {
    if !board.is_empty(recoil) {
        return Err(ContractViolation::SquareOccupied(recoil));
    }
    let from = board.relocate(mover, recoil)?;
    applied.relocated = true;
    applied.effects.push(Effect::Recoiled {
        piece: mover,
        from,
        to: recoil,
    });
    Ok(())
}

fn stage_resurrection(
    special: SpecialAbility,
    team: Team,
    slot: Square,
    applied: &mut AppliedMove,
) {
    if special != SpecialAbility::Thief {
        return;
    }
    if let Some(record) = applied.last_captured.take() {
        applied
            .deferred
            .push(DeferredEffect::Resurrect { team, slot, record });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_types::Team;
    use crate::utils::board_text::{parse_board, sq};

    fn resolve(board: &mut BoardState, from: Square, candidate: MoveCandidate) -> ExecutionResult {
        let mover = board.piece_at(from).expect("mover present").id;
        resolve_move(board, mover, candidate).expect("candidate consistent with board")
    }

    #[test]
    fn capturing_skeleton_giant_clears_ring_and_attacker_stays() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ...pP...
             ...s....
             ...C.p..
             ........
             K.......",
        )
        .expect("board parses");
        let commander = board.piece_at(sq(3, 2)).expect("commander").id;
        let result = resolve(&mut board, sq(3, 2), MoveCandidate::capture(sq(3, 3)));
        let applied = result.applied().expect("applied");

        // The commander sat next to the giant and went up with it.
        assert!(board.piece(commander).is_none());
        assert!(applied.effects.contains(&Effect::MoverDestroyed { piece: commander }));
        for (d_file, d_rank) in crate::moves::offset_tables::KING_OFFSETS {
            let around = sq(3, 3).offset(d_file, d_rank).expect("on board");
            assert!(board.is_empty(around), "{around} not cleared");
        }
        assert!(board.is_empty(sq(3, 3)));
        assert!(!applied.relocated);
        assert!(board.piece_at(sq(5, 2)).is_some());
    }

    #[test]
    fn distant_attacker_on_giant_does_not_relocate() {
        let mut board = parse_board(
            "....k...
             ........
             ...s....
             ........
             ........
             ........
             ........
             K..E....",
        )
        .expect("board parses");
        let result = resolve(&mut board, sq(3, 0), MoveCandidate::capture(sq(3, 5)));
        let applied = result.applied().expect("applied");
        assert!(!applied.relocated);
        assert!(board.is_empty(sq(3, 5)));
        assert_eq!(board.piece_at(sq(3, 0)).map(|p| p.name()), Some("Etourdie"));
    }

    #[test]
    fn etourdie_recoils_from_its_origin() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ...c....
             ........
             ...E....
             ........
             K.......",
        )
        .expect("board parses");
        let etourdie = board.piece_at(sq(3, 2)).expect("etourdie").id;
        let candidate = MoveCandidate::capture_with_recoil(sq(3, 4), sq(3, 0));
        resolve(&mut board, sq(3, 2), candidate);

        let piece = board.piece(etourdie).expect("alive");
        assert_eq!(piece.square, sq(3, 0));
        assert_eq!(piece.previous_square, sq(3, 2));
        assert!(board.is_empty(sq(3, 4)));
    }

    #[test]
    fn thief_resurrects_capture_once_on_its_home_square() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ........
             ........
             .c......
             .T......
             K.......",
        )
        .expect("board parses");
        let thief = board.piece_at(sq(1, 1)).expect("thief").id;
        // As if the thief had stepped up from b1.
        board.piece_mut(thief).expect("alive").original_square = sq(1, 0);

        let result = resolve(&mut board, sq(1, 1), MoveCandidate::capture(sq(1, 2)));
        let applied = result.applied().expect("applied");
        let revived = board.piece_at(sq(1, 0)).expect("resurrected piece");
        assert_eq!(revived.team, Team::White);
        assert!(revived.stolen);
        assert_eq!(
            applied
                .effects
                .iter()
                .filter(|e| matches!(e, Effect::Resurrected { .. }))
                .count(),
            1
        );
        assert!(applied.last_captured.is_none());
    }

    #[test]
    fn thief_resurrection_blocked_when_home_is_taken() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ........
             ........
             .c......
             .T......
             KP......",
        )
        .expect("board parses");
        board
            .piece_mut(board.piece_at(sq(1, 1)).expect("thief").id)
            .expect("alive")
            .original_square = sq(1, 0);
        let before = board.piece_count();
        let result = resolve(&mut board, sq(1, 1), MoveCandidate::capture(sq(1, 2)));
        assert!(result
            .applied()
            .expect("applied")
            .effects
            .contains(&Effect::ResurrectionBlocked { at: sq(1, 0) }));
        assert_eq!(board.piece_count(), before - 1);
    }

    #[test]
    fn thief_blown_up_by_giant_still_resurrects_it() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ........
             ........
             .s......
             .T......
             K.......",
        )
        .expect("board parses");
        let thief = board.piece_at(sq(1, 1)).expect("thief").id;
        board.piece_mut(thief).expect("alive").original_square = sq(1, 0);

        let result = resolve(&mut board, sq(1, 1), MoveCandidate::capture(sq(1, 2)));
        let applied = result.applied().expect("applied");

        assert!(board.piece(thief).is_none());
        assert!(applied.effects.contains(&Effect::MoverDestroyed { piece: thief }));
        let revived = board.piece_at(sq(1, 0)).expect("resurrected giant");
        assert_eq!(revived.special(), SpecialAbility::SkeletonGiant);
        assert_eq!(revived.team, Team::White);
        assert!(revived.stolen);
        assert!(board.is_empty(sq(1, 2)));
        assert!(!applied.relocated);
    }

    #[test]
    fn twins_move_together_with_mirrored_delta() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ........
             ........
             ........
             ........
             KW....W.",
        )
        .expect("board parses");
        let result = resolve(&mut board, sq(1, 0), MoveCandidate::quiet(sq(2, 2)));
        assert!(!result.is_rejected());
        assert_eq!(board.piece_at(sq(2, 2)).map(|p| p.name()), Some("Twins"));
        assert_eq!(board.piece_at(sq(5, 2)).map(|p| p.name()), Some("Twins"));
        assert!(board.is_empty(sq(6, 0)));
    }

    #[test]
    fn twins_move_rejected_when_mirror_blocked_or_off_board() {
        let board = parse_board(
            "....k...
             ........
             ........
             ........
             ........
             .....P..
             ........
             KW....W.",
        )
        .expect("board parses");

        let mut blocked = board;
        let result = resolve(&mut blocked, sq(1, 0), MoveCandidate::quiet(sq(2, 2)));
        assert_eq!(
            result,
            ExecutionResult::Rejected(TwinRejection::MirrorBlockedByAlly(sq(5, 2)))
        );
        assert!(blocked.piece_at(sq(1, 0)).is_some());

        let mut wide = parse_board(
            "....k...
             ........
             ........
             ........
             ........
             ........
             ........
             .W..K..W",
        )
        .expect("board parses");
        // b1 to a3 is (-1, +2); h1 mirrored by (+1, +2) leaves the board.
        let result = resolve(&mut wide, sq(1, 0), MoveCandidate::quiet(sq(0, 2)));
        assert_eq!(result, ExecutionResult::Rejected(TwinRejection::MirrorOffBoard));
        assert_eq!(wide.piece_at(sq(1, 0)).map(|p| p.name()), Some("Twins"));
    }

    #[test]
    fn twins_move_rejected_when_mirror_lands_on_primary_target() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ........
             ........
             ..W.W...
             ........
             K.......",
        )
        .expect("board parses");
        // c3 to d5 is (+1, +2); e3 mirrored by (-1, +2) is d5 as well.
        let result = resolve(&mut board, sq(2, 2), MoveCandidate::quiet(sq(3, 4)));
        assert_eq!(
            result,
            ExecutionResult::Rejected(TwinRejection::MirrorCollides(sq(3, 4)))
        );
        assert_eq!(board.piece_at(sq(2, 2)).map(|p| p.name()), Some("Twins"));
        assert_eq!(board.piece_at(sq(4, 2)).map(|p| p.name()), Some("Twins"));
        assert!(board.is_empty(sq(3, 4)));
    }

    #[test]
    fn sibling_capture_runs_the_victims_explosion() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             .......p
             .......s
             ..W..W..
             ........
             ....K...",
        )
        .expect("board parses");
        let sibling = board.piece_at(sq(5, 2)).expect("sibling").id;
        let giant = board.piece_at(sq(7, 3)).expect("giant").id;
        let pawn = board.piece_at(sq(7, 4)).expect("pawn").id;

        // c3 to a4 is (-2, +1); f3 mirrors to h4, onto the giant.
        let result = resolve(&mut board, sq(2, 2), MoveCandidate::quiet(sq(0, 3)));
        let applied = result.applied().expect("applied");

        assert_eq!(board.piece_at(sq(0, 3)).map(|p| p.name()), Some("Twins"));
        assert_eq!(board.piece(sibling).map(|p| p.square), Some(sq(7, 3)));
        assert!(board.piece(giant).is_none());
        assert!(board.piece(pawn).is_none());
        assert!(applied.effects.contains(&Effect::Exploded {
            at: sq(7, 3),
            destroyed: vec![pawn],
        }));
        assert!(applied
            .effects
            .iter()
            .any(|e| matches!(e, Effect::Captured { piece, .. } if *piece == giant)));
        assert_eq!(
            applied.last_captured.as_ref().map(|r| r.profile.special),
            Some(SpecialAbility::SkeletonGiant)
        );
    }

    #[test]
    fn sibling_caught_in_blast_is_skipped() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ...s....
             ....W...
             ..W.....
             ........
             K.......",
        )
        .expect("board parses");
        let mover = board.piece_at(sq(2, 2)).expect("twin").id;
        let sibling = board.piece_at(sq(4, 3)).expect("sibling").id;

        // c3 takes the giant on d5; e4 sits next to it.
        let result = resolve(&mut board, sq(2, 2), MoveCandidate::capture(sq(3, 4)));
        let applied = result.applied().expect("applied");

        assert!(board.piece(sibling).is_none());
        assert!(applied.effects.contains(&Effect::SiblingSkipped { piece: sibling }));
        assert!(!applied
            .effects
            .iter()
            .any(|e| matches!(e, Effect::SiblingMoved { .. })));
        assert_eq!(board.piece(mover).map(|p| p.square), Some(sq(2, 2)));
        assert!(board.is_empty(sq(3, 5)));
    }

    #[test]
    fn lone_twin_is_marked_lost_and_moves_alone() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ........
             ........
             ........
             ........
             KW......",
        )
        .expect("board parses");
        let twin = board.piece_at(sq(1, 0)).expect("twin").id;
        let result = resolve(&mut board, sq(1, 0), MoveCandidate::quiet(sq(2, 2)));
        assert!(result
            .applied()
            .expect("applied")
            .effects
            .contains(&Effect::TwinLost { piece: twin }));
        assert!(board.piece(twin).expect("alive").twin_lost);
    }

    #[test]
    fn serpent_turns_moved_victim_into_pawn_on_its_previous_square() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ........
             ........
             ........
             .c......
             N...K...",
        )
        .expect("board parses");
        let victim = board.piece_at(sq(1, 1)).expect("commander").id;
        board.piece_mut(victim).expect("alive").previous_square = sq(1, 3);

        let serpent = board.piece_at(sq(0, 0)).expect("serpent").id;
        resolve(&mut board, sq(0, 0), MoveCandidate::capture(sq(1, 1)));

        assert_eq!(board.piece(serpent).map(|p| p.square), Some(sq(1, 1)));
        let pawn = board.piece_at(sq(1, 3)).expect("infused pawn");
        assert!(pawn.is_pawn());
        assert!(pawn.infused);
        assert_eq!(pawn.team, Team::White);
    }

    #[test]
    fn serpent_falls_back_to_plain_capture_for_unmoved_victim() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ........
             ........
             ........
             .c......
             N...K...",
        )
        .expect("board parses");
        let before = board.piece_count();
        resolve(&mut board, sq(0, 0), MoveCandidate::capture(sq(1, 1)));
        assert_eq!(board.piece_count(), before - 1);
        assert!(!board.pieces().any(|p| p.infused));
    }

    #[test]
    fn general_grows_only_when_it_relocates() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ........
             ........
             ...s....
             ...G....
             K.......",
        )
        .expect("board parses");
        let general = board.piece_at(sq(3, 1)).expect("general").id;

        let mut quiet = board.clone();
        resolve(&mut quiet, sq(3, 1), MoveCandidate::quiet(sq(4, 1)));
        assert_eq!(quiet.piece(general).map(|p| p.general_range), Some(2));

        // Capturing the giant next door blows the general up with it.
        resolve(&mut board, sq(3, 1), MoveCandidate::capture(sq(3, 2)));
        assert!(board.piece(general).is_none());
    }

    #[test]
    fn general_taking_distant_giant_keeps_square_and_range() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ........
             ...s....
             ........
             ...G....
             K.......",
        )
        .expect("board parses");
        let general = board.piece_at(sq(3, 1)).expect("general").id;
        board.piece_mut(general).expect("alive").general_range = 3;

        let result = resolve(&mut board, sq(3, 1), MoveCandidate::capture(sq(3, 3)));
        let applied = result.applied().expect("applied");

        let piece = board.piece(general).expect("outside the blast");
        assert_eq!(piece.square, sq(3, 1));
        assert_eq!(piece.general_range, 3);
        assert!(!applied.relocated);
        assert!(!applied
            .effects
            .iter()
            .any(|e| matches!(e, Effect::RangeGrew { .. })));
        assert!(board.is_empty(sq(3, 3)));
    }

    #[test]
    fn general_range_caps_at_eight() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ........
             ........
             ........
             ........
             G...K...",
        )
        .expect("board parses");
        let general = board.piece_at(sq(0, 0)).expect("general").id;
        board.piece_mut(general).expect("alive").general_range = 8;
        resolve(&mut board, sq(0, 0), MoveCandidate::quiet(sq(0, 1)));
        assert_eq!(board.piece(general).map(|p| p.general_range), Some(8));
    }

    #[test]
    fn archer_shot_leaves_archer_in_place() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ........
             ....p...
             ........
             ....A...
             K.......",
        )
        .expect("board parses");
        let archer = board.piece_at(sq(4, 1)).expect("archer").id;
        let result = resolve(&mut board, sq(4, 1), MoveCandidate::ranged(sq(4, 3)));
        assert!(!result.applied().expect("applied").relocated);
        assert!(board.is_empty(sq(4, 3)));
        assert_eq!(board.piece(archer).map(|p| p.square), Some(sq(4, 1)));
    }

    #[test]
    fn inconsistent_candidates_are_contract_violations() {
        let mut board = parse_board(
            "....k...
             ........
             ........
             ........
             ........
             ........
             ....P...
             K.......",
        )
        .expect("board parses");
        let pawn = board.piece_at(sq(4, 1)).expect("pawn").id;
        assert_eq!(
            execute(&mut board, pawn, MoveCandidate::capture(sq(4, 2))),
            Err(ContractViolation::CaptureTargetNotEnemy(sq(4, 2)))
        );
        assert_eq!(
            execute(&mut board, pawn, MoveCandidate::quiet(sq(0, 0))),
            Err(ContractViolation::QuietTargetOccupied(sq(0, 0)))
        );
    }
}
