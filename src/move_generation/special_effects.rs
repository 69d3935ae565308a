//! Ability effects that reach beyond the mover: Skeleton Giant explosions,
//! Serpent transformation, Thief resurrection, and the mirrored Twins move.

use std::fmt;
use std::sync::Arc;

use crate::errors::ContractViolation;
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Square, Team};
use crate::game_state::piece_catalog::{PieceProfile, SpecialAbility};
use crate::game_state::piece_instance::{PieceId, PieceInstance};
use crate::moves::offset_tables::KING_OFFSETS;

/// Profile and team of the most recent contact capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub profile: Arc<PieceProfile>,
    pub team: Team,
}

impl CapturedRecord {
    pub fn of(piece: &PieceInstance) -> Self {
        Self {
            profile: Arc::clone(&piece.profile),
            team: piece.team,
        }
    }
}

/// One observable consequence of a move, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    TwinLost { piece: PieceId },
    Moved { piece: PieceId, from: Square, to: Square },
    Captured { piece: PieceId, name: String, team: Team, at: Square },
    Shot { archer: PieceId, target: Square },
    Exploded { at: Square, destroyed: Vec<PieceId> },
    Transformed { captured: PieceId, pawn: PieceId, at: Square },
    MoverDestroyed { piece: PieceId },
    Recoiled { piece: PieceId, from: Square, to: Square },
    Resurrected { piece: PieceId, name: String, at: Square },
    ResurrectionBlocked { at: Square },
    SiblingMoved { piece: PieceId, from: Square, to: Square },
    SiblingSkipped { piece: PieceId },
    RangeGrew { piece: PieceId, range: u8 },
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::TwinLost { .. } => write!(f, "twin_lost"),
            Effect::Moved { from, to, .. } => write!(f, "moved {from}{to}"),
            Effect::Captured { name, team, at, .. } => write!(f, "captured {team} {name} on {at}"),
            Effect::Shot { target, .. } => write!(f, "shot {target}"),
            Effect::Exploded { at, destroyed } => {
                write!(f, "exploded {at} destroying {}", destroyed.len())
            }
            Effect::Transformed { at, .. } => write!(f, "transformed into pawn on {at}"),
            Effect::MoverDestroyed { .. } => write!(f, "mover_destroyed"),
            Effect::Recoiled { from, to, .. } => write!(f, "recoiled {from}{to}"),
            Effect::Resurrected { name, at, .. } => write!(f, "resurrected {name} on {at}"),
            Effect::ResurrectionBlocked { at } => write!(f, "resurrection_blocked {at}"),
            Effect::SiblingMoved { from, to, .. } => write!(f, "sibling {from}{to}"),
            Effect::SiblingSkipped { .. } => write!(f, "sibling_skipped"),
            Effect::RangeGrew { range, .. } => write!(f, "range {range}"),
        }
    }
}

/// Removes `victim` and runs on-captured effects. A Skeleton Giant clears
/// the eight squares around it; giants caught in a blast explode in turn.
pub fn destroy_with_effects(
    board: &mut BoardState,
    victim: PieceId,
    effects: &mut Vec<Effect>,
) -> Result<PieceInstance, ContractViolation> {
    let removed = board
        .remove(victim)
        .ok_or(ContractViolation::MissingPiece(victim))?;

    let mut blasts = Vec::new();
    if removed.special() == SpecialAbility::SkeletonGiant {
        blasts.push(removed.square);
    }

    while let Some(center) = blasts.pop() {
        let mut destroyed = Vec::new();
        for (d_file, d_rank) in KING_OFFSETS {
            let Some(square) = center.offset(d_file, d_rank) else {
                continue;
            };
            let Some(id) = board.piece_at(square).map(|p| p.id) else {
                continue;
            };
            if let Some(gone) = board.remove(id) {
                destroyed.push(id);
                if gone.special() == SpecialAbility::SkeletonGiant {
                    blasts.push(gone.square);
                }
            }
        }
        effects.push(Effect::Exploded {
            at: center,
            destroyed,
        });
    }

    Ok(removed)
}

/// Serpent capture: an infused pawn of `team` appears on the victim's
/// previous square, if that square is empty, and the victim is removed.
/// Returns `None` (board untouched) when the square is taken.
pub fn try_serpent_transform(
    board: &mut BoardState,
    team: Team,
    victim: PieceId,
    effects: &mut Vec<Effect>,
) -> Result<Option<PieceInstance>, ContractViolation> {
    let slot = board
        .piece(victim)
        .map(|p| p.previous_square)
        .ok_or(ContractViolation::MissingPiece(victim))?;
    if !board.is_empty(slot) {
        return Ok(None);
    }

    let pawn = board.spawn(board.pawn_profile(), team, slot)?;
    if let Some(spawned) = board.piece_mut(pawn) {
        spawned.infused = true;
    }
    effects.push(Effect::Transformed {
        captured: victim,
        pawn,
        at: slot,
    });

    let removed = destroy_with_effects(board, victim, effects)?;
    Ok(Some(removed))
}

/// Spawns `record`'s profile for `team` on `slot` when the slot is empty.
pub fn try_thief_resurrect(
    board: &mut BoardState,
    team: Team,
    slot: Square,
    record: &CapturedRecord,
    effects: &mut Vec<Effect>,
) -> Result<Option<PieceId>, ContractViolation> {
    if !board.is_empty(slot) {
        effects.push(Effect::ResurrectionBlocked { at: slot });
        return Ok(None);
    }

    let id = board.spawn(Arc::clone(&record.profile), team, slot)?;
    if let Some(revived) = board.piece_mut(id) {
        revived.stolen = true;
    }
    effects.push(Effect::Resurrected {
        piece: id,
        name: record.profile.display_name.clone(),
        at: slot,
    });
    Ok(Some(id))
}

/// Sibling destination for a Twins move: the mover's delta mirrored on the
/// file axis, `(-d_file, +d_rank)`.
#[inline]
pub fn mirrored_destination(sibling: Square, origin: Square, to: Square) -> Option<Square> {
    let (d_file, d_rank) = origin.delta_to(to);
    sibling.offset(-d_file, d_rank)
}

/// Applies a staged sibling move. The sibling may have been destroyed since
/// it was staged, or an ally may now hold its destination; it then stays put.
pub fn apply_sibling_move(
    board: &mut BoardState,
    sibling: PieceId,
    to: Square,
    effects: &mut Vec<Effect>,
) -> Result<Option<CapturedRecord>, ContractViolation> {
    let Some(team) = board.piece(sibling).map(|p| p.team) else {
        effects.push(Effect::SiblingSkipped { piece: sibling });
        return Ok(None);
    };

    let mut record = None;
    match board.piece_at(to).map(|p| (p.id, p.team)) {
        Some((_, occupant_team)) if occupant_team == team => {
            effects.push(Effect::SiblingSkipped { piece: sibling });
            return Ok(None);
        }
        Some((occupant, _)) => {
            let removed = destroy_with_effects(board, occupant, effects)?;
            effects.push(captured_effect(&removed));
            record = Some(CapturedRecord::of(&removed));
        }
        None => {}
    }

    if board.piece(sibling).is_none() {
        effects.push(Effect::SiblingSkipped { piece: sibling });
        return Ok(record);
    }

    let from = board.relocate(sibling, to)?;
    effects.push(Effect::SiblingMoved {
        piece: sibling,
        from,
        to,
    });
    Ok(record)
}

pub fn captured_effect(removed: &PieceInstance) -> Effect {
    Effect::Captured {
        piece: removed.id,
        name: removed.profile.display_name.clone(),
        team: removed.team,
        at: removed.square,
    }
}
