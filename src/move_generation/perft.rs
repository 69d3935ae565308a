use std::sync::Arc;
use std::thread;

use crate::errors::{ContractViolation, RulesResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::Team;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;
use crate::move_generation::move_executor::{resolve_move, AppliedMove, ExecutionResult};
use crate::move_generation::move_generator::{LegalMove, MoveGenerator};
use crate::move_generation::special_effects::Effect;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub ranged_captures: usize,
    pub explosions: usize,
    pub transformations: usize,
    pub resurrections: usize,
    pub sibling_moves: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.ranged_captures += rhs.ranged_captures;
        self.explosions += rhs.explosions;
        self.transformations += rhs.transformations;
        self.resurrections += rhs.resurrections;
        self.sibling_moves += rhs.sibling_moves;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(
        &mut self,
        mv: &LegalMove,
        applied: &AppliedMove,
        after: &BoardState,
        mover: Team,
    ) -> Result<(), ContractViolation> {
        self.nodes += 1;
        if mv.candidate.is_capture {
            self.captures += 1;
        }
        if mv.candidate.is_ranged_capture {
            self.ranged_captures += 1;
        }
        for effect in &applied.effects {
            match effect {
                Effect::Exploded { .. } => self.explosions += 1,
                Effect::Transformed { .. } => self.transformations += 1,
                Effect::Resurrected { .. } => self.resurrections += 1,
                Effect::SiblingMoved { .. } => self.sibling_moves += 1,
                _ => {}
            }
        }

        let defender = mover.opposite();
        if is_king_in_check(after, defender) {
            self.checks += 1;
            if !has_any_legal_move(after, defender)? {
                self.checkmates += 1;
            }
        }
        Ok(())
    }
}

/// Counts leaf positions `depth` plies below `board` with `team` to move.
pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &BoardState,
    team: Team,
    depth: u8,
) -> RulesResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.moves_for_team(board, team)? {
        perft_recurse(generator, board, team, &mv, depth, &mut total)?;
    }
    Ok(total)
}

/// Same counts as `perft`, with one worker thread per root move. Each worker
/// owns its snapshot, so no board state is shared.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    board: &BoardState,
    team: Team,
    depth: u8,
) -> RulesResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root_moves = generator.moves_for_team(board, team)?;
    let mut handles = Vec::with_capacity(root_moves.len());
    for mv in root_moves {
        let generator_ref = Arc::clone(&generator);
        let root = board.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &root, team, &mv, depth, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
        result?;
        total.merge(local);
    }
    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    board: &BoardState,
    team: Team,
    mv: &LegalMove,
    remaining: u8,
    counts: &mut PerftCounts,
) -> RulesResult<()> {
    let mut after = board.clone();
    let ExecutionResult::Applied(applied) = resolve_move(&mut after, mv.piece, mv.candidate)? else {
        return Ok(());
    };

    if remaining == 1 {
        counts.record_leaf(mv, &applied, &after, team)?;
        return Ok(());
    }

    let next = team.opposite();
    for child in generator.moves_for_team(&after, next)? {
        perft_recurse(generator, &after, next, &child, remaining - 1, counts)?;
    }
    Ok(())
}
