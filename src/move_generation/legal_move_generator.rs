//! Legal move filtering.
//!
//! Every pseudo-legal candidate is tried on its own clone of the board with
//! the full executor (deferred effects included). The candidate survives if
//! the clone accepted it and the mover's king is not attacked afterwards.
//! Trials never share state, so the result does not depend on the order in
//! which candidates are evaluated.

use crate::errors::{ContractViolation, RulesResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::Team;
use crate::game_state::piece_instance::PieceId;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_executor::{resolve_move, AppliedMove, ExecutionResult};
use crate::move_generation::move_generator::{
    generate_pseudo_legal_moves, LegalMove, MoveGenerator,
};
use crate::moves::move_candidate::MoveCandidate;

/// Plays `candidate` on a snapshot. Returns the snapshot and what happened if
/// the move is legal, `None` otherwise.
pub fn simulate_move(
    board: &BoardState,
    piece: PieceId,
    candidate: MoveCandidate,
) -> Result<Option<(BoardState, AppliedMove)>, ContractViolation> {
    let team = board
        .piece(piece)
        .map(|p| p.team)
        .ok_or(ContractViolation::MissingPiece(piece))?;

    let mut snapshot = board.clone();
    match resolve_move(&mut snapshot, piece, candidate)? {
        ExecutionResult::Rejected(_) => Ok(None),
        ExecutionResult::Applied(applied) => {
            if is_king_in_check(&snapshot, team) {
                Ok(None)
            } else {
                Ok(Some((snapshot, applied)))
            }
        }
    }
}

pub fn legal_moves_for_piece(
    board: &BoardState,
    piece: PieceId,
) -> Result<Vec<MoveCandidate>, ContractViolation> {
    let Some(mover) = board.piece(piece) else {
        return Ok(Vec::new());
    };

    let pseudo = generate_pseudo_legal_moves(board, mover);
    let mut legal = Vec::with_capacity(pseudo.len());
    for candidate in pseudo {
        if simulate_move(board, piece, candidate)?.is_some() {
            legal.push(candidate);
        }
    }
    Ok(legal)
}

pub fn legal_moves_for_team(
    board: &BoardState,
    team: Team,
) -> Result<Vec<LegalMove>, ContractViolation> {
    let movers: Vec<_> = board.pieces_of(team).map(|p| (p.id, p.square)).collect();
    let mut out = Vec::with_capacity(64);
    for (piece, from) in movers {
        for candidate in legal_moves_for_piece(board, piece)? {
            out.push(LegalMove {
                piece,
                from,
                candidate,
            });
        }
    }
    Ok(out)
}

/// Stops at the first legal move found.
pub fn has_any_legal_move(board: &BoardState, team: Team) -> Result<bool, ContractViolation> {
    for mover in board.pieces_of(team) {
        for candidate in generate_pseudo_legal_moves(board, mover) {
            if simulate_move(board, mover.id, candidate)?.is_some() {
                return Ok(true);
            }
        }
    }
    Ok(false)
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn moves_for_piece(&self, board: &BoardState, piece: PieceId) -> RulesResult<Vec<MoveCandidate>> {
        Ok(legal_moves_for_piece(board, piece)?)
    }

    fn moves_for_team(&self, board: &BoardState, team: Team) -> RulesResult<Vec<LegalMove>> {
        Ok(legal_moves_for_team(board, team)?)
    }
}
