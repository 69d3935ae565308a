//! King safety: check tests and the attackers of a square.

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Square, Team};
use crate::game_state::piece_instance::PieceId;
use crate::move_generation::attack_sets::attacked_squares;

#[inline]
pub fn king_square(board: &BoardState, team: Team) -> Option<Square> {
    board.king_of(team).map(|king| king.square)
}

/// A team without a living king counts as in check; that position is lost.
#[inline]
pub fn is_king_in_check(board: &BoardState, team: Team) -> bool {
    let Some(king_sq) = king_square(board, team) else {
        return true;
    };
    is_square_attacked(board, king_sq, team.opposite())
}

pub fn is_square_attacked(board: &BoardState, square: Square, attacker_team: Team) -> bool {
    board
        .pieces_of(attacker_team)
        .any(|p| attacked_squares(board, p).contains(square))
}

pub fn attackers_to_square(board: &BoardState, square: Square, attacker_team: Team) -> Vec<PieceId> {
    board
        .pieces_of(attacker_team)
        .filter(|p| attacked_squares(board, p).contains(square))
        .map(|p| p.id)
        .collect()
}
