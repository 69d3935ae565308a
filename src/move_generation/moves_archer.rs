//! Archer movement: king steps confined to its back two ranks, plus a
//! forward shot that removes an enemy without moving the Archer.

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::Square;
use crate::game_state::piece_instance::PieceInstance;
use crate::move_generation::moves_king_like::generate_king_like_moves;
use crate::moves::move_candidate::MoveCandidate;

pub const ARCHER_SHOT_RANGE: i8 = 3;

pub fn generate_archer_moves(board: &BoardState, archer: &PieceInstance, out: &mut Vec<MoveCandidate>) {
    let mut steps = Vec::with_capacity(8);
    generate_king_like_moves(board, archer, false, &mut steps);
    out.extend(
        steps
            .into_iter()
            .filter(|m| archer.team.is_back_zone(m.to.rank())),
    );

    if let Some(target) = archer_shot_target(board, archer) {
        out.push(MoveCandidate::ranged(target));
    }
}

/// First enemy straight ahead within range, unless an ally stands in front of it.
pub fn archer_shot_target(board: &BoardState, archer: &PieceInstance) -> Option<Square> {
    let forward = archer.team.forward();
    for step in 1..=ARCHER_SHOT_RANGE {
        let square = archer.square.offset(0, forward * step)?;
        if let Some(hit) = board.piece_at(square) {
            return (hit.team != archer.team).then_some(square);
        }
    }
    None
}
