//! Pawn pushes and diagonal captures. No en passant, no promotion.

use crate::game_state::board_state::BoardState;
use crate::game_state::piece_instance::PieceInstance;
use crate::moves::move_candidate::MoveCandidate;

pub fn generate_pawn_moves(board: &BoardState, pawn: &PieceInstance, out: &mut Vec<MoveCandidate>) {
    let forward = pawn.team.forward();

    if let Some(one_step) = pawn.square.offset(0, forward) {
        if board.is_empty(one_step) {
            out.push(MoveCandidate::quiet(one_step));

            if pawn.square.rank() == pawn.team.pawn_rank() {
                if let Some(two_step) = pawn.square.offset(0, 2 * forward) {
                    if board.is_empty(two_step) {
                        out.push(MoveCandidate::quiet(two_step));
                    }
                }
            }
        }
    }

    for file_delta in [-1i8, 1i8] {
        let Some(to) = pawn.square.offset(file_delta, forward) else {
            continue;
        };
        if board.is_enemy(to, pawn.team) {
            out.push(MoveCandidate::capture(to));
        }
    }
}
