use crate::game_state::board_state::BoardState;
use crate::game_state::piece_instance::PieceInstance;
use crate::moves::move_candidate::MoveCandidate;

/// Fixed-offset moves onto empty or enemy-held squares.
pub fn generate_step_moves(
    board: &BoardState,
    piece: &PieceInstance,
    offsets: &[(i8, i8)],
    out: &mut Vec<MoveCandidate>,
) {
    for &(d_file, d_rank) in offsets {
        let Some(to) = piece.square.offset(d_file, d_rank) else {
            continue;
        };
        match board.piece_at(to) {
            None => out.push(MoveCandidate::quiet(to)),
            Some(target) if target.team != piece.team => out.push(MoveCandidate::capture(to)),
            Some(_) => {}
        }
    }
}
