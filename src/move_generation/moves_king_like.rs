use crate::game_state::board_state::BoardState;
use crate::game_state::piece_instance::PieceInstance;
use crate::moves::move_candidate::MoveCandidate;
use crate::moves::offset_tables::KING_OFFSETS;

/// One square in every direction. Contact captures are optional so the
/// Archer can reuse this for its repositioning steps.
pub fn generate_king_like_moves(
    board: &BoardState,
    piece: &PieceInstance,
    allow_contact_capture: bool,
    out: &mut Vec<MoveCandidate>,
) {
    for (d_file, d_rank) in KING_OFFSETS {
        let Some(to) = piece.square.offset(d_file, d_rank) else {
            continue;
        };
        match board.piece_at(to) {
            None => out.push(MoveCandidate::quiet(to)),
            Some(target) if target.team != piece.team && allow_contact_capture => {
                out.push(MoveCandidate::capture(to))
            }
            Some(_) => {}
        }
    }
}
