//! Ray-cast movement, including the Etourdie capture restrictions.

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::DirectionSet;
use crate::game_state::piece_catalog::SpecialAbility;
use crate::game_state::piece_instance::PieceInstance;
use crate::moves::move_candidate::MoveCandidate;

/// Distance an Etourdie is thrown back after a contact capture.
pub const RECOIL_DISTANCE: i8 = 2;

pub fn generate_slide_moves(
    board: &BoardState,
    piece: &PieceInstance,
    directions: DirectionSet,
    max_range: u8,
    out: &mut Vec<MoveCandidate>,
) {
    for direction in directions.iter() {
        let (d_file, d_rank) = direction.delta();
        let mut current = piece.square;

        for _ in 0..max_range {
            let Some(to) = current.offset(d_file, d_rank) else {
                break;
            };
            current = to;

            let Some(target) = board.piece_at(to) else {
                out.push(MoveCandidate::quiet(to));
                continue;
            };

            if target.team != piece.team {
                if piece.special() == SpecialAbility::Etourdie {
                    if let Some(candidate) = etourdie_capture(board, piece, (d_file, d_rank), target) {
                        out.push(candidate);
                    }
                } else {
                    out.push(MoveCandidate::capture(to));
                }
            }
            break;
        }
    }
}

/// An Etourdie never takes pawns, and any other capture needs both squares
/// behind its origin (against the direction of travel) empty.
fn etourdie_capture(
    board: &BoardState,
    etourdie: &PieceInstance,
    (d_file, d_rank): (i8, i8),
    target: &PieceInstance,
) -> Option<MoveCandidate> {
    if target.is_pawn() {
        return None;
    }

    let first_back = etourdie.square.offset(-d_file, -d_rank)?;
    let recoil_target = etourdie
        .square
        .offset(-RECOIL_DISTANCE * d_file, -RECOIL_DISTANCE * d_rank)?;
    if !board.is_empty(first_back) || !board.is_empty(recoil_target) {
        return None;
    }

    Some(MoveCandidate::capture_with_recoil(target.square, recoil_target))
}
