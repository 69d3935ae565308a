//! Squares a piece threatens, for check detection only.
//!
//! This deliberately differs from move generation where abilities diverge:
//! an Archer threatens its shot line but not its back-zone steps, pawns
//! threaten both forward diagonals whatever stands there, and recoil room
//! does not limit what an Etourdie attacks.

use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{SquareSet, Team};
use crate::game_state::piece_catalog::SpecialAbility;
use crate::game_state::piece_instance::PieceInstance;
use crate::move_generation::move_generator::{movement_shape, MoveShape};
use crate::move_generation::moves_archer::archer_shot_target;
use crate::moves::offset_tables::{king_ring, knight_reach, KNIGHT_OFFSETS};

pub fn attacked_squares(board: &BoardState, piece: &PieceInstance) -> SquareSet {
    if piece.special() == SpecialAbility::Archer {
        return archer_shot_target(board, piece).into_iter().collect();
    }

    if piece.is_pawn() {
        let forward = piece.team.forward();
        return [-1i8, 1i8]
            .into_iter()
            .filter_map(|d_file| piece.square.offset(d_file, forward))
            .collect();
    }

    let shape = movement_shape(piece);
    if piece.is_king() || shape.is_king_ring() {
        return SquareSet(king_ring(piece.square).0 & !board.occupancy(piece.team));
    }

    match shape {
        MoveShape::Step(offsets) if offsets == KNIGHT_OFFSETS.as_slice() => {
            SquareSet(knight_reach(piece.square).0 & !board.occupancy(piece.team))
        }
        MoveShape::Step(offsets) => offsets
            .iter()
            .filter_map(|&(d_file, d_rank)| piece.square.offset(d_file, d_rank))
            .filter(|to| !board.is_ally(*to, piece.team))
            .collect(),
        MoveShape::Slide { directions, range } => {
            let mut attacked = SquareSet::EMPTY;
            for direction in directions.iter() {
                let (d_file, d_rank) = direction.delta();
                let mut current = piece.square;
                for _ in 0..range {
                    let Some(to) = current.offset(d_file, d_rank) else {
                        break;
                    };
                    current = to;
                    match board.piece_at(to) {
                        None => attacked.insert(to),
                        Some(hit) => {
                            if hit.team != piece.team {
                                attacked.insert(to);
                            }
                            break;
                        }
                    }
                }
            }
            attacked
        }
    }
}

/// Union of every attack set of `team`.
pub fn team_attacks(board: &BoardState, team: Team) -> SquareSet {
    SquareSet(
        board
            .pieces_of(team)
            .fold(0u64, |acc, p| acc | attacked_squares(board, p).0),
    )
}
