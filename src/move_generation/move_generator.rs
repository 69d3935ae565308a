//! Pseudo-legal move generation and the generator abstraction.
//!
//! Generation dispatches on the mover's special ability first (Archer,
//! Twins, Serpent, General), then on its base shape (pawn, king, step,
//! slide). Candidates ignore self-check; `legal_move_generator` filters
//! them.

use crate::errors::RulesResult;
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{DirectionSet, Square, Team};
use crate::game_state::piece_catalog::{MoveKind, SpecialAbility};
use crate::game_state::piece_instance::{PieceId, PieceInstance, GENERAL_RANGE_CAP};
use crate::move_generation::moves_archer::generate_archer_moves;
use crate::move_generation::moves_king_like::generate_king_like_moves;
use crate::move_generation::moves_pawn::generate_pawn_moves;
use crate::move_generation::moves_slide::generate_slide_moves;
use crate::move_generation::moves_step::generate_step_moves;
use crate::moves::move_candidate::MoveCandidate;
use crate::moves::offset_tables::KNIGHT_OFFSETS;

pub const SERPENT_RANGE: u8 = 3;

/// Movement pattern after ability overrides are applied to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveShape<'a> {
    Slide { directions: DirectionSet, range: u8 },
    Step(&'a [(i8, i8)]),
}

impl MoveShape<'_> {
    /// Range-1 slide in all eight directions: moves and attacks like a king.
    pub fn is_king_ring(&self) -> bool {
        matches!(self, MoveShape::Slide { directions, range: 1 } if directions.is_all())
    }
}

pub fn movement_shape(piece: &PieceInstance) -> MoveShape<'_> {
    match piece.special() {
        SpecialAbility::Twins if !piece.twin_lost => MoveShape::Step(&KNIGHT_OFFSETS),
        SpecialAbility::Serpent => MoveShape::Slide {
            directions: DirectionSet::DIAGONAL,
            range: SERPENT_RANGE,
        },
        SpecialAbility::General => MoveShape::Slide {
            directions: DirectionSet::ALL,
            range: piece.general_range.clamp(1, GENERAL_RANGE_CAP),
        },
        _ => match piece.profile.move_kind {
            MoveKind::Step => MoveShape::Step(&piece.profile.step_offsets),
            MoveKind::Slide => MoveShape::Slide {
                directions: piece.profile.directions,
                range: piece.profile.max_range,
            },
        },
    }
}

/// Abilities whose movement replaces the pawn/king handling of the profile.
fn overrides_base_shape(piece: &PieceInstance) -> bool {
    match piece.special() {
        SpecialAbility::Twins => !piece.twin_lost,
        SpecialAbility::Serpent | SpecialAbility::General => true,
        _ => false,
    }
}

pub fn generate_pseudo_legal_moves(board: &BoardState, piece: &PieceInstance) -> Vec<MoveCandidate> {
    let mut out = Vec::with_capacity(16);
    generate_pseudo_legal_moves_into(board, piece, &mut out);
    out
}

pub fn generate_pseudo_legal_moves_into(
    board: &BoardState,
    piece: &PieceInstance,
    out: &mut Vec<MoveCandidate>,
) {
    if piece.special() == SpecialAbility::Archer {
        generate_archer_moves(board, piece, out);
        return;
    }

    if !overrides_base_shape(piece) {
        if piece.is_pawn() {
            generate_pawn_moves(board, piece, out);
            return;
        }
        if piece.is_king() {
            generate_king_like_moves(board, piece, true, out);
            return;
        }
    }

    match movement_shape(piece) {
        MoveShape::Step(offsets) => generate_step_moves(board, piece, offsets, out),
        MoveShape::Slide { directions, range } => {
            generate_slide_moves(board, piece, directions, range, out)
        }
    }
}

/// A candidate bound to the piece that plays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub piece: PieceId,
    pub from: Square,
    pub candidate: MoveCandidate,
}

pub trait MoveGenerator: Send + Sync {
    fn moves_for_piece(&self, board: &BoardState, piece: PieceId) -> RulesResult<Vec<MoveCandidate>>;

    fn moves_for_team(&self, board: &BoardState, team: Team) -> RulesResult<Vec<LegalMove>> {
        let movers: Vec<(PieceId, Square)> =
            board.pieces_of(team).map(|p| (p.id, p.square)).collect();
        let mut out = Vec::with_capacity(64);
        for (piece, from) in movers {
            for candidate in self.moves_for_piece(board, piece)? {
                out.push(LegalMove {
                    piece,
                    from,
                    candidate,
                });
            }
        }
        Ok(out)
    }
}

/// Generator that skips the self-check filter.
pub struct PseudoLegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn moves_for_piece(&self, board: &BoardState, piece: PieceId) -> RulesResult<Vec<MoveCandidate>> {
        Ok(board
            .piece(piece)
            .map(|p| generate_pseudo_legal_moves(board, p))
            .unwrap_or_default())
    }
}
