use std::sync::Arc;

use crate::game_state::board_types::{Square, Team};
use crate::game_state::piece_catalog::{PieceProfile, SpecialAbility};

/// Handle of a piece inside one `BoardState` arena. Snapshots cloned from a
/// board keep the same handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) u32);

impl PieceId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

pub const GENERAL_RANGE_CAP: u8 = 8;

#[derive(Debug, Clone)]
pub struct PieceInstance {
    pub id: PieceId,
    pub profile: Arc<PieceProfile>,
    pub team: Team,
    pub square: Square,
    /// Square held immediately before this piece's last relocation.
    pub previous_square: Square,
    /// Square held at placement; the Thief resurrects captures here.
    pub original_square: Square,
    pub general_range: u8,
    pub pair_id: u8,
    pub twin_lost: bool,
    /// Pawn spawned by a Serpent transformation.
    pub infused: bool,
    /// Piece spawned by a Thief resurrection.
    pub stolen: bool,
}

impl PieceInstance {
    pub fn new(id: PieceId, profile: Arc<PieceProfile>, team: Team, square: Square) -> Self {
        Self {
            id,
            profile,
            team,
            square,
            previous_square: square,
            original_square: square,
            general_range: 1,
            pair_id: 0,
            twin_lost: false,
            infused: false,
            stolen: false,
        }
    }

    #[inline]
    pub fn special(&self) -> SpecialAbility {
        self.profile.special
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.profile.is_king
    }

    #[inline]
    pub fn is_pawn(&self) -> bool {
        self.profile.is_pawn
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.profile.display_name
    }

    pub fn grow_general_range(&mut self) {
        self.general_range = (self.general_range + 1).min(GENERAL_RANGE_CAP);
    }
}
