//! Immediate geometry of one proposed move.
//!
//! Compound consequences (explosions, resurrection, the mirrored Twins move,
//! Serpent transformation, General growth) are not encoded here; the
//! executor derives them from the mover's ability and the board.

use std::fmt;

use crate::game_state::board_types::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCandidate {
    pub to: Square,
    pub is_capture: bool,
    /// Archer shot: the target is destroyed and the shooter stays put.
    pub is_ranged_capture: bool,
    /// Where an Etourdie lands after its capture, two squares behind its origin.
    pub recoil_target: Option<Square>,
}

impl MoveCandidate {
    #[inline]
    pub const fn quiet(to: Square) -> Self {
        Self {
            to,
            is_capture: false,
            is_ranged_capture: false,
            recoil_target: None,
        }
    }

    #[inline]
    pub const fn capture(to: Square) -> Self {
        Self {
            to,
            is_capture: true,
            is_ranged_capture: false,
            recoil_target: None,
        }
    }

    #[inline]
    pub const fn ranged(to: Square) -> Self {
        Self {
            to,
            is_capture: true,
            is_ranged_capture: true,
            recoil_target: None,
        }
    }

    #[inline]
    pub const fn capture_with_recoil(to: Square, recoil_target: Square) -> Self {
        Self {
            to,
            is_capture: true,
            is_ranged_capture: false,
            recoil_target: Some(recoil_target),
        }
    }

    #[inline]
    pub const fn requires_recoil(&self) -> bool {
        self.recoil_target.is_some()
    }
}

impl fmt::Display for MoveCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ranged_capture {
            write!(f, "shoot {}", self.to)?;
        } else if self.is_capture {
            write!(f, "x{}", self.to)?;
        } else {
            write!(f, "{}", self.to)?;
        }
        if let Some(recoil) = self.recoil_target {
            write!(f, " recoil {recoil}")?;
        }
        Ok(())
    }
}
