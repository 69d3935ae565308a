//! Immutable piece profiles and the catalog that hands them out.
//!
//! A `PieceProfile` describes how every instance of one piece type moves.
//! Profiles are validated once, when they enter a `PieceCatalog`, and are
//! shared between instances through `Arc`, so cloning a board never copies
//! them.

use std::fmt;
use std::sync::Arc;

use crate::errors::DefinitionError;
use crate::game_state::board_types::DirectionSet;
use crate::moves::offset_tables::{KNIGHT_OFFSETS, ORTHOGONAL_STEP_OFFSETS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Slide,
    Step,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialAbility {
    None,
    Thief,
    SkeletonGiant,
    Etourdie,
    Archer,
    Twins,
    Serpent,
    General,
    Commander,
}

impl SpecialAbility {
    pub const fn name(self) -> &'static str {
        match self {
            SpecialAbility::None => "none",
            SpecialAbility::Thief => "thief",
            SpecialAbility::SkeletonGiant => "skeleton_giant",
            SpecialAbility::Etourdie => "etourdie",
            SpecialAbility::Archer => "archer",
            SpecialAbility::Twins => "twins",
            SpecialAbility::Serpent => "serpent",
            SpecialAbility::General => "general",
            SpecialAbility::Commander => "commander",
        }
    }
}

impl fmt::Display for SpecialAbility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceProfile {
    pub display_name: String,
    pub is_king: bool,
    pub is_pawn: bool,
    /// Deck-building cost. The rules never read it.
    pub cost: u8,
    pub move_kind: MoveKind,
    /// Only read for `MoveKind::Slide`.
    pub directions: DirectionSet,
    pub max_range: u8,
    /// Only read for `MoveKind::Step`.
    pub step_offsets: Vec<(i8, i8)>,
    pub special: SpecialAbility,
}

impl PieceProfile {
    pub fn slide(name: &str, directions: DirectionSet, max_range: u8) -> Self {
        Self {
            display_name: name.to_owned(),
            is_king: false,
            is_pawn: false,
            cost: 1,
            move_kind: MoveKind::Slide,
            directions,
            max_range,
            step_offsets: Vec::new(),
            special: SpecialAbility::None,
        }
    }

    pub fn step(name: &str, offsets: &[(i8, i8)]) -> Self {
        Self {
            display_name: name.to_owned(),
            is_king: false,
            is_pawn: false,
            cost: 1,
            move_kind: MoveKind::Step,
            directions: DirectionSet::NONE,
            max_range: 1,
            step_offsets: offsets.to_vec(),
            special: SpecialAbility::None,
        }
    }

    pub fn with_special(mut self, special: SpecialAbility) -> Self {
        self.special = special;
        self
    }

    pub fn with_cost(mut self, cost: u8) -> Self {
        self.cost = cost;
        self
    }

    pub fn as_king(mut self) -> Self {
        self.is_king = true;
        self
    }

    pub fn as_pawn(mut self) -> Self {
        self.is_pawn = true;
        self
    }

    /// Non-king, non-pawn profiles are the ones a loadout may field.
    #[inline]
    pub fn is_major(&self) -> bool {
        !self.is_king && !self.is_pawn
    }

    pub fn validate(&self) -> Result<(), DefinitionError> {
        let name = || self.display_name.clone();

        if self.is_king && self.is_pawn {
            return Err(DefinitionError::KingAndPawn(name()));
        }
        if !(1..=8).contains(&self.max_range) {
            return Err(DefinitionError::RangeOutOfBounds {
                name: name(),
                range: self.max_range,
            });
        }

        match self.move_kind {
            MoveKind::Step => {
                if self.step_offsets.is_empty() {
                    return Err(DefinitionError::EmptyStepOffsets(name()));
                }
                if !self.directions.is_empty() {
                    return Err(DefinitionError::StepWithDirections(name()));
                }
                if self.step_offsets.contains(&(0, 0)) {
                    return Err(DefinitionError::NullOffset(name()));
                }
            }
            MoveKind::Slide => {
                if !self.step_offsets.is_empty() {
                    return Err(DefinitionError::SlideWithOffsets(name()));
                }
                if self.directions.is_empty() {
                    return Err(DefinitionError::SlideWithoutDirections(name()));
                }
            }
        }

        Ok(())
    }
}

/// Validated set of profiles. The king and pawn profiles are mandatory since
/// setup places them and Serpent transformation spawns pawns.
#[derive(Debug, Clone)]
pub struct PieceCatalog {
    king: Arc<PieceProfile>,
    pawn: Arc<PieceProfile>,
    majors: Vec<Arc<PieceProfile>>,
}

impl PieceCatalog {
    pub fn new(king: PieceProfile, pawn: PieceProfile) -> Result<Self, DefinitionError> {
        king.validate()?;
        pawn.validate()?;
        Ok(Self {
            king: Arc::new(king.as_king()),
            pawn: Arc::new(pawn.as_pawn()),
            majors: Vec::new(),
        })
    }

    /// King, pawn, and the eight ability pieces with their original stats.
    pub fn builtin() -> Self {
        Self {
            king: Arc::new(king_profile()),
            pawn: Arc::new(pawn_profile()),
            majors: builtin_majors().into_iter().map(Arc::new).collect(),
        }
    }

    pub fn register(&mut self, profile: PieceProfile) -> Result<Arc<PieceProfile>, DefinitionError> {
        profile.validate()?;
        if self.get(&profile.display_name).is_some() {
            return Err(DefinitionError::DuplicateName(profile.display_name));
        }
        let profile = Arc::new(profile);
        self.majors.push(Arc::clone(&profile));
        Ok(profile)
    }

    #[inline]
    pub fn king(&self) -> Arc<PieceProfile> {
        Arc::clone(&self.king)
    }

    #[inline]
    pub fn pawn(&self) -> Arc<PieceProfile> {
        Arc::clone(&self.pawn)
    }

    /// Profiles offered to deck building, in registration order.
    pub fn majors(&self) -> &[Arc<PieceProfile>] {
        &self.majors
    }

    pub fn get(&self, display_name: &str) -> Option<Arc<PieceProfile>> {
        std::iter::once(&self.king)
            .chain(std::iter::once(&self.pawn))
            .chain(self.majors.iter())
            .find(|p| p.display_name == display_name)
            .cloned()
    }

    pub fn by_special(&self, special: SpecialAbility) -> Option<Arc<PieceProfile>> {
        self.majors.iter().find(|p| p.special == special).cloned()
    }
}

impl Default for PieceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn king_profile() -> PieceProfile {
    PieceProfile::slide("King", DirectionSet::ALL, 1)
        .as_king()
        .with_cost(0)
}

fn pawn_profile() -> PieceProfile {
    // Pawn movement is hard-wired in the generator; the offset is informational.
    PieceProfile::step("Pawn", &[(0, 1)]).as_pawn().with_cost(0)
}

fn builtin_majors() -> Vec<PieceProfile> {
    vec![
        PieceProfile::step("Thief", &ORTHOGONAL_STEP_OFFSETS)
            .with_special(SpecialAbility::Thief)
            .with_cost(3),
        PieceProfile::slide("Skeleton Giant", DirectionSet::ALL, 1)
            .with_special(SpecialAbility::SkeletonGiant)
            .with_cost(3),
        PieceProfile::slide("Etourdie", DirectionSet::ORTHOGONAL, 8)
            .with_special(SpecialAbility::Etourdie)
            .with_cost(2),
        PieceProfile::slide("Archer", DirectionSet::ALL, 1)
            .with_special(SpecialAbility::Archer)
            .with_cost(2),
        PieceProfile::step("Twins", &KNIGHT_OFFSETS)
            .with_special(SpecialAbility::Twins)
            .with_cost(3),
        PieceProfile::slide("Serpent", DirectionSet::DIAGONAL, 3)
            .with_special(SpecialAbility::Serpent)
            .with_cost(3),
        PieceProfile::slide("General", DirectionSet::ALL, 1)
            .with_special(SpecialAbility::General)
            .with_cost(4),
        PieceProfile::slide("Commander", DirectionSet::ALL, 2)
            .with_special(SpecialAbility::Commander)
            .with_cost(4),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profiles_all_validate() {
        let catalog = PieceCatalog::builtin();
        assert!(catalog.king().validate().is_ok());
        assert!(catalog.pawn().validate().is_ok());
        assert_eq!(catalog.majors().len(), 8);
        for profile in catalog.majors() {
            assert!(profile.validate().is_ok(), "{}", profile.display_name);
            assert!(profile.is_major());
        }
    }

    #[test]
    fn step_profile_without_offsets_is_rejected() {
        let profile = PieceProfile::step("Nothing", &[]);
        assert_eq!(
            profile.validate(),
            Err(DefinitionError::EmptyStepOffsets("Nothing".to_owned()))
        );
    }

    #[test]
    fn step_profile_with_directions_is_rejected() {
        let mut profile = PieceProfile::step("Hybrid", &[(1, 0)]);
        profile.directions = DirectionSet::ORTHOGONAL;
        assert_eq!(
            profile.validate(),
            Err(DefinitionError::StepWithDirections("Hybrid".to_owned()))
        );
    }

    #[test]
    fn slide_profile_with_offsets_or_bad_range_is_rejected() {
        let mut profile = PieceProfile::slide("Rook", DirectionSet::ORTHOGONAL, 8);
        profile.step_offsets = vec![(1, 1)];
        assert!(matches!(
            profile.validate(),
            Err(DefinitionError::SlideWithOffsets(_))
        ));

        let profile = PieceProfile::slide("Rook", DirectionSet::ORTHOGONAL, 9);
        assert!(matches!(
            profile.validate(),
            Err(DefinitionError::RangeOutOfBounds { range: 9, .. })
        ));

        let profile = PieceProfile::slide("Statue", DirectionSet::NONE, 1);
        assert!(matches!(
            profile.validate(),
            Err(DefinitionError::SlideWithoutDirections(_))
        ));
    }

    #[test]
    fn register_validates_and_rejects_duplicates() {
        let mut catalog = PieceCatalog::builtin();
        let rook = PieceProfile::slide("Rook", DirectionSet::ORTHOGONAL, 8);
        assert!(catalog.register(rook.clone()).is_ok());
        assert_eq!(
            catalog.register(rook),
            Err(DefinitionError::DuplicateName("Rook".to_owned()))
        );
        assert!(catalog.register(PieceProfile::step("Bad", &[(0, 0)])).is_err());
        assert!(catalog.get("Rook").is_some());
    }

    #[test]
    fn builtin_lookup_by_special() {
        let catalog = PieceCatalog::builtin();
        let serpent = catalog
            .by_special(SpecialAbility::Serpent)
            .expect("serpent is builtin");
        assert_eq!(serpent.max_range, 3);
        assert_eq!(serpent.directions, DirectionSet::DIAGONAL);
        assert!(catalog.by_special(SpecialAbility::None).is_none());
        assert_eq!(catalog.get("King").map(|p| p.is_king), Some(true));
    }
}
