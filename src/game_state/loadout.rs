//! Team rosters and the starting position built from them.
//!
//! Each side fields exactly four major pieces on files a, b, g and h of its
//! home rank, a king on the e-file, and eight pawns. The engine places
//! whatever it is handed; roster rules (slot count, copies per type) are the
//! deck builder's job and are only reported by `Loadout::roster_issues`.

use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::{ContractViolation, SetupError};
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Square, Team};
use crate::game_state::piece_catalog::{PieceCatalog, PieceProfile, SpecialAbility};

pub const MAJOR_SLOTS: usize = 4;
pub const MAJOR_FILES: [i8; MAJOR_SLOTS] = [0, 1, 6, 7];
pub const KING_FILE: i8 = 4;
pub const MAX_COPIES_PER_TYPE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterIssue {
    TooManyCopies { name: String, copies: usize },
}

#[derive(Debug, Clone)]
pub struct Loadout {
    majors: [Arc<PieceProfile>; MAJOR_SLOTS],
}

impl Loadout {
    pub fn new(majors: [Arc<PieceProfile>; MAJOR_SLOTS]) -> Result<Self, SetupError> {
        if let Some((slot, profile)) = majors.iter().enumerate().find(|(_, p)| !p.is_major()) {
            return Err(SetupError::NotAMajor {
                slot,
                name: profile.display_name.clone(),
            });
        }
        Ok(Self { majors })
    }

    /// Thief, Etourdie, General and Archer.
    pub fn standard(catalog: &PieceCatalog) -> Result<Self, SetupError> {
        Self::from_specials(
            catalog,
            [
                SpecialAbility::Thief,
                SpecialAbility::Etourdie,
                SpecialAbility::General,
                SpecialAbility::Archer,
            ],
        )
    }

    pub fn from_specials(
        catalog: &PieceCatalog,
        specials: [SpecialAbility; MAJOR_SLOTS],
    ) -> Result<Self, SetupError> {
        let lookup = |special: SpecialAbility| {
            catalog
                .by_special(special)
                .ok_or(SetupError::MissingProfile(special.name()))
        };
        Self::new([
            lookup(specials[0])?,
            lookup(specials[1])?,
            lookup(specials[2])?,
            lookup(specials[3])?,
        ])
    }

    pub fn majors(&self) -> &[Arc<PieceProfile>; MAJOR_SLOTS] {
        &self.majors
    }

    pub fn roster_issues(&self) -> Vec<RosterIssue> {
        let mut counts = HashMap::<&str, usize>::new();
        for profile in &self.majors {
            *counts.entry(profile.display_name.as_str()).or_default() += 1;
        }

        let mut over: Vec<(&str, usize)> = counts
            .into_iter()
            .filter(|(_, copies)| *copies > MAX_COPIES_PER_TYPE)
            .collect();
        over.sort_unstable();
        over.into_iter()
            .map(|(name, copies)| RosterIssue::TooManyCopies {
                name: name.to_owned(),
                copies,
            })
            .collect()
    }
}

/// Pawns on ranks 2 and 7, kings on e1/e8, majors on a/b/g/h of the home rank.
pub fn build_start_position(
    catalog: &PieceCatalog,
    white: &Loadout,
    black: &Loadout,
) -> Result<BoardState, ContractViolation> {
    let mut board = BoardState::new(catalog.pawn());

    for file in 0..8 {
        for team in [Team::White, Team::Black] {
            board.spawn(catalog.pawn(), team, home_square(file, team.pawn_rank())?)?;
        }
    }

    for team in [Team::White, Team::Black] {
        board.spawn(catalog.king(), team, home_square(KING_FILE, team.home_rank())?)?;
    }

    for (team, loadout) in [(Team::White, white), (Team::Black, black)] {
        for (profile, file) in loadout.majors.iter().zip(MAJOR_FILES) {
            board.spawn(Arc::clone(profile), team, home_square(file, team.home_rank())?)?;
        }
    }

    board.assign_twin_pairs();
    Ok(board)
}

fn home_square(file: i8, rank: i8) -> Result<Square, ContractViolation> {
    Square::new(file, rank).ok_or(ContractViolation::OffBoard { file, rank })
}
