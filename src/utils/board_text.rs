//! Plain-text boards for fixtures and debugging.
//!
//! Eight lines of eight symbols, rank 8 first. `.` is empty; uppercase is
//! White, lowercase Black. Symbols follow the piece's role:
//! K king, P pawn, T thief, S skeleton giant, E etourdie, A archer,
//! W twins, N serpent, G general, C commander. Surrounding whitespace and
//! blank lines are ignored, so indented raw strings work.

use std::sync::Arc;

use crate::errors::{ContractViolation, SetupError};
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Square, Team, BOARD_SIZE};
use crate::game_state::piece_catalog::{PieceCatalog, PieceProfile, SpecialAbility};

const EMPTY_SYMBOL: char = '.';

pub fn parse_board(text: &str) -> Result<BoardState, SetupError> {
    parse_board_with(&PieceCatalog::builtin(), text)
}

pub fn parse_board_with(catalog: &PieceCatalog, text: &str) -> Result<BoardState, SetupError> {
    let ranks: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(SetupError::WrongRankCount(ranks.len()));
    }

    let mut board = BoardState::new(catalog.pawn());
    for (line_idx, line) in ranks.iter().enumerate() {
        let rank = BOARD_SIZE - 1 - line_idx as i8;
        let symbols: Vec<char> = line.chars().collect();
        if symbols.len() != BOARD_SIZE as usize {
            return Err(SetupError::WrongFileCount {
                rank: rank as usize,
                found: symbols.len(),
            });
        }

        for (file, symbol) in symbols.into_iter().enumerate() {
            if symbol == EMPTY_SYMBOL {
                continue;
            }
            let (profile, team) = profile_for_symbol(catalog, symbol)?;
            let file = file as i8;
            let square =
                Square::new(file, rank).ok_or(ContractViolation::OffBoard { file, rank })?;
            board.spawn(profile, team, square)?;
        }
    }

    board.assign_twin_pairs();
    Ok(board)
}

/// Inverse of `parse_board` for the built-in roles.
pub fn format_board(board: &BoardState) -> String {
    let mut out = String::with_capacity(72);
    for rank in (0..BOARD_SIZE).rev() {
        for file in 0..BOARD_SIZE {
            let symbol = Square::new(file, rank)
                .and_then(|square| board.piece_at(square))
                .map(|piece| {
                    let symbol = symbol_for_profile(&piece.profile);
                    match piece.team {
                        Team::White => symbol,
                        Team::Black => symbol.to_ascii_lowercase(),
                    }
                })
                .unwrap_or(EMPTY_SYMBOL);
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

pub fn symbol_for_profile(profile: &PieceProfile) -> char {
    if profile.is_king {
        return 'K';
    }
    if profile.is_pawn {
        return 'P';
    }
    match profile.special {
        SpecialAbility::Thief => 'T',
        SpecialAbility::SkeletonGiant => 'S',
        SpecialAbility::Etourdie => 'E',
        SpecialAbility::Archer => 'A',
        SpecialAbility::Twins => 'W',
        SpecialAbility::Serpent => 'N',
        SpecialAbility::General => 'G',
        SpecialAbility::Commander => 'C',
        SpecialAbility::None => '?',
    }
}

fn profile_for_symbol(
    catalog: &PieceCatalog,
    symbol: char,
) -> Result<(Arc<PieceProfile>, Team), SetupError> {
    let team = if symbol.is_ascii_uppercase() {
        Team::White
    } else {
        Team::Black
    };

    let special = match symbol.to_ascii_uppercase() {
        'K' => return Ok((catalog.king(), team)),
        'P' => return Ok((catalog.pawn(), team)),
        'T' => SpecialAbility::Thief,
        'S' => SpecialAbility::SkeletonGiant,
        'E' => SpecialAbility::Etourdie,
        'A' => SpecialAbility::Archer,
        'W' => SpecialAbility::Twins,
        'N' => SpecialAbility::Serpent,
        'G' => SpecialAbility::General,
        'C' => SpecialAbility::Commander,
        _ => return Err(SetupError::UnknownSymbol(symbol)),
    };

    catalog
        .by_special(special)
        .map(|profile| (profile, team))
        .ok_or(SetupError::MissingProfile(special.name()))
}

/// Square shorthand for fixtures.
#[cfg(test)]
pub(crate) fn sq(file: i8, rank: i8) -> Square {
    Square::new(file, rank).expect("test square on board")
}
