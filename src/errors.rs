//! Errors used throughout the rules engine.
//!
//! Ordinary game flow (a move with no capture, a Twins move whose mirror is
//! blocked, a position with no legal moves) is never reported through these
//! types; those are explicit outcomes. The enums below cover three failure
//! families:
//!
//! - `DefinitionError`: a malformed `PieceProfile`, fatal when a catalog is
//!   loaded.
//! - `IllegalMoveError`: the caller asked for something the current position
//!   does not allow. Recoverable; the caller clears its selection and retries.
//! - `ContractViolation`: the executor was handed a candidate that does not
//!   match the board it was generated from. This is a programming error and
//!   should never surface when generator and executor share a board view.
//!
//! `SetupError` covers loadouts and text boards. `RulesError` wraps all of
//! them for the public entry points.

use thiserror::Error;

use crate::game_state::board_types::{Square, Team};
use crate::game_state::piece_instance::PieceId;

pub type RulesResult<T> = Result<T, RulesError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("profile '{0}': step movement needs at least one offset")]
    EmptyStepOffsets(String),
    #[error("profile '{0}': step movement must not enable slide directions")]
    StepWithDirections(String),
    #[error("profile '{0}': slide movement must not carry step offsets")]
    SlideWithOffsets(String),
    #[error("profile '{0}': slide movement needs at least one direction")]
    SlideWithoutDirections(String),
    #[error("profile '{name}': range {range} is outside 1..=8")]
    RangeOutOfBounds { name: String, range: u8 },
    #[error("profile '{0}': step offset (0, 0) does not move")]
    NullOffset(String),
    #[error("profile '{0}' cannot be both king and pawn")]
    KingAndPawn(String),
    #[error("profile '{0}' is already registered")]
    DuplicateName(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalMoveError {
    #[error("no piece on {0}")]
    NoPieceAt(Square),
    #[error("piece on {square} belongs to {owner:?}, but {to_move:?} is to move")]
    NotSideToMove {
        square: Square,
        owner: Team,
        to_move: Team,
    },
    #[error("move to {target} is not legal for the piece on {from}")]
    NotInLegalSet { from: Square, target: Square },
    #[error("no piece is selected")]
    NothingSelected,
    #[error("the game is already over")]
    GameOver,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    #[error("piece {0:?} is not on the board")]
    MissingPiece(PieceId),
    #[error("coordinates ({file}, {rank}) are off the board")]
    OffBoard { file: i8, rank: i8 },
    #[error("capture target {0} does not hold an enemy piece")]
    CaptureTargetNotEnemy(Square),
    #[error("quiet move target {0} is occupied")]
    QuietTargetOccupied(Square),
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("loadout slot {slot} holds '{name}', which is a king or a pawn")]
    NotAMajor { slot: usize, name: String },
    #[error("text board needs 8 ranks, found {0}")]
    WrongRankCount(usize),
    #[error("text board rank {rank} needs 8 squares, found {found}")]
    WrongFileCount { rank: usize, found: usize },
    #[error("unknown piece symbol '{0}'")]
    UnknownSymbol(char),
    #[error("catalog has no profile with ability {0}")]
    MissingProfile(&'static str),
    #[error("placement failed: {0}")]
    Placement(#[from] ContractViolation),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),
    #[error("contract violation: {0}")]
    Contract(#[from] ContractViolation),
    #[error(transparent)]
    Setup(#[from] SetupError),
}
