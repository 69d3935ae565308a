//! Per-move history entries and their log lines.

use std::fmt;

use crate::game_state::board_types::{Square, Team};
use crate::move_generation::special_effects::Effect;
use crate::moves::move_candidate::MoveCandidate;

/// Result of one applied move as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    None,
    Check,
    Checkmate { winner: Team },
    Stalemate,
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveOutcome::None => f.write_str("none"),
            MoveOutcome::Check => f.write_str("check"),
            MoveOutcome::Checkmate { winner } => write!(f, "checkmate winner={winner}"),
            MoveOutcome::Stalemate => f.write_str("stalemate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEvent {
    pub ply: u32,
    pub team: Team,
    pub piece_name: String,
    pub from: Square,
    pub candidate: MoveCandidate,
    pub effects: Vec<Effect>,
    pub outcome: MoveOutcome,
}

impl GameEvent {
    pub fn log_line(&self) -> String {
        let effects = self
            .effects
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        format!(
            "info string ply {} {} {} {} {} effects [{}] outcome {}",
            self.ply, self.team, self.piece_name, self.from, self.candidate, effects, self.outcome
        )
    }
}
