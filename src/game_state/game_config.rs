//! Game-level configuration.

use crate::errors::SetupError;
use crate::game_state::loadout::Loadout;
use crate::game_state::piece_catalog::PieceCatalog;

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub catalog: PieceCatalog,
    pub white: Loadout,
    pub black: Loadout,
    /// Print one `info string` line per applied move.
    pub verbose: bool,
    /// Keep a `GameEvent` per applied move in the game history.
    pub record_history: bool,
}

impl GameConfig {
    pub fn new(catalog: PieceCatalog, white: Loadout, black: Loadout) -> Self {
        Self {
            catalog,
            white,
            black,
            verbose: false,
            record_history: true,
        }
    }

    /// Builtin catalog with the standard roster on both sides.
    pub fn standard() -> Result<Self, SetupError> {
        let catalog = PieceCatalog::builtin();
        let white = Loadout::standard(&catalog)?;
        let black = white.clone();
        Ok(Self::new(catalog, white, black))
    }

    pub fn with_white(mut self, loadout: Loadout) -> Self {
        self.white = loadout;
        self
    }

    pub fn with_black(mut self, loadout: Loadout) -> Self {
        self.black = loadout;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_history(mut self, record_history: bool) -> Self {
        self.record_history = record_history;
        self
    }
}
