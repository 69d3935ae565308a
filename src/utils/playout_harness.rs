//! Seeded random playouts for local testing.
//!
//! Plays uniformly random legal moves for both sides from the start position
//! (optionally with random rosters) until the game ends or a ply cap is hit.
//! Useful for shaking out rule interactions over many positions; it is not a
//! playing strength harness.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::errors::{RulesResult, SetupError};
use crate::game::turn_controller::{Game, GameStatus};
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::Team;
use crate::game_state::game_config::GameConfig;
use crate::game_state::loadout::{Loadout, MAJOR_SLOTS, MAX_COPIES_PER_TYPE};
use crate::game_state::piece_catalog::{PieceCatalog, PieceProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

impl PlayoutOutcome {
    fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate {
                winner: Team::White,
            } => Some(PlayoutOutcome::WhiteWinCheckmate),
            GameStatus::Checkmate {
                winner: Team::Black,
            } => Some(PlayoutOutcome::BlackWinCheckmate),
            GameStatus::Stalemate => Some(PlayoutOutcome::DrawStalemate),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub max_plies: u16,
    pub seed: u64,
    /// Draw both rosters at random instead of using the configured loadouts.
    pub random_loadouts: bool,
    pub verbose: bool,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0,
            random_loadouts: true,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub final_board: BoardState,
    pub plies: u32,
    pub log_lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct PlayoutSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: PlayoutConfig,
    pub verbose: bool,
}

impl Default for PlayoutSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: PlayoutConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayoutSeriesStats {
    pub games: u16,
    pub white_wins: u16,
    pub black_wins: u16,
    pub stalemates: u16,
    pub unfinished: u16,
    pub total_plies: u64,
    pub outcomes: Vec<PlayoutOutcome>,
}

impl PlayoutSeriesStats {
    pub fn report(&self) -> String {
        let avg_plies = if self.games == 0 {
            0.0
        } else {
            self.total_plies as f64 / f64::from(self.games)
        };
        format!(
            "games={} white_wins={} black_wins={} stalemates={} unfinished={} avg_plies={:.1}",
            self.games, self.white_wins, self.black_wins, self.stalemates, self.unfinished, avg_plies
        )
    }
}

/// Four majors drawn from the catalog, at most two copies of each.
pub fn random_loadout<R: Rng + ?Sized>(
    catalog: &PieceCatalog,
    rng: &mut R,
) -> Result<Loadout, SetupError> {
    let mut pool: Vec<Arc<PieceProfile>> = catalog
        .majors()
        .iter()
        .flat_map(|p| std::iter::repeat(Arc::clone(p)).take(MAX_COPIES_PER_TYPE))
        .collect();
    pool.shuffle(rng);

    let mut picks = pool.into_iter();
    let mut next = || picks.next().ok_or(SetupError::MissingProfile("major"));
    let majors: [Arc<PieceProfile>; MAJOR_SLOTS] = [next()?, next()?, next()?, next()?];
    Loadout::new(majors)
}

/// Play one seeded random game.
pub fn play_random_playout(game_config: GameConfig, config: &PlayoutConfig) -> RulesResult<PlayoutResult> {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut game_config = game_config.with_verbose(config.verbose);
    if config.random_loadouts {
        let white = random_loadout(&game_config.catalog, &mut rng)?;
        let black = random_loadout(&game_config.catalog, &mut rng)?;
        game_config = game_config.with_white(white).with_black(black);
    }

    let game = Game::new(game_config)?;
    play_random_playout_from(game, &mut rng, config.max_plies)
}

/// Continue `game` with random legal moves drawn from `rng`.
pub fn play_random_playout_from<R: Rng + ?Sized>(
    mut game: Game,
    rng: &mut R,
    max_plies: u16,
) -> RulesResult<PlayoutResult> {
    let mut log_lines = Vec::new();

    for _ in 0..max_plies {
        if game.status().is_over() {
            break;
        }

        let moves = game.all_legal_moves()?;
        let Some(chosen) = moves.choose(rng) else {
            break;
        };
        game.apply_move(chosen.from, chosen.candidate)?;
        if let Some(event) = game.history().last() {
            log_lines.push(event.log_line());
        }
    }

    let outcome = PlayoutOutcome::from_status(game.status()).unwrap_or(PlayoutOutcome::DrawMaxPlies);
    Ok(PlayoutResult {
        outcome,
        final_board: game.board_snapshot().clone(),
        plies: game.ply(),
        log_lines,
    })
}

/// Play a series of seeded playouts and aggregate the outcomes.
pub fn play_random_series(
    game_config: &GameConfig,
    config: &PlayoutSeriesConfig,
) -> RulesResult<PlayoutSeriesStats> {
    let mut stats = PlayoutSeriesStats {
        games: config.games,
        ..PlayoutSeriesStats::default()
    };

    for i in 0..config.games {
        let per_game = PlayoutConfig {
            seed: config.base_seed.wrapping_add(u64::from(i)),
            ..config.per_game.clone()
        };
        if config.verbose {
            println!("[series] game {}/{} seed={}", i + 1, config.games, per_game.seed);
        }

        let result = play_random_playout(game_config.clone(), &per_game)?;
        stats.total_plies += u64::from(result.plies);
        match result.outcome {
            PlayoutOutcome::WhiteWinCheckmate => stats.white_wins += 1,
            PlayoutOutcome::BlackWinCheckmate => stats.black_wins += 1,
            PlayoutOutcome::DrawStalemate => stats.stalemates += 1,
            PlayoutOutcome::DrawMaxPlies => stats.unfinished += 1,
        }
        stats.outcomes.push(result.outcome);

        if config.verbose {
            println!(
                "[series] game {}/{} result={:?} plies={}",
                i + 1,
                config.games,
                result.outcome,
                result.plies
            );
        }
    }

    Ok(stats)
}
