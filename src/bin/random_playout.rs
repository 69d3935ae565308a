//! Seeded random playout series runner.
//!
//! Run with:
//! `cargo run --release --bin random_playout`
//! `cargo run --release --bin random_playout -- --verbose`

use deck_chess::errors::RulesResult;
use deck_chess::game_state::game_config::GameConfig;
use deck_chess::utils::playout_harness::{
    play_random_playout, play_random_series, PlayoutConfig, PlayoutSeriesConfig,
};
use deck_chess::utils::render_board::render_board;

fn main() -> RulesResult<()> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    let game_config = GameConfig::standard()?;
    let per_game = PlayoutConfig {
        max_plies: 200,
        verbose,
        ..PlayoutConfig::default()
    };

    let stats = play_random_series(
        &game_config,
        &PlayoutSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: per_game.clone(),
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);

    if verbose {
        let last = play_random_playout(
            game_config,
            &PlayoutConfig {
                seed: 1234,
                verbose: false,
                ..per_game
            },
        )?;
        println!("final position of seed 1234 ({:?}):", last.outcome);
        println!("{}", render_board(&last.final_board));
    }

    Ok(())
}
