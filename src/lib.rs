//! Crate root module declarations for the deck chess rules engine.
//!
//! This file exposes the rules subsystems (board state, piece catalog and
//! loadouts, move generation and execution, the turn controller, and
//! utility helpers) so binaries, benches, and host applications can import
//! stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board_state;
    pub mod board_types;
    pub mod game_config;
    pub mod loadout;
    pub mod piece_catalog;
    pub mod piece_instance;
}

pub mod moves {
    pub mod move_candidate;
    pub mod offset_tables;
}

pub mod move_generation {
    pub mod attack_sets;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_executor;
    pub mod move_generator;
    pub mod moves_archer;
    pub mod moves_king_like;
    pub mod moves_pawn;
    pub mod moves_slide;
    pub mod moves_step;
    pub mod perft;
    pub mod special_effects;
}

pub mod game {
    pub mod game_events;
    pub mod turn_controller;
}

pub mod utils {
    pub mod board_text;
    pub mod playout_harness;
    pub mod render_board;
}
