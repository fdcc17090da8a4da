//! Crate root module declarations for the Plum Checkers engine.
//!
//! Exposes the board representation, the rules engine, search, the player
//! implementations, the stdio front-end and utility helpers so binaries,
//! benches and tests can import stable module paths.

pub mod board {
    pub mod board;
    pub mod coordinates;
    pub mod piece_rules;
    pub mod tile_state;
}

pub mod game_state {
    pub mod checkers_types;
    pub mod game_state;
    pub mod state_encoding;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod minimax;
    pub mod search_context;
}

pub mod engines {
    pub mod player_alpha_beta;
    pub mod player_factory;
    pub mod player_greedy;
    pub mod player_human;
    pub mod player_minimax;
    pub mod player_random;
    pub mod player_trait;
    pub mod search_settings;
}

pub mod protocol {
    pub mod command_loop;
}

pub mod utils {
    pub mod match_harness;
    pub mod render_board;
}
