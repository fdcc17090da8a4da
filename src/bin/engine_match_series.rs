//! Standalone player-vs-player series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use plum_checkers::engines::player_factory::{build_player, PlayerKind};
use plum_checkers::engines::player_trait::Player;
use plum_checkers::utils::match_harness::{play_match_series, MatchConfig, MatchSeriesConfig};

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Customize these two closures to pit different players or settings.
    let player1 = |seed: u64| -> Box<dyn Player> {
        let mut player = build_player(PlayerKind::AlphaBeta, Some(seed));
        let _ = player.set_option("NodeLimit", "20000");
        player
    };
    let player2 = |seed: u64| build_player(PlayerKind::Greedy, Some(seed));

    let stats = play_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 300,
                ..MatchConfig::default()
            },
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
