//! Headless player-vs-player matches for local testing and tuning.
//!
//! Runs two `Player` implementations against each other without any front-end,
//! collecting per-player move counts, timings and search depths.

use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::engines::player_trait::Player;
use crate::game_state::checkers_types::MatchResult;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    P1Win,
    P2Win,
    DrawQuietPlies,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, as_p1: bool },
    DrawQuietPlies,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Consecutive plies without capture or promotion before a draw.
    pub draw_quiet_plies: Option<u16>,
    /// Pause before each computer move, for watching games live.
    pub think_delay_ms: u64,
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 400,
            draw_quiet_plies: Some(80),
            think_delay_ms: 0,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<String>,
    pub p1_move_count: u32,
    pub p2_move_count: u32,
    pub p1_total_time_ns: u128,
    pub p2_total_time_ns: u128,
    pub p1_depth_total: u64,
    pub p2_depth_total: u64,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_depth_total: u64,
    pub player2_depth_total: u64,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub player1_avg_depth: f64,
    pub player2_avg_depth: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_moves={} p2_moves={} p1_avg_ms={:.3} p2_avg_ms={:.3} p1_avg_depth={:.2} p2_avg_depth={:.2}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_moves,
            self.player2_moves,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.player1_avg_depth,
            self.player2_avg_depth
        )
    }
}

/// `[hh:mm:ss]: message`, the format used for live match output.
pub fn timestamped(message: &str) -> String {
    format!("[{}]: {}", Local::now().format("%H:%M:%S"), message)
}

fn log_line(verbose: bool, message: &str) {
    if verbose {
        println!("{}", timestamped(message));
    }
}

/// Play one match from the starting position.
///
/// `p1` plays black and moves first.
pub fn play_match(
    p1: &mut dyn Player,
    p2: &mut dyn Player,
    config: &MatchConfig,
) -> Result<MatchRecord, String> {
    play_match_from_state(GameState::new_game(), p1, p2, config)
}

/// Play one match from a caller-provided position.
pub fn play_match_from_state(
    mut state: GameState,
    p1: &mut dyn Player,
    p2: &mut dyn Player,
    config: &MatchConfig,
) -> Result<MatchRecord, String> {
    if p1.is_human() || p2.is_human() {
        return Err("human players cannot take part in a headless match".to_owned());
    }
    state.set_draw_rule(config.draw_quiet_plies);

    let mut record = MatchRecord {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: state,
        played_moves: Vec::new(),
        p1_move_count: 0,
        p2_move_count: 0,
        p1_total_time_ns: 0,
        p2_total_time_ns: 0,
        p1_depth_total: 0,
        p2_depth_total: 0,
    };

    log_line(
        config.verbose,
        &format!("new match: {} (P1) vs {} (P2)", p1.name(), p2.name()),
    );

    for _ in 0..config.max_plies {
        match state.result() {
            MatchResult::P1Win => {
                record.outcome = MatchOutcome::P1Win;
                break;
            }
            MatchResult::P2Win => {
                record.outcome = MatchOutcome::P2Win;
                break;
            }
            MatchResult::Draw => {
                record.outcome = MatchOutcome::DrawQuietPlies;
                break;
            }
            MatchResult::Unknown => {}
        }

        if config.think_delay_ms > 0 {
            thread::sleep(Duration::from_millis(config.think_delay_ms));
        }

        let mover_is_p1 = state.is_p1_turn();
        let player: &mut dyn Player = if mover_is_p1 { &mut *p1 } else { &mut *p2 };

        let started = Instant::now();
        let out = player
            .decide(&mut state)
            .map_err(|e| format!("{} failed to decide: {e}", player.name()))?;
        let elapsed_ns = started.elapsed().as_nanos();

        let Some(chosen) = out.chosen_move else {
            return Err(format!("{} produced no move in a live game", player.name()));
        };

        if mover_is_p1 {
            record.p1_move_count = record.p1_move_count.saturating_add(1);
            record.p1_total_time_ns = record.p1_total_time_ns.saturating_add(elapsed_ns);
            record.p1_depth_total += u64::from(out.max_depth_reached);
        } else {
            record.p2_move_count = record.p2_move_count.saturating_add(1);
            record.p2_total_time_ns = record.p2_total_time_ns.saturating_add(elapsed_ns);
            record.p2_depth_total += u64::from(out.max_depth_reached);
        }

        let side = if mover_is_p1 { "P1" } else { "P2" };
        log_line(
            config.verbose,
            &format!(
                "{side} {} played {chosen} in {:.3} ms (depth {})",
                player.name(),
                elapsed_ns as f64 / 1_000_000.0,
                out.max_depth_reached
            ),
        );
        record.played_moves.push(chosen.to_string());
    }

    // The last move may have ended the game on the final allowed ply.
    if record.outcome == MatchOutcome::DrawMaxPlies {
        record.outcome = match state.result() {
            MatchResult::P1Win => MatchOutcome::P1Win,
            MatchResult::P2Win => MatchOutcome::P2Win,
            MatchResult::Draw => MatchOutcome::DrawQuietPlies,
            MatchResult::Unknown => MatchOutcome::DrawMaxPlies,
        };
    }

    log_line(
        config.verbose,
        &format!("match over: {:?} after {} plies", record.outcome, record.played_moves.len()),
    );
    record.final_state = state;
    Ok(record)
}

/// Play a series of matches and aggregate results per player.
///
/// Factories receive a per-game seed. Which player takes P1 is drawn from a
/// generator seeded by `base_seed`, so a series is reproducible.
pub fn play_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn(u64) -> Box<dyn Player>,
    F2: Fn(u64) -> Box<dyn Player>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut side_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_p1 = side_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory(seed);
        let mut player2 = player2_factory(seed.wrapping_mul(31).wrapping_add(7));

        log_line(
            config.verbose,
            &format!(
                "[series] game {}/{} seed={} player1_is_p1={}",
                i + 1,
                config.games,
                seed,
                player1_is_p1
            ),
        );

        let record = if player1_is_p1 {
            play_match(player1.as_mut(), player2.as_mut(), &config.per_game)?
        } else {
            play_match(player2.as_mut(), player1.as_mut(), &config.per_game)?
        };

        let (p1_side, p2_side) = (
            (record.p1_move_count, record.p1_total_time_ns, record.p1_depth_total),
            (record.p2_move_count, record.p2_total_time_ns, record.p2_depth_total),
        );
        let (mine, theirs) = if player1_is_p1 {
            (p1_side, p2_side)
        } else {
            (p2_side, p1_side)
        };
        stats.player1_moves = stats.player1_moves.saturating_add(mine.0);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(mine.1);
        stats.player1_depth_total += mine.2;
        stats.player2_moves = stats.player2_moves.saturating_add(theirs.0);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(theirs.1);
        stats.player2_depth_total += theirs.2;

        let mapped = match record.outcome {
            MatchOutcome::P1Win | MatchOutcome::P2Win => {
                let p1_won = record.outcome == MatchOutcome::P1Win;
                if p1_won == player1_is_p1 {
                    stats.player1_wins += 1;
                    SeriesOutcome::PlayerWin {
                        player: PlayerId::Player1,
                        as_p1: player1_is_p1,
                    }
                } else {
                    stats.player2_wins += 1;
                    SeriesOutcome::PlayerWin {
                        player: PlayerId::Player2,
                        as_p1: !player1_is_p1,
                    }
                }
            }
            MatchOutcome::DrawQuietPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawQuietPlies
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        log_line(
            config.verbose,
            &format!(
                "[series] game {}/{} result={:?} p1_wins={} p2_wins={} draws={}",
                i + 1,
                config.games,
                mapped,
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            ),
        );
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);
    stats.player1_avg_depth = avg_per_move(stats.player1_depth_total, stats.player1_moves);
    stats.player2_avg_depth = avg_per_move(stats.player2_depth_total, stats.player2_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

#[inline]
fn avg_per_move(total: u64, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total as f64 / f64::from(moves)
    }
}
