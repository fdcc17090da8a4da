//! Player abstraction used by the match harness and the command loop.
//!
//! A computer player decides synchronously and applies its move to the live
//! state. A human player returns immediately; the move arrives later through
//! `HumanPlayer::submit_move`.

use std::error::Error;
use std::fmt;

use crate::board::tile_state::TileIndex;
use crate::engines::player_human::HumanPlayer;
use crate::game_state::checkers_types::Move;
use crate::game_state::game_state::GameState;

pub type PlayerResult<T> = Result<T, PlayerError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    IllegalMove { start: TileIndex, end: TileIndex },
    NotAwaitingMove,
    UnknownOption(String),
    InvalidOptionValue { name: String, value: String },
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::IllegalMove { start, end } => {
                write!(f, "illegal move: {start} -> {end}")
            }
            PlayerError::NotAwaitingMove => write!(f, "player is not waiting for a move"),
            PlayerError::UnknownOption(name) => write!(f, "unknown option: {name}"),
            PlayerError::InvalidOptionValue { name, value } => {
                write!(f, "invalid value for {name}: {value}")
            }
        }
    }
}

impl Error for PlayerError {}

#[derive(Debug, Clone, Default)]
pub struct DecisionOutput {
    /// Move applied to the state, `None` when nothing was played yet.
    pub chosen_move: Option<Move>,
    pub max_depth_reached: u16,
    pub info_lines: Vec<String>,
}

pub trait Player: Send {
    fn name(&self) -> &str;

    fn is_human(&self) -> bool {
        false
    }

    /// Choose a move for the side to move and apply it to `state`.
    fn decide(&mut self, state: &mut GameState) -> PlayerResult<DecisionOutput>;

    /// Whether the last `decide` ended with a move on the board.
    fn has_moved(&self) -> bool;

    /// Whether the last decision was abandoned.
    fn has_skipped(&self) -> bool {
        false
    }

    fn set_option(&mut self, _name: &str, _value: &str) -> PlayerResult<()> {
        Ok(())
    }

    /// Access to the out-of-band move entry of a human seat.
    fn as_human_mut(&mut self) -> Option<&mut HumanPlayer> {
        None
    }
}

/// Parse an option value, mapping failures to `InvalidOptionValue`.
pub(crate) fn parse_option<T: std::str::FromStr>(name: &str, value: &str) -> PlayerResult<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| PlayerError::InvalidOptionValue {
            name: name.to_owned(),
            value: value.to_owned(),
        })
}

/// Apply `mv` to `state`, reporting a rejected pair as `IllegalMove`.
pub(crate) fn apply_choice(state: &mut GameState, mv: Move) -> PlayerResult<()> {
    if state.make_move(mv.start, mv.end) {
        Ok(())
    } else {
        Err(PlayerError::IllegalMove {
            start: mv.start,
            end: mv.end,
        })
    }
}
