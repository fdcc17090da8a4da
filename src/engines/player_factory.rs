//! Runtime selection of player implementations by name.

use std::fmt;
use std::str::FromStr;

use crate::engines::player_alpha_beta::AlphaBetaPlayer;
use crate::engines::player_greedy::GreedyPlayer;
use crate::engines::player_human::HumanPlayer;
use crate::engines::player_minimax::MinimaxPlayer;
use crate::engines::player_random::RandomPlayer;
use crate::engines::player_trait::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Human,
    Random,
    Greedy,
    Minimax,
    AlphaBeta,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 5] = [
        PlayerKind::Human,
        PlayerKind::Random,
        PlayerKind::Greedy,
        PlayerKind::Minimax,
        PlayerKind::AlphaBeta,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PlayerKind::Human => "human",
            PlayerKind::Random => "random",
            PlayerKind::Greedy => "greedy",
            PlayerKind::Minimax => "minimax",
            PlayerKind::AlphaBeta => "alphabeta",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "random" => Ok(PlayerKind::Random),
            "greedy" | "stupid" => Ok(PlayerKind::Greedy),
            "minimax" => Ok(PlayerKind::Minimax),
            "alphabeta" | "alpha-beta" | "alpha_beta" => Ok(PlayerKind::AlphaBeta),
            other => Err(format!("unknown player kind '{other}'")),
        }
    }
}

pub fn build_player(kind: PlayerKind, seed: Option<u64>) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new()),
        PlayerKind::Random => Box::new(RandomPlayer::new(seed)),
        PlayerKind::Greedy => Box::new(GreedyPlayer::new(seed)),
        PlayerKind::Minimax => Box::new(MinimaxPlayer::new(seed)),
        PlayerKind::AlphaBeta => Box::new(AlphaBetaPlayer::new(seed)),
    }
}
