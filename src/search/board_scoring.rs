//! Pluggable position evaluation.
//!
//! Search and the greedy player are generic over `StateScorer`, so alternate
//! heuristics can be swapped in without touching search code. Scores are
//! always from the point of view of the requested player.

use crate::board::board::Board;
use crate::board::coordinates::{index_to_coordinate, Coordinate};
use crate::board::tile_state::{PieceColor, TileState, BOARD_SIZE, PIECES_PER_SIDE};
use crate::game_state::checkers_types::MatchResult;
use crate::game_state::game_state::GameState;

pub const CHECKER_WEIGHT: f64 = 1.0;
pub const KING_WEIGHT: f64 = 2.0;
pub const SAFE_WEIGHT: f64 = 3.0;
pub const UNSAFE_WEIGHT: f64 = -5.0;
pub const KING_FACTOR: f64 = 2.0;

/// Bonus added for a decided game in favor of the evaluated player.
pub const WIN_VALUE: f64 = 500.0;

const MATERIAL_SCALE: f64 = 10.0;
const SAFETY_SCALE: f64 = 0.1;

pub trait StateScorer: Send + Sync {
    /// Score `state` for player 1 (`for_p1 = true`) or player 2.
    fn score(&self, state: &GameState, for_p1: bool) -> f64;
}

/// Own material minus opponent material: checkers 1, kings 2.
pub fn material_value(board: &Board, for_p1: bool) -> f64 {
    let own = PieceColor::from_p1(for_p1);
    let enemy = own.opposite();

    let side_value = |color: PieceColor| {
        board.count(TileState::Checker(color)) as f64 * CHECKER_WEIGHT
            + board.count(TileState::King(color)) as f64 * KING_WEIGHT
    };
    side_value(own) - side_value(enemy)
}

/// `+3` per safe piece of `color`, `-5` per capturable one (doubled for kings).
pub fn safety_weight(board: &Board, color: PieceColor) -> f64 {
    board
        .pieces_of(color)
        .into_iter()
        .map(|index| {
            if board.is_safe(index) {
                SAFE_WEIGHT
            } else if board.get(index).is_king() {
                UNSAFE_WEIGHT * KING_FACTOR
            } else {
                UNSAFE_WEIGHT
            }
        })
        .sum()
}

/// Largest possible sum of pairwise distances between two full sides.
pub fn max_distance_sum() -> f64 {
    let diagonal = f64::from(BOARD_SIZE * BOARD_SIZE + BOARD_SIZE * BOARD_SIZE).sqrt();
    let pairs = (PIECES_PER_SIDE * PIECES_PER_SIDE) as f64;
    diagonal * pairs
}

/// Kings-only heuristic.
///
/// With more pieces than the opponent the side wants to close in (score
/// `max_distance_sum - sum`); otherwise it wants to run (score `sum`).
pub fn endgame_distance_value(board: &Board, for_p1: bool) -> f64 {
    let own_color = PieceColor::from_p1(for_p1);
    let own = coordinates_of(board, own_color);
    let enemy = coordinates_of(board, own_color.opposite());

    let total: f64 = own
        .iter()
        .flat_map(|a| enemy.iter().map(move |b| a.distance(*b)))
        .sum();

    if own.len() > enemy.len() {
        max_distance_sum() - total
    } else {
        total
    }
}

fn coordinates_of(board: &Board, color: PieceColor) -> Vec<Coordinate> {
    board
        .pieces_of(color)
        .into_iter()
        .filter_map(index_to_coordinate)
        .collect()
}

fn terminal_bonus(state: &GameState, for_p1: bool) -> f64 {
    match state.result() {
        MatchResult::P1Win if for_p1 => WIN_VALUE,
        MatchResult::P2Win if !for_p1 => WIN_VALUE,
        MatchResult::P1Win | MatchResult::P2Win => -WIN_VALUE,
        MatchResult::Draw | MatchResult::Unknown => 0.0,
    }
}

/// Plain material count, the evaluation the first computer players used.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl StateScorer for MaterialScorer {
    fn score(&self, state: &GameState, for_p1: bool) -> f64 {
        material_value(&state.board(), for_p1)
    }
}

/// Material, safety and the kings-only distance heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    fn positional_value(board: &Board, for_p1: bool) -> f64 {
        if board.men_remaining() == 0 {
            return endgame_distance_value(board, for_p1);
        }
        let own = PieceColor::from_p1(for_p1);
        let safety = safety_weight(board, own) - safety_weight(board, own.opposite());
        material_value(board, for_p1) * MATERIAL_SCALE + safety * SAFETY_SCALE
    }
}

impl StateScorer for HeuristicScorer {
    fn score(&self, state: &GameState, for_p1: bool) -> f64 {
        let board = state.board();
        Self::positional_value(&board, for_p1) + terminal_bonus(state, for_p1)
    }
}
