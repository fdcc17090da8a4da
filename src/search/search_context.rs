//! Configuration, per-invocation state and results shared by both search
//! strategies.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::checkers_types::Move;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::StateScorer;

pub const DEFAULT_NODE_LIMIT: u64 = 100_000;
pub const DEFAULT_VALUE_FLOOR: f64 = -1000.0;
pub const DEFAULT_DEPTH_PENALTY: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Expanded-node budget for one search call.
    pub node_limit: u64,
    /// Stop expanding a node whose evaluation drops below this value.
    pub value_floor: Option<f64>,
    /// Bounded variant: evaluate directly once this many plies deep.
    pub max_depth: Option<u16>,
    /// Subtracted once per ply from non-terminal leaf values.
    pub depth_penalty: f64,
    /// Shuffle move order at maximizing nodes.
    pub shuffle_moves: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            node_limit: DEFAULT_NODE_LIMIT,
            value_floor: Some(DEFAULT_VALUE_FLOOR),
            max_depth: None,
            depth_penalty: DEFAULT_DEPTH_PENALTY,
            shuffle_moves: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchResult {
    /// `None` when the root has no legal move.
    pub best_move: Option<Move>,
    pub value: f64,
    pub nodes: u64,
    pub max_depth_reached: u16,
}

/// Mutable state threaded through one search call.
pub(crate) struct SearchContext<'a, S: StateScorer, R: Rng + ?Sized> {
    pub scorer: &'a S,
    pub config: &'a SearchConfig,
    pub rng: &'a mut R,
    /// Perspective of the player who started the search.
    pub root_is_p1: bool,
    pub nodes: u64,
    pub max_depth_reached: u16,
}

impl<'a, S: StateScorer, R: Rng + ?Sized> SearchContext<'a, S, R> {
    pub fn new(scorer: &'a S, config: &'a SearchConfig, rng: &'a mut R, root_is_p1: bool) -> Self {
        Self {
            scorer,
            config,
            rng,
            root_is_p1,
            nodes: 0,
            max_depth_reached: 0,
        }
    }

    #[inline]
    pub fn evaluate(&self, state: &GameState) -> f64 {
        self.scorer.score(state, self.root_is_p1)
    }

    #[inline]
    pub fn note_depth(&mut self, depth: u16) {
        self.max_depth_reached = self.max_depth_reached.max(depth);
    }

    /// Leaf value of a non-terminal node at `depth`.
    #[inline]
    pub fn penalized(&self, value: f64, depth: u16) -> f64 {
        value - f64::from(depth) * self.config.depth_penalty
    }

    /// Node budget, value floor or depth bound reached.
    pub fn should_stop(&self, value: f64, depth: u16) -> bool {
        if self.nodes >= self.config.node_limit {
            return true;
        }
        if self.config.value_floor.is_some_and(|floor| value < floor) {
            return true;
        }
        self.config.max_depth.is_some_and(|max| depth >= max)
    }

    /// Legal moves, shuffled at maximizing nodes when configured.
    pub fn ordered_moves(&mut self, state: &GameState, maximizing: bool) -> Vec<Move> {
        let mut moves = state.legal_moves();
        if maximizing && self.config.shuffle_moves {
            moves.shuffle(&mut *self.rng);
        }
        moves
    }

    pub fn finish(&self, best_move: Option<Move>, value: f64) -> SearchResult {
        SearchResult {
            best_move,
            value,
            nodes: self.nodes,
            max_depth_reached: self.max_depth_reached,
        }
    }
}

/// Maximizing flag for a child: it only flips when the turn actually passes,
/// so a skip chain stays with the same side.
#[inline]
pub(crate) fn child_maximizing(parent: &GameState, child: &GameState, maximizing: bool) -> bool {
    if parent.is_p1_turn() == child.is_p1_turn() {
        maximizing
    } else {
        !maximizing
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{child_maximizing, SearchConfig, SearchContext};
    use crate::game_state::game_state::GameState;
    use crate::search::board_scoring::MaterialScorer;

    #[test]
    fn default_config_matches_documented_cutoffs() {
        let config = SearchConfig::default();
        assert_eq!(config.node_limit, 100_000);
        assert_eq!(config.value_floor, Some(-1000.0));
        assert_eq!(config.max_depth, None);
        assert!(config.shuffle_moves);
    }

    #[test]
    fn cutoffs_trigger_on_budget_floor_and_depth() {
        let config = SearchConfig {
            node_limit: 3,
            value_floor: Some(-5.0),
            max_depth: Some(4),
            ..SearchConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = SearchContext::new(&MaterialScorer, &config, &mut rng, true);

        assert!(!ctx.should_stop(0.0, 1));
        assert!(ctx.should_stop(-6.0, 1));
        assert!(ctx.should_stop(0.0, 4));
        ctx.nodes = 3;
        assert!(ctx.should_stop(0.0, 1));
    }

    #[test]
    fn penalty_grows_with_depth() {
        let config = SearchConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let ctx = SearchContext::new(&MaterialScorer, &config, &mut rng, true);
        assert!(ctx.penalized(1.0, 3) < ctx.penalized(1.0, 1));
    }

    #[test]
    fn maximizing_flag_flips_only_on_turn_change() {
        let parent = GameState::new_game();
        let mut child = parent;
        let mv = child.legal_moves()[0];
        assert!(child.make_move(mv.start, mv.end));

        assert!(!child_maximizing(&parent, &child, true));
        assert!(child_maximizing(&parent, &parent, true));
    }
}
