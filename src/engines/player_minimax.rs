use rand::rngs::StdRng;

use crate::engines::player_trait::{DecisionOutput, Player, PlayerResult};
use crate::engines::search_settings::SearchSettings;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{HeuristicScorer, StateScorer};
use crate::search::minimax::minimax_search;

/// Computer player running plain minimax under the node budget.
pub struct MinimaxPlayer<S: StateScorer = HeuristicScorer> {
    pub settings: SearchSettings<S>,
    moved: bool,
}

impl MinimaxPlayer<HeuristicScorer> {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_scorer(HeuristicScorer, seed)
    }
}

impl<S: StateScorer> MinimaxPlayer<S> {
    pub fn with_scorer(scorer: S, seed: Option<u64>) -> Self {
        Self {
            settings: SearchSettings::new(scorer, seed),
            moved: false,
        }
    }
}

impl<S: StateScorer> Player for MinimaxPlayer<S> {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn decide(&mut self, state: &mut GameState) -> PlayerResult<DecisionOutput> {
        self.moved = false;
        let out = self
            .settings
            .decide_with("minimax", minimax_search::<S, StdRng>, state)?;
        self.moved = out.chosen_move.is_some();
        Ok(out)
    }

    fn has_moved(&self) -> bool {
        self.moved
    }

    fn set_option(&mut self, name: &str, value: &str) -> PlayerResult<()> {
        self.settings.set_option(name, value)
    }
}
