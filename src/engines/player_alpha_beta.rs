use rand::rngs::StdRng;

use crate::engines::player_trait::{DecisionOutput, Player, PlayerResult};
use crate::engines::search_settings::SearchSettings;
use crate::game_state::game_state::GameState;
use crate::search::alpha_beta::alpha_beta_search;
use crate::search::board_scoring::{HeuristicScorer, StateScorer};

/// Computer player running alpha-beta; the strongest built-in opponent.
pub struct AlphaBetaPlayer<S: StateScorer = HeuristicScorer> {
    pub settings: SearchSettings<S>,
    moved: bool,
}

impl AlphaBetaPlayer<HeuristicScorer> {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_scorer(HeuristicScorer, seed)
    }
}

impl<S: StateScorer> AlphaBetaPlayer<S> {
    pub fn with_scorer(scorer: S, seed: Option<u64>) -> Self {
        Self {
            settings: SearchSettings::new(scorer, seed),
            moved: false,
        }
    }
}

impl<S: StateScorer> Player for AlphaBetaPlayer<S> {
    fn name(&self) -> &str {
        "AlphaBeta"
    }

    fn decide(&mut self, state: &mut GameState) -> PlayerResult<DecisionOutput> {
        self.moved = false;
        let out = self
            .settings
            .decide_with("alpha_beta", alpha_beta_search::<S, StdRng>, state)?;
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
