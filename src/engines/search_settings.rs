//! Option handling and search driving shared by the minimax and alpha-beta
//! players.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::player_random::seeded_rng;
use crate::engines::player_trait::{
    apply_choice, parse_option, DecisionOutput, PlayerError, PlayerResult,
};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{HeuristicScorer, StateScorer};
use crate::search::search_context::{SearchConfig, SearchResult};

/// Signature shared by `minimax_search` and `alpha_beta_search`.
pub(crate) type SearchFn<S> = fn(&GameState, &S, &SearchConfig, &mut StdRng) -> SearchResult;

pub struct SearchSettings<S: StateScorer = HeuristicScorer> {
    pub config: SearchConfig,
    pub scorer: S,
    rng: StdRng,
}

impl<S: StateScorer> SearchSettings<S> {
    pub fn new(scorer: S, seed: Option<u64>) -> Self {
        Self {
            config: SearchConfig::default(),
            scorer,
            rng: seeded_rng(seed),
        }
    }

    /// Recognized names: `NodeLimit`, `ValueFloor` (`none` disables),
    /// `MaxDepth` (`0` disables), `Shuffle`, `Seed`.
    pub fn set_option(&mut self, name: &str, value: &str) -> PlayerResult<()> {
        match name.to_ascii_lowercase().as_str() {
            "nodelimit" => self.config.node_limit = parse_option(name, value)?,
            "valuefloor" => {
                self.config.value_floor = if value.trim().eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(parse_option(name, value)?)
                };
            }
            "maxdepth" => {
                let depth: u16 = parse_option(name, value)?;
                self.config.max_depth = (depth > 0).then_some(depth);
            }
            "shuffle" => self.config.shuffle_moves = parse_option(name, value)?,
            "seed" => self.rng = StdRng::seed_from_u64(parse_option(name, value)?),
            _ => return Err(PlayerError::UnknownOption(name.to_owned())),
        }
        Ok(())
    }

    /// Run `search` on a copy of `state` and play the result on `state`.
    pub(crate) fn decide_with(
        &mut self,
        label: &str,
        search: SearchFn<S>,
        state: &mut GameState,
    ) -> PlayerResult<DecisionOutput> {
        let mut out = DecisionOutput::default();
        if state.is_game_over() {
            out.info_lines
                .push(format!("info string {label} no_move result {}", state.result()));
            return Ok(out);
        }

        let snapshot = *state;
        let result = search(&snapshot, &self.scorer, &self.config, &mut self.rng);
        out.max_depth_reached = result.max_depth_reached;
        out.info_lines.push(format!(
            "info string {label} nodes {} depth {} value {:.3}",
            result.nodes, result.max_depth_reached, result.value
        ));

        if let Some(mv) = result.best_move {
            apply_choice(state, mv)?;
            out.info_lines.push(format!("info string {label} move {mv}"));
            out.chosen_move = Some(mv);
        }
        Ok(out)
    }
}
