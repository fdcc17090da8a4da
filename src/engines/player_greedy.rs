//! One-ply player: scores every legal move with the evaluator and picks
//! uniformly among the best.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::player_random::seeded_rng;
use crate::engines::player_trait::{apply_choice, parse_option, DecisionOutput, Player, PlayerResult};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{HeuristicScorer, StateScorer};

pub struct GreedyPlayer<S: StateScorer = HeuristicScorer> {
    scorer: S,
    rng: StdRng,
    moved: bool,
}

impl GreedyPlayer<HeuristicScorer> {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_scorer(HeuristicScorer, seed)
    }
}

impl<S: StateScorer> GreedyPlayer<S> {
    pub fn with_scorer(scorer: S, seed: Option<u64>) -> Self {
        Self {
            scorer,
            rng: seeded_rng(seed),
            moved: false,
        }
    }
}

impl<S: StateScorer> Player for GreedyPlayer<S> {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn decide(&mut self, state: &mut GameState) -> PlayerResult<DecisionOutput> {
        self.moved = false;
        let legal_moves = state.legal_moves();
        let for_p1 = state.is_p1_turn();

        let mut out = DecisionOutput::default();
        out.info_lines.push(format!(
            "info string greedy_player legal_moves {}",
            legal_moves.len()
        ));

        let mut best_value = f64::NEG_INFINITY;
        let mut best_moves = Vec::new();
        for mv in legal_moves {
            let mut child = *state;
            if !child.make_move(mv.start, mv.end) {
                continue;
            }
            let value = self.scorer.score(&child, for_p1);
            if value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(mv);
            } else if value == best_value {
                best_moves.push(mv);
            }
        }

        let Some(picked) = best_moves.as_slice().choose(&mut self.rng).copied() else {
            return Ok(out);
        };
        apply_choice(state, picked)?;

        out.info_lines.push(format!(
            "info string greedy_player score {best_value:.3} ties {}",
            best_moves.len()
        ));
        self.moved = true;
        out.chosen_move = Some(picked);
        out.max_depth_reached = 1;
        Ok(out)
    }

    fn has_moved(&self) -> bool {
        self.moved
    }

    fn set_option(&mut self, name: &str, value: &str) -> PlayerResult<()> {
        if name.eq_ignore_ascii_case("seed") {
            self.rng = StdRng::seed_from_u64(parse_option(name, value)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyPlayer;
    use crate::board::board::Board;
    use crate::board::coordinates::coordinate_to_index;
    use crate::board::tile_state::{TileIndex, TileState};
    use crate::engines::player_trait::Player;
    use crate::game_state::game_state::GameState;
    use crate::search::board_scoring::MaterialScorer;

    fn at(x: i32, y: i32) -> TileIndex {
        coordinate_to_index(x, y).expect("dark tile")
    }

    #[test]
    fn avoids_stepping_into_a_capture() {
        // Black at (2,3) may go to (1,4) or (3,4); (3,4) walks into the
        // white checker at (4,5), which is backed by (5,6).
        let board = Board::from_pieces(&[
            (at(2, 3), TileState::BLACK_CHECKER),
            (at(4, 5), TileState::WHITE_CHECKER),
            (at(5, 6), TileState::WHITE_CHECKER),
        ]);
        let mut state = GameState::from_parts(board, true, None);
        let mut player = GreedyPlayer::new(Some(3));

        let out = player.decide(&mut state).expect("decide");
        let chosen = out.chosen_move.expect("black has moves");
        assert_eq!((chosen.start, chosen.end), (at(2, 3), at(1, 4)));
    }

    #[test]
    fn ties_are_broken_among_equal_moves() {
        let mut state = GameState::new_game();
        let mut player = GreedyPlayer::with_scorer(MaterialScorer, Some(8));
        let out = player.decide(&mut state).expect("decide");
        assert!(out.chosen_move.is_some());
        assert!(player.has_moved());
        assert!(out.info_lines.iter().any(|line| line.contains("ties 7")));
    }
}
