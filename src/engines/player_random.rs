//! Uniform random mover, used for diagnostics and as a sparring partner.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::player_trait::{apply_choice, parse_option, DecisionOutput, Player, PlayerResult};
use crate::game_state::game_state::GameState;

pub struct RandomPlayer {
    rng: StdRng,
    moved: bool,
}

impl RandomPlayer {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed),
            moved: false,
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "Random"
    }

    fn decide(&mut self, state: &mut GameState) -> PlayerResult<DecisionOutput> {
        self.moved = false;
        let legal_moves = state.legal_moves();

        let mut out = DecisionOutput::default();
        out.info_lines.push(format!(
            "info string random_player legal_moves {}",
            legal_moves.len()
        ));

        let Some(picked) = legal_moves.as_slice().choose(&mut self.rng).copied() else {
            return Ok(out);
        };
        apply_choice(state, picked)?;

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

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
