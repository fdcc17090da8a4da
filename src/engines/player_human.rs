//! Player driven from outside the engine.
//!
//! `decide` only arms a pending decision. The front-end later calls
//! `submit_move` with the tiles the user picked, or `skip_next_move` to
//! abandon the turn (used when a game is restarted mid-decision).

use crate::board::tile_state::TileIndex;
use crate::engines::player_trait::{DecisionOutput, Player, PlayerError, PlayerResult};
use crate::game_state::checkers_types::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Default)]
pub struct HumanPlayer {
    awaiting: bool,
    moved: bool,
    skipped: bool,
}

impl HumanPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_awaiting_move(&self) -> bool {
        self.awaiting
    }

    /// Play `start -> end` on `state` for the pending decision.
    pub fn submit_move(
        &mut self,
        state: &mut GameState,
        start: TileIndex,
        end: TileIndex,
    ) -> PlayerResult<Move> {
        if !self.awaiting {
            return Err(PlayerError::NotAwaitingMove);
        }
        let mv = state
            .legal_moves_from(start)
            .into_iter()
            .find(|mv| mv.end == end)
            .ok_or(PlayerError::IllegalMove { start, end })?;
        if !state.make_move(mv.start, mv.end) {
            return Err(PlayerError::IllegalMove { start, end });
        }
        self.awaiting = false;
        self.moved = true;
        Ok(mv)
    }

    pub fn skip_next_move(&mut self) {
        self.awaiting = false;
        self.skipped = true;
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &str {
        "Human"
    }

    fn is_human(&self) -> bool {
        true
    }

    fn decide(&mut self, state: &mut GameState) -> PlayerResult<DecisionOutput> {
        self.moved = false;
        self.skipped = false;
        self.awaiting = !state.is_game_over();

        let mut out = DecisionOutput::default();
        if self.awaiting {
            out.info_lines
                .push(format!("info string human awaiting legal_moves {}", state.legal_moves().len()));
        }
        Ok(out)
    }

    fn has_moved(&self) -> bool {
        self.moved
    }

    fn has_skipped(&self) -> bool {
        self.skipped
    }

    fn as_human_mut(&mut self) -> Option<&mut HumanPlayer> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::HumanPlayer;
    use crate::engines::player_trait::{Player, PlayerError};
    use crate::game_state::game_state::GameState;

    #[test]
    fn decision_waits_for_submitted_move() {
        let mut state = GameState::new_game();
        let mut human = HumanPlayer::new();

        let out = human.decide(&mut state).expect("decide");
        assert!(out.chosen_move.is_none());
        assert!(human.is_awaiting_move());
        assert!(!human.has_moved());
        assert!(state.is_p1_turn());

        let mv = human.submit_move(&mut state, 8, 12).expect("legal opening move");
        assert_eq!((mv.start, mv.end), (8, 12));
        assert!(human.has_moved());
        assert!(!state.is_p1_turn());
    }

    #[test]
    fn illegal_submission_keeps_waiting() {
        let mut state = GameState::new_game();
        let mut human = HumanPlayer::new();
        human.decide(&mut state).expect("decide");

        assert_eq!(
            human.submit_move(&mut state, 0, 4),
            Err(PlayerError::IllegalMove { start: 0, end: 4 })
        );
        assert!(human.is_awaiting_move());
        assert_eq!(state, GameState::new_game());
    }

    #[test]
    fn submission_without_decision_is_rejected() {
        let mut state = GameState::new_game();
        let mut human = HumanPlayer::new();
        assert_eq!(
            human.submit_move(&mut state, 8, 12),
            Err(PlayerError::NotAwaitingMove)
        );
    }

    #[test]
    fn skip_abandons_the_pending_decision() {
        let mut state = GameState::new_game();
        let mut human = HumanPlayer::new();
        human.decide(&mut state).expect("decide");
        human.skip_next_move();

        assert!(human.has_skipped());
        assert!(!human.is_awaiting_move());
        assert_eq!(
            human.submit_move(&mut state, 8, 12),
            Err(PlayerError::NotAwaitingMove)
        );
    }
}
