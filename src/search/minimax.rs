//! Plain minimax over cloned game states.
//!
//! Every node works on its own copy of the position; the packed board makes
//! that copy a couple of machine words. Expansion stops at game end or when
//! the shared cutoff rule in `SearchContext` fires.

use rand::Rng;

use crate::game_state::checkers_types::Move;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::StateScorer;
use crate::search::search_context::{child_maximizing, SearchConfig, SearchContext, SearchResult};

/// Best move for the side to move in `state`, scored from that side's view.
pub fn minimax_search<S: StateScorer, R: Rng + ?Sized>(
    state: &GameState,
    scorer: &S,
    config: &SearchConfig,
    rng: &mut R,
) -> SearchResult {
    let mut ctx = SearchContext::new(scorer, config, rng, state.is_p1_turn());
    let (best_move, value) = minimax(&mut ctx, state, true, 0);
    ctx.finish(best_move, value)
}

fn minimax<S: StateScorer, R: Rng + ?Sized>(
    ctx: &mut SearchContext<'_, S, R>,
    state: &GameState,
    maximizing: bool,
    depth: u16,
) -> (Option<Move>, f64) {
    ctx.note_depth(depth);

    let value = ctx.evaluate(state);
    if state.is_game_over() {
        return (None, value);
    }
    // The root always expands so a playable position yields a move.
    if depth > 0 && ctx.should_stop(value, depth) {
        return (None, ctx.penalized(value, depth));
    }
    ctx.nodes += 1;

    let moves = ctx.ordered_moves(state, maximizing);
    let mut best_move = None;
    let mut best_value = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for mv in moves {
        let mut child = *state;
        if !child.make_move(mv.start, mv.end) {
            continue;
        }
        let next = child_maximizing(state, &child, maximizing);
        let (_, child_value) = minimax(ctx, &child, next, depth + 1);

        let better = if maximizing {
            child_value > best_value
        } else {
            child_value < best_value
        };
        if better || best_move.is_none() {
            best_value = child_value;
            best_move = Some(mv);
        }
    }

    match best_move {
        Some(_) => (best_move, best_value),
        None => (None, value),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::minimax_search;
    use crate::board::board::Board;
    use crate::board::coordinates::coordinate_to_index;
    use crate::board::tile_state::TileState;
    use crate::game_state::game_state::GameState;
    use crate::search::board_scoring::{HeuristicScorer, MaterialScorer};
    use crate::search::search_context::SearchConfig;

    fn small_config() -> SearchConfig {
        SearchConfig {
            node_limit: 2_000,
            ..SearchConfig::default()
        }
    }

    #[test]
    fn terminal_root_returns_no_move() {
        let white = coordinate_to_index(4, 3).expect("dark");
        let board = Board::from_pieces(&[(white, TileState::WHITE_CHECKER)]);
        let state = GameState::from_parts(board, true, None);
        let mut rng = StdRng::seed_from_u64(3);

        let result = minimax_search(&state, &HeuristicScorer, &small_config(), &mut rng);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn returns_a_legal_opening_move() {
        let state = GameState::new_game();
        let mut rng = StdRng::seed_from_u64(11);

        let result = minimax_search(&state, &HeuristicScorer, &small_config(), &mut rng);
        let chosen = result.best_move.expect("opening has moves");
        assert!(state.legal_moves().contains(&chosen));
        assert_eq!(result.nodes, 2_000);
        assert!(result.max_depth_reached >= 1);
    }

    #[test]
    fn same_seed_gives_same_choice() {
        let state = GameState::new_game();
        let config = small_config();

        let first = minimax_search(&state, &HeuristicScorer, &config, &mut StdRng::seed_from_u64(42));
        let second = minimax_search(&state, &HeuristicScorer, &config, &mut StdRng::seed_from_u64(42));
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.value, second.value);
        assert_eq!(first.nodes, second.nodes);
    }

    #[test]
    fn takes_the_winning_capture() {
        // The forced capture removes the last white piece.
        let at = |x, y| coordinate_to_index(x, y).expect("dark");
        let board = Board::from_pieces(&[
            (at(2, 3), TileState::BLACK_KING),
            (at(3, 4), TileState::WHITE_CHECKER),
        ]);
        let state = GameState::from_parts(board, true, None);
        let mut rng = StdRng::seed_from_u64(5);

        let result = minimax_search(&state, &MaterialScorer, &small_config(), &mut rng);
        let chosen = result.best_move.expect("capture available");
        assert_eq!((chosen.start, chosen.end), (at(2, 3), at(4, 5)));
        assert_eq!(result.value, 2.0);
    }

    #[test]
    fn bounded_depth_limits_tree_height() {
        let state = GameState::new_game();
        let config = SearchConfig {
            node_limit: u64::MAX,
            value_floor: None,
            max_depth: Some(2),
            shuffle_moves: false,
            ..SearchConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);

        let result = minimax_search(&state, &MaterialScorer, &config, &mut rng);
        assert_eq!(result.max_depth_reached, 2);
        // Root plus the 7 opening replies; the 49 depth-2 leaves are only scored.
        assert_eq!(result.nodes, 1 + 7);
    }

    #[test]
    fn leaves_do_not_count_against_the_budget() {
        let state = GameState::new_game();
        let config = SearchConfig {
            node_limit: 8,
            value_floor: None,
            max_depth: Some(2),
            shuffle_moves: false,
            ..SearchConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(0);

        let result = minimax_search(&state, &MaterialScorer, &config, &mut rng);
        assert_eq!(result.nodes, 8);
        assert_eq!(result.max_depth_reached, 2);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn value_floor_stops_expansion_below_the_root() {
        // Every reply scores 0.0 in material, below the floor.
        let state = GameState::new_game();
        let config = SearchConfig {
            node_limit: u64::MAX,
            value_floor: Some(0.5),
            max_depth: None,
            ..SearchConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(4);

        let result = minimax_search(&state, &MaterialScorer, &config, &mut rng);
        let chosen = result.best_move.expect("root always expands");
        assert!(state.legal_moves().contains(&chosen));
        assert_eq!(result.nodes, 1);
        assert_eq!(result.max_depth_reached, 1);
    }
}
