//! Minimax with alpha-beta pruning.
//!
//! Same node accounting, leaf penalty and cutoffs as `minimax`; the window
//! only removes branches that cannot change the root value.

use rand::Rng;

use crate::game_state::checkers_types::Move;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::StateScorer;
use crate::search::search_context::{child_maximizing, SearchConfig, SearchContext, SearchResult};

pub fn alpha_beta_search<S: StateScorer, R: Rng + ?Sized>(
    state: &GameState,
    scorer: &S,
    config: &SearchConfig,
    rng: &mut R,
) -> SearchResult {
    let mut ctx = SearchContext::new(scorer, config, rng, state.is_p1_turn());
    let (best_move, value) = alpha_beta(
        &mut ctx,
        state,
        f64::NEG_INFINITY,
        f64::INFINITY,
        true,
        0,
    );
    ctx.finish(best_move, value)
}

fn alpha_beta<S: StateScorer, R: Rng + ?Sized>(
    ctx: &mut SearchContext<'_, S, R>,
    state: &GameState,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    depth: u16,
) -> (Option<Move>, f64) {
    ctx.note_depth(depth);

    let value = ctx.evaluate(state);
    if state.is_game_over() {
        return (None, value);
    }
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
        let (_, child_value) = alpha_beta(ctx, &child, alpha, beta, next, depth + 1);

        if maximizing {
            if child_value > best_value || best_move.is_none() {
                best_value = child_value;
                best_move = Some(mv);
            }
            alpha = alpha.max(child_value);
        } else {
            if child_value < best_value || best_move.is_none() {
                best_value = child_value;
                best_move = Some(mv);
            }
            beta = beta.min(child_value);
        }

        if beta <= alpha {
            break;
        }
    }

    match best_move {
        Some(_) => (best_move, best_value),
        None => (None, value),
    }
}
