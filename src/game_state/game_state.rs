//! Rules engine.
//!
//! `GameState` owns the packed board, the turn flag and the "continue the
//! skip chain from this tile" pointer. All mutation goes through
//! `make_move`, which only accepts moves listed by `legal_moves`.

use crate::board::board::Board;
use crate::board::coordinates::{index_to_coordinate, is_valid_index, midpoint};
use crate::board::tile_state::{PieceColor, TileIndex, TileState};
use crate::game_state::checkers_types::{MatchResult, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    p1_turn: bool,
    pending_skip: Option<TileIndex>,
    // Plies since the last capture or promotion.
    quiet_plies: u16,
    draw_rule: Option<u16>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting layout with player 1 (black) to move.
    pub fn new_game() -> Self {
        Self::from_parts(Board::new_game(), true, None)
    }

    /// Panics if `pending_skip` is not a tile index.
    pub fn from_parts(board: Board, p1_turn: bool, pending_skip: Option<TileIndex>) -> Self {
        assert!(
            pending_skip.map_or(true, is_valid_index),
            "pending skip {pending_skip:?} is off the board"
        );
        Self {
            board,
            p1_turn,
            pending_skip,
            quiet_plies: 0,
            draw_rule: None,
        }
    }

    /// Back to the starting layout. The configured draw rule is kept.
    pub fn restart(&mut self) {
        self.board = Board::new_game();
        self.p1_turn = true;
        self.pending_skip = None;
        self.quiet_plies = 0;
    }

    /// Copy of the current board.
    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn is_p1_turn(&self) -> bool {
        self.p1_turn
    }

    #[inline]
    pub fn side_to_move(&self) -> PieceColor {
        PieceColor::from_p1(self.p1_turn)
    }

    /// Tile the current player must keep skipping from, if a chain is open.
    #[inline]
    pub fn pending_skip(&self) -> Option<TileIndex> {
        self.pending_skip
    }

    #[inline]
    pub fn quiet_plies(&self) -> u16 {
        self.quiet_plies
    }

    #[inline]
    pub fn draw_rule(&self) -> Option<u16> {
        self.draw_rule
    }

    /// Declare a draw once this many consecutive plies pass without a capture
    /// or promotion. `None` disables the rule.
    pub fn set_draw_rule(&mut self, quiet_ply_limit: Option<u16>) {
        self.draw_rule = quiet_ply_limit;
    }

    pub(crate) fn replace_position(
        &mut self,
        board: Board,
        p1_turn: bool,
        pending_skip: Option<TileIndex>,
    ) {
        self.board = board;
        self.p1_turn = p1_turn;
        self.pending_skip = pending_skip;
        self.quiet_plies = 0;
    }

    /// Every legal move for the side to move.
    ///
    /// Captures are mandatory: when any piece can skip, only skips are
    /// returned. An open chain restricts the set to skips from its tile.
    pub fn legal_moves(&self) -> Vec<Move> {
        let side = self.side_to_move();

        if let Some(from) = self.pending_skip {
            if !self.board.get(from).belongs_to(side) {
                return Vec::new();
            }
            return self
                .board
                .piece_skips(from)
                .into_iter()
                .map(|end| Move::skip(from, end))
                .collect();
        }

        let pieces = self.board.pieces_of(side);

        let skips: Vec<Move> = pieces
            .iter()
            .flat_map(|&start| {
                self.board
                    .piece_skips(start)
                    .into_iter()
                    .map(move |end| Move::skip(start, end))
            })
            .collect();
        if !skips.is_empty() {
            return skips;
        }

        pieces
            .iter()
            .flat_map(|&start| {
                self.board
                    .piece_moves(start)
                    .into_iter()
                    .map(move |end| Move::normal(start, end))
            })
            .collect()
    }

    /// Legal moves starting on `start`. Empty for any index without one.
    pub fn legal_moves_from(&self, start: TileIndex) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(|mv| mv.start == start)
            .collect()
    }

    pub fn has_move(&self, start: TileIndex) -> bool {
        self.legal_moves().iter().any(|mv| mv.start == start)
    }

    pub fn is_valid_move(&self, start: TileIndex, end: TileIndex) -> bool {
        self.legal_moves()
            .iter()
            .any(|mv| mv.start == start && mv.end == end)
    }

    /// Apply the move `start -> end`.
    ///
    /// Returns `false` and leaves the state untouched when the move is not
    /// legal. A checker reaching its last row is promoted and the turn ends
    /// there, even if another skip would be available.
    pub fn make_move(&mut self, start: TileIndex, end: TileIndex) -> bool {
        let Some(mv) = self
            .legal_moves()
            .into_iter()
            .find(|mv| mv.start == start && mv.end == end)
        else {
            return false;
        };

        let piece = self.board.get(start);
        self.board.set(end, piece);
        self.board.set(start, TileState::EMPTY);

        if mv.is_skip() {
            if let Some(captured) = midpoint(start, end) {
                self.board.set(captured, TileState::EMPTY);
            }
        }

        let promoted = self.promote_if_needed(end, piece);

        let chain_continues =
            mv.is_skip() && !promoted && !self.board.piece_skips(end).is_empty();
        if chain_continues {
            self.pending_skip = Some(end);
        } else {
            self.pending_skip = None;
            self.p1_turn = !self.p1_turn;
        }

        if mv.is_skip() || promoted {
            self.quiet_plies = 0;
        } else {
            self.quiet_plies = self.quiet_plies.saturating_add(1);
        }

        true
    }

    fn promote_if_needed(&mut self, index: TileIndex, piece: TileState) -> bool {
        let TileState::Checker(color) = piece else {
            return false;
        };
        let reached_last_row = index_to_coordinate(index)
            .map(|c| c.y == color.promotion_row())
            .unwrap_or(false);
        if reached_last_row {
            self.board.set(index, TileState::King(color));
        }
        reached_last_row
    }

    pub fn result(&self) -> MatchResult {
        let black = self.board.count_color(PieceColor::Black);
        let white = self.board.count_color(PieceColor::White);

        if black == 0 && white == 0 {
            return MatchResult::Unknown;
        }
        if black == 0 {
            return MatchResult::win_for(PieceColor::White.is_p1());
        }
        if white == 0 {
            return MatchResult::win_for(PieceColor::Black.is_p1());
        }

        if self.legal_moves().is_empty() {
            return MatchResult::win_for(!self.p1_turn);
        }

        match self.draw_rule {
            Some(limit) if self.quiet_plies >= limit => MatchResult::Draw,
            _ => MatchResult::Unknown,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.result().is_decided()
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::board::board::Board;
    use crate::board::coordinates::coordinate_to_index;
    use crate::board::tile_state::{TileIndex, TileState};
    use crate::game_state::checkers_types::{MatchResult, Move, MoveKind};

    fn at(x: i32, y: i32) -> TileIndex {
        coordinate_to_index(x, y).expect("dark tile")
    }

    #[test]
    fn opening_position_has_seven_quiet_moves() {
        let game = GameState::new_game();
        let moves = game.legal_moves();

        assert!(game.is_p1_turn());
        assert_eq!(moves.len(), 7);
        assert!(moves.iter().all(|mv| mv.kind == MoveKind::Normal));
        assert_eq!(game.result(), MatchResult::Unknown);
    }

    #[test]
    fn illegal_move_is_rejected_without_mutation() {
        let mut game = GameState::new_game();
        let before = game;

        assert!(!game.make_move(0, 4));
        assert!(!game.make_move(20, 16), "not white's turn");
        assert!(!game.make_move(99, 3));
        assert_eq!(game, before);
    }

    fn assert_only_listed_moves_apply(state: GameState) {
        let legal = state.legal_moves();
        for start in 0..32 {
            for end in 0..32 {
                if legal.iter().any(|mv| mv.start == start && mv.end == end) {
                    continue;
                }
                let mut game = state;
                assert!(!game.make_move(start, end), "{start}-{end} accepted");
                assert_eq!(game, state, "{start}-{end} mutated the state");
            }
        }
    }

    #[test]
    fn every_unlisted_pair_is_a_no_op() {
        assert_only_listed_moves_apply(GameState::new_game());

        // White is mid-chain at (3,4) with one more jump available.
        let board = Board::from_pieces(&[
            (at(3, 4), TileState::WHITE_CHECKER),
            (at(4, 3), TileState::BLACK_CHECKER),
            (at(7, 6), TileState::WHITE_CHECKER),
            (at(6, 5), TileState::BLACK_CHECKER),
        ]);
        let chained = GameState::from_parts(board, false, Some(at(3, 4)));
        assert_eq!(chained.legal_moves(), vec![Move::skip(at(3, 4), at(5, 2))]);
        assert_only_listed_moves_apply(chained);
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn out_of_range_pending_skip_is_rejected_up_front() {
        let _ = GameState::from_parts(Board::new_game(), true, Some(40));
    }

    #[test]
    fn quiet_move_switches_turn() {
        let mut game = GameState::new_game();
        let mv = game.legal_moves()[0];

        assert!(game.make_move(mv.start, mv.end));
        assert!(!game.is_p1_turn());
        assert_eq!(game.board().get(mv.start), TileState::EMPTY);
        assert_eq!(game.board().get(mv.end), TileState::BLACK_CHECKER);
        assert_eq!(game.quiet_plies(), 1);
    }

    #[test]
    fn single_capture_is_the_only_move_and_removes_victim() {
        let board = Board::from_pieces(&[
            (at(2, 5), TileState::WHITE_CHECKER),
            (at(3, 4), TileState::BLACK_CHECKER),
        ]);
        let mut game = GameState::from_parts(board, false, None);

        let moves = game.legal_moves();
        assert_eq!(moves, vec![Move::skip(at(2, 5), at(4, 3))]);
        assert_eq!(moves[0].kind, MoveKind::Skip);

        assert!(game.make_move(at(2, 5), at(4, 3)));
        let board = game.board();
        assert_eq!(board.get(at(3, 4)), TileState::EMPTY);
        assert_eq!(board.get(at(2, 5)), TileState::EMPTY);
        assert_eq!(board.get(at(4, 3)), TileState::WHITE_CHECKER);
        assert_eq!(game.quiet_plies(), 0);
    }

    #[test]
    fn capture_is_forced_for_every_piece() {
        let board = Board::from_pieces(&[
            (at(2, 5), TileState::WHITE_CHECKER),
            (at(3, 4), TileState::BLACK_CHECKER),
            (at(6, 7), TileState::WHITE_KING),
        ]);
        let game = GameState::from_parts(board, false, None);

        let moves = game.legal_moves();
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|mv| mv.is_skip()));
        assert!(!game.has_move(at(6, 7)));
    }

    #[test]
    fn multi_skip_chain_keeps_the_turn_and_restricts_moves() {
        let board = Board::from_pieces(&[
            (at(1, 6), TileState::WHITE_CHECKER),
            (at(2, 5), TileState::BLACK_CHECKER),
            (at(4, 3), TileState::BLACK_CHECKER),
            (at(7, 6), TileState::WHITE_CHECKER),
            (at(6, 5), TileState::BLACK_CHECKER),
        ]);
        let mut game = GameState::from_parts(board, false, None);
        assert_eq!(game.legal_moves().len(), 2);

        assert!(game.make_move(at(1, 6), at(3, 4)));
        assert!(!game.is_p1_turn());
        assert_eq!(game.pending_skip(), Some(at(3, 4)));
        assert_eq!(game.legal_moves(), vec![Move::skip(at(3, 4), at(5, 2))]);
        assert!(!game.make_move(at(7, 6), at(5, 4)), "chain cannot be interrupted");

        assert!(game.make_move(at(3, 4), at(5, 2)));
        assert!(game.is_p1_turn());
        assert_eq!(game.pending_skip(), None);
    }

    #[test]
    fn promotion_ends_the_turn_even_with_skip_available() {
        let board = Board::from_pieces(&[
            (at(5, 2), TileState::WHITE_CHECKER),
            (at(4, 1), TileState::BLACK_CHECKER),
            (at(2, 1), TileState::BLACK_CHECKER),
        ]);
        let mut game = GameState::from_parts(board, false, None);

        assert!(game.make_move(at(5, 2), at(3, 0)));
        let board = game.board();
        assert_eq!(board.get(at(3, 0)), TileState::WHITE_KING);
        assert!(board.is_valid_skip(at(3, 0), at(1, 2)));
        assert!(game.is_p1_turn());
        assert_eq!(game.pending_skip(), None);
    }

    #[test]
    fn side_without_pieces_loses() {
        let board = Board::from_pieces(&[(at(4, 3), TileState::WHITE_CHECKER)]);
        let game = GameState::from_parts(board, true, None);

        assert_eq!(game.result(), MatchResult::P2Win);
        assert!(game.is_game_over());
    }

    #[test]
    fn blocked_side_to_move_loses() {
        let board = Board::from_pieces(&[
            (at(0, 5), TileState::BLACK_CHECKER),
            (at(1, 6), TileState::WHITE_CHECKER),
            (at(2, 7), TileState::WHITE_CHECKER),
        ]);
        let game = GameState::from_parts(board, true, None);

        assert!(game.legal_moves().is_empty());
        assert_eq!(game.result(), MatchResult::P2Win);
    }

    #[test]
    fn draw_rule_triggers_after_quiet_plies() {
        let board = Board::from_pieces(&[
            (at(1, 0), TileState::BLACK_KING),
            (at(6, 7), TileState::WHITE_KING),
        ]);
        let mut game = GameState::from_parts(board, true, None);
        game.set_draw_rule(Some(2));

        assert!(game.make_move(at(1, 0), at(2, 1)));
        assert_eq!(game.result(), MatchResult::Unknown);
        assert!(game.make_move(at(6, 7), at(5, 6)));
        assert_eq!(game.quiet_plies(), 2);
        assert_eq!(game.result(), MatchResult::Draw);
    }

    #[test]
    fn moves_from_reports_only_that_piece() {
        let game = GameState::new_game();
        let from_nine = game.legal_moves_from(9);
        assert_eq!(from_nine.len(), 2);
        assert!(game.has_move(9));
        assert!(!game.has_move(0));
        assert!(!game.has_move(500));
        assert!(game.is_valid_move(from_nine[0].start, from_nine[0].end));
    }
}
