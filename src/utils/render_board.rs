//! Plain-text board renderer for the command loop, logs and tests.
//!
//! Row `y = 7` is printed first so player 1 (black) sits at the bottom.
//! Dark tiles show their piece (`b`, `B`, `w`, `W`) or `·`; light tiles are
//! blank.

use crate::board::board::Board;
use crate::board::coordinates::coordinate_to_index;
use crate::board::tile_state::{PieceColor, TileState, BOARD_SIZE};
use crate::game_state::game_state::GameState;

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("  0 1 2 3 4 5 6 7\n");

    for y in (0..BOARD_SIZE).rev() {
        out.push_str(&y.to_string());
        out.push(' ');
        for x in 0..BOARD_SIZE {
            let ch = match coordinate_to_index(x, y) {
                Some(index) => tile_char(board.get(index)),
                None => ' ',
            };
            out.push(ch);
            if x < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7");
    out
}

/// Board plus a status line with the side to move and any open skip chain.
pub fn render_game_state(state: &GameState) -> String {
    let mut out = render_board(&state.board());
    out.push('\n');
    let mover = if state.is_p1_turn() { "P1 (black)" } else { "P2 (white)" };
    out.push_str(&format!("to move: {mover}"));
    if let Some(tile) = state.pending_skip() {
        out.push_str(&format!(", continuing skip from {tile}"));
    }
    out
}

fn tile_char(tile: TileState) -> char {
    match tile {
        TileState::Empty => '·',
        TileState::Checker(PieceColor::Black) => 'b',
        TileState::King(PieceColor::Black) => 'B',
        TileState::Checker(PieceColor::White) => 'w',
        TileState::King(PieceColor::White) => 'W',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_board, render_game_state};
    use crate::board::board::Board;
    use crate::board::tile_state::TileState;
    use crate::game_state::game_state::GameState;

    #[test]
    fn starting_board_has_white_on_top() {
        let text = render_board(&Board::new_game());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "7 w   w   w   w  ");
        assert_eq!(lines[4], "4   ·   ·   ·   ·");
        assert_eq!(lines[8], "0   b   b   b   b");
    }

    #[test]
    fn kings_are_upper_case_and_status_shows_chain() {
        let board = Board::from_pieces(&[(0, TileState::BLACK_KING), (31, TileState::WHITE_KING)]);
        let state = GameState::from_parts(board, false, Some(31));
        let text = render_game_state(&state);
        assert!(text.contains('B'));
        assert!(text.contains('W'));
        assert!(text.ends_with("to move: P2 (white), continuing skip from 31"));
    }
}
