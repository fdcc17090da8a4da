//! Compact string encoding of a `GameState`.
//!
//! Layout: 32 tile codes (one decimal digit each, `0`/`4`/`5`/`6`/`7`), then
//! `1` or `0` for "player 1 to move", then the pending-skip index (`-1` when
//! no chain is open). Example starting position:
//! `66666666666600000000444444444444` + `1` + `-1`.
//!
//! Decoding never fails: unreadable tile characters are skipped, leaving the
//! starting-layout tile in place, and a malformed tail means "no pending skip".

use crate::board::board::Board;
use crate::board::coordinates::is_valid_index;
use crate::board::tile_state::{TileIndex, TileState, TILE_COUNT};
use crate::game_state::game_state::GameState;

/// Result of a lenient decode, with the tile positions that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedState {
    pub state: GameState,
    pub skipped_tiles: Vec<TileIndex>,
}

pub fn encode_state(state: &GameState) -> String {
    let board = state.board();
    let mut out = String::with_capacity(TILE_COUNT + 3);
    for (_, tile) in board.iter() {
        out.push(char::from(b'0' + tile.code()));
    }
    out.push(if state.is_p1_turn() { '1' } else { '0' });
    match state.pending_skip() {
        Some(index) => out.push_str(&index.to_string()),
        None => out.push_str("-1"),
    }
    out
}

pub fn decode_state_lenient(encoded: &str) -> DecodedState {
    let mut state = GameState::new_game();
    let mut skipped_tiles = Vec::new();

    let chars: Vec<char> = encoded.trim().chars().collect();
    if chars.is_empty() {
        return DecodedState {
            state,
            skipped_tiles,
        };
    }

    let mut board = Board::new_game();
    for (index, ch) in chars.iter().take(TILE_COUNT).enumerate() {
        match ch
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(TileState::from_code)
        {
            Some(tile) => board.set(index, tile),
            None => skipped_tiles.push(index),
        }
    }

    let p1_turn = chars.get(TILE_COUNT).map_or(true, |ch| *ch == '1');

    let pending_skip = if chars.len() > TILE_COUNT + 1 {
        let tail: String = chars[TILE_COUNT + 1..].iter().collect();
        parse_pending_skip(&tail)
    } else {
        None
    };

    state.replace_position(board, p1_turn, pending_skip);
    DecodedState {
        state,
        skipped_tiles,
    }
}

fn parse_pending_skip(tail: &str) -> Option<TileIndex> {
    let value = tail.trim().parse::<i32>().ok()?;
    let index = usize::try_from(value).ok()?;
    is_valid_index(index).then_some(index)
}

impl GameState {
    /// Encoded form of this state; see the module docs for the layout.
    pub fn state_string(&self) -> String {
        encode_state(self)
    }

    /// Replace board, turn and pending skip with a decoded string.
    ///
    /// The draw-rule configuration is kept; the quiet-ply counter restarts.
    pub fn set_state_string(&mut self, encoded: &str) {
        let decoded = decode_state_lenient(encoded).state;
        self.replace_position(decoded.board(), decoded.is_p1_turn(), decoded.pending_skip());
    }

    pub fn from_state_string(encoded: &str) -> Self {
        decode_state_lenient(encoded).state
    }
}
