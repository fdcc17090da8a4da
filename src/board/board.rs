//! Packed checker board.
//!
//! The 32 playable tiles are stored as 3-bit codes, 16 tiles per `u64` word,
//! so a full board is two machine words and copies by value. The board has no
//! rules knowledge beyond geometry; see `piece_rules` for move derivation.

use crate::board::tile_state::{PieceColor, TileIndex, TileState, PIECES_PER_SIDE, TILE_COUNT};

const BITS_PER_TILE: usize = 3;
const TILES_PER_WORD: usize = 16;
const TILE_MASK: u64 = 0b111;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    words: [u64; 2],
}

impl Board {
    /// Board with every tile empty.
    #[inline]
    pub const fn empty() -> Self {
        Self { words: [0; 2] }
    }

    /// Standard layout: 12 black checkers on tiles 0..12, 12 white checkers on
    /// tiles 20..32.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    /// Empty board with the listed pieces placed.
    pub fn from_pieces(pieces: &[(TileIndex, TileState)]) -> Self {
        let mut board = Self::empty();
        for &(index, tile) in pieces {
            board.set(index, tile);
        }
        board
    }

    pub fn reset(&mut self) {
        self.words = [0; 2];
        for i in 0..PIECES_PER_SIDE {
            self.set(i, TileState::BLACK_CHECKER);
            self.set(TILE_COUNT - 1 - i, TileState::WHITE_CHECKER);
        }
    }

    /// Tile state at `index`.
    ///
    /// # Panics
    /// If `index` is not a playable tile index.
    #[inline]
    pub fn get(&self, index: TileIndex) -> TileState {
        assert!(index < TILE_COUNT, "tile index {index} out of range");
        let (word, shift) = Self::locate(index);
        TileState::from_packed(self.words[word] >> shift)
    }

    /// Overwrite the tile at `index`.
    ///
    /// # Panics
    /// If `index` is not a playable tile index.
    #[inline]
    pub fn set(&mut self, index: TileIndex, state: TileState) {
        assert!(index < TILE_COUNT, "tile index {index} out of range");
        let (word, shift) = Self::locate(index);
        self.words[word] &= !(TILE_MASK << shift);
        self.words[word] |= u64::from(state.code()) << shift;
    }

    #[inline]
    fn locate(index: TileIndex) -> (usize, usize) {
        (index / TILES_PER_WORD, (index % TILES_PER_WORD) * BITS_PER_TILE)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileIndex, TileState)> + '_ {
        (0..TILE_COUNT).map(move |index| (index, self.get(index)))
    }

    /// All tiles holding exactly `state`, in index order.
    pub fn find(&self, state: TileState) -> Vec<TileIndex> {
        self.iter()
            .filter(|(_, tile)| *tile == state)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn count(&self, state: TileState) -> usize {
        self.iter().filter(|(_, tile)| *tile == state).count()
    }

    /// Tiles holding a checker or king of `color`, in index order.
    pub fn pieces_of(&self, color: PieceColor) -> Vec<TileIndex> {
        self.iter()
            .filter(|(_, tile)| tile.belongs_to(color))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn count_color(&self, color: PieceColor) -> usize {
        self.iter().filter(|(_, tile)| tile.belongs_to(color)).count()
    }

    /// Unpromoted checkers of both colors.
    pub fn men_remaining(&self) -> usize {
        self.iter().filter(|(_, tile)| tile.is_checker()).count()
    }
}
