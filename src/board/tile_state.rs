//! Tile-state vocabulary shared by the board, rules engine and evaluators.
//!
//! Every playable tile holds exactly one `TileState`. The packed board stores
//! each state as a 3-bit code: bit0 = king flag, bit1 = color (1 = black),
//! bit2 = occupied.

/// Index of a playable (dark) tile, `0..TILE_COUNT`.
pub type TileIndex = usize;

/// Number of playable tiles on an 8x8 board.
pub const TILE_COUNT: usize = 32;

/// Board edge length in tiles.
pub const BOARD_SIZE: i32 = 8;

/// Pieces per side in the starting layout.
pub const PIECES_PER_SIDE: usize = 12;

/// Side owning a piece. Black is player 1 and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Black,
    White,
}

impl PieceColor {
    #[inline]
    pub const fn from_p1(is_p1: bool) -> Self {
        if is_p1 {
            PieceColor::Black
        } else {
            PieceColor::White
        }
    }

    #[inline]
    pub const fn is_p1(self) -> bool {
        matches!(self, PieceColor::Black)
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PieceColor::Black => PieceColor::White,
            PieceColor::White => PieceColor::Black,
        }
    }

    /// Row delta of a forward step for an unpromoted checker.
    #[inline]
    pub const fn forward_dy(self) -> i32 {
        match self {
            PieceColor::Black => 1,
            PieceColor::White => -1,
        }
    }

    /// Row on which a checker of this color is promoted.
    #[inline]
    pub const fn promotion_row(self) -> i32 {
        match self {
            PieceColor::Black => BOARD_SIZE - 1,
            PieceColor::White => 0,
        }
    }
}

/// Content of a single playable tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    #[default]
    Empty,
    Checker(PieceColor),
    King(PieceColor),
}

const OCCUPIED_BIT: u8 = 0b100;
const BLACK_BIT: u8 = 0b010;
const KING_BIT: u8 = 0b001;

impl TileState {
    pub const EMPTY: TileState = TileState::Empty;
    pub const WHITE_CHECKER: TileState = TileState::Checker(PieceColor::White);
    pub const WHITE_KING: TileState = TileState::King(PieceColor::White);
    pub const BLACK_CHECKER: TileState = TileState::Checker(PieceColor::Black);
    pub const BLACK_KING: TileState = TileState::King(PieceColor::Black);

    /// All five valid tile states.
    pub const ALL: [TileState; 5] = [
        TileState::EMPTY,
        TileState::WHITE_CHECKER,
        TileState::WHITE_KING,
        TileState::BLACK_CHECKER,
        TileState::BLACK_KING,
    ];

    /// 3-bit packed code of this state.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            TileState::Empty => 0,
            TileState::Checker(color) => OCCUPIED_BIT | color_bit(color),
            TileState::King(color) => OCCUPIED_BIT | color_bit(color) | KING_BIT,
        }
    }

    /// Strict decoding: only the five valid codes map to a state.
    #[inline]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TileState::EMPTY),
            4 => Some(TileState::WHITE_CHECKER),
            5 => Some(TileState::WHITE_KING),
            6 => Some(TileState::BLACK_CHECKER),
            7 => Some(TileState::BLACK_KING),
            _ => None,
        }
    }

    /// Total decoding of a packed 3-bit field. Codes without the occupied bit
    /// are empty.
    #[inline]
    pub(crate) const fn from_packed(bits: u64) -> Self {
        let bits = (bits & 0b111) as u8;
        if bits & OCCUPIED_BIT == 0 {
            return TileState::Empty;
        }
        let color = if bits & BLACK_BIT != 0 {
            PieceColor::Black
        } else {
            PieceColor::White
        };
        if bits & KING_BIT != 0 {
            TileState::King(color)
        } else {
            TileState::Checker(color)
        }
    }

    #[inline]
    pub const fn color(self) -> Option<PieceColor> {
        match self {
            TileState::Empty => None,
            TileState::Checker(color) | TileState::King(color) => Some(color),
        }
    }

    #[inline]
    pub const fn is_occupied(self) -> bool {
        !matches!(self, TileState::Empty)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, TileState::King(_))
    }

    #[inline]
    pub const fn is_checker(self) -> bool {
        matches!(self, TileState::Checker(_))
    }

    #[inline]
    pub fn belongs_to(self, color: PieceColor) -> bool {
        self.color() == Some(color)
    }

    /// True when both tiles hold pieces of different colors.
    #[inline]
    pub fn is_enemy_of(self, other: TileState) -> bool {
        match (self.color(), other.color()) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }
}

#[inline]
const fn color_bit(color: PieceColor) -> u8 {
    match color {
        PieceColor::Black => BLACK_BIT,
        PieceColor::White => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{PieceColor, TileState};

    #[test]
    fn codes_follow_three_bit_layout() {
        assert_eq!(TileState::EMPTY.code(), 0);
        assert_eq!(TileState::WHITE_CHECKER.code(), 4);
        assert_eq!(TileState::WHITE_KING.code(), 5);
        assert_eq!(TileState::BLACK_CHECKER.code(), 6);
        assert_eq!(TileState::BLACK_KING.code(), 7);
    }

    #[test]
    fn strict_decoding_rejects_unused_codes() {
        for code in [1u8, 2, 3, 8, 9] {
            assert_eq!(TileState::from_code(code), None, "code {code}");
        }
        for state in TileState::ALL {
            assert_eq!(TileState::from_code(state.code()), Some(state));
        }
    }

    #[test]
    fn enemy_relation_ignores_empty_tiles() {
        assert!(TileState::BLACK_KING.is_enemy_of(TileState::WHITE_CHECKER));
        assert!(!TileState::BLACK_KING.is_enemy_of(TileState::BLACK_CHECKER));
        assert!(!TileState::EMPTY.is_enemy_of(TileState::WHITE_KING));
        assert_eq!(PieceColor::from_p1(true), PieceColor::Black);
        assert_eq!(PieceColor::White.opposite(), PieceColor::Black);
    }
}
