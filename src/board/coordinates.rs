//! Index <-> (x, y) mapping for the playable tiles.
//!
//! Only dark tiles, where `x + y` is odd, are addressable. Index 0 is (1, 0),
//! index 1 is (3, 0), ... index 31 is (6, 7).

use crate::board::tile_state::{TileIndex, BOARD_SIZE, TILE_COUNT};

const TILES_PER_ROW: i32 = BOARD_SIZE / 2;

/// Column/row position on the full 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance between tile centers.
    #[inline]
    pub fn distance(self, other: Coordinate) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}

#[inline]
pub const fn is_valid_index(index: TileIndex) -> bool {
    index < TILE_COUNT
}

/// True for an on-board dark tile.
#[inline]
pub const fn is_dark_tile(x: i32, y: i32) -> bool {
    x >= 0 && x < BOARD_SIZE && y >= 0 && y < BOARD_SIZE && (x + y) % 2 != 0
}

pub fn coordinate_to_index(x: i32, y: i32) -> Option<TileIndex> {
    if !is_dark_tile(x, y) {
        return None;
    }
    usize::try_from(y * TILES_PER_ROW + x / 2).ok()
}

pub fn index_to_coordinate(index: TileIndex) -> Option<Coordinate> {
    if !is_valid_index(index) {
        return None;
    }
    let index = i32::try_from(index).ok()?;
    let y = index / TILES_PER_ROW;
    let x = 2 * (index % TILES_PER_ROW) + (y + 1) % 2;
    Some(Coordinate::new(x, y))
}

/// Tile jumped over when moving from `from` to `to`.
///
/// Defined only when both are valid tiles exactly two diagonal steps apart.
pub fn midpoint(from: TileIndex, to: TileIndex) -> Option<TileIndex> {
    let a = index_to_coordinate(from)?;
    let b = index_to_coordinate(to)?;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    if dx.abs() != 2 || dy.abs() != 2 {
        return None;
    }
    coordinate_to_index(a.x + dx / 2, a.y + dy / 2)
}
