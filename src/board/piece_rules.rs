//! Per-piece move and capture derivation.
//!
//! Kings step in all four diagonal directions, checkers only toward the
//! opponent's side. A skip jumps an adjacent enemy onto the empty tile beyond
//! it; a checker may never capture a king.

use crate::board::board::Board;
use crate::board::coordinates::{coordinate_to_index, index_to_coordinate, midpoint};
use crate::board::tile_state::{TileIndex, TileState};

/// Diagonal endpoints `delta` steps away that `tile` could reach from `index`,
/// ignoring occupancy.
fn candidate_targets(index: TileIndex, tile: TileState, delta: i32) -> Vec<TileIndex> {
    let mut targets = Vec::with_capacity(4);
    let Some(origin) = index_to_coordinate(index) else {
        return targets;
    };

    let row_steps: &[i32] = match tile {
        TileState::Empty => &[],
        TileState::King(_) => &[1, -1],
        TileState::Checker(color) => match color.forward_dy() {
            1 => &[1],
            _ => &[-1],
        },
    };

    for &dy in row_steps {
        for dx in [1, -1] {
            let end = origin.offset(dx * delta, dy * delta);
            if let Some(end_index) = coordinate_to_index(end.x, end.y) {
                targets.push(end_index);
            }
        }
    }
    targets
}

impl Board {
    /// Empty single-step destinations for the piece at `index`.
    pub fn piece_moves(&self, index: TileIndex) -> Vec<TileIndex> {
        let tile = self.get(index);
        let mut ends = candidate_targets(index, tile, 1);
        ends.retain(|&end| self.get(end) == TileState::EMPTY);
        ends
    }

    /// Legal skip destinations for the piece at `index`.
    pub fn piece_skips(&self, index: TileIndex) -> Vec<TileIndex> {
        let tile = self.get(index);
        let mut ends = candidate_targets(index, tile, 2);
        ends.retain(|&end| self.is_valid_skip(index, end));
        ends
    }

    /// Capture legality of a jump from `start` to `end`.
    ///
    /// Direction is not checked here; `piece_skips` only offers directions the
    /// piece may move in.
    pub fn is_valid_skip(&self, start: TileIndex, end: TileIndex) -> bool {
        let Some(middle) = midpoint(start, end) else {
            return false;
        };
        if self.get(end) != TileState::EMPTY {
            return false;
        }

        let mover = self.get(start);
        let captured = self.get(middle);
        if !mover.is_enemy_of(captured) {
            return false;
        }

        !(mover.is_checker() && captured.is_king())
    }

    /// True when no enemy piece can skip the piece on `tile` next turn.
    ///
    /// Empty tiles are trivially safe.
    pub fn is_safe(&self, tile: TileIndex) -> bool {
        let target = self.get(tile);
        if !target.is_occupied() {
            return true;
        }
        let Some(center) = index_to_coordinate(tile) else {
            return true;
        };

        for (dx, dy) in [(1, 1), (-1, 1), (1, -1), (-1, -1)] {
            let attacker_at = center.offset(dx, dy);
            let Some(attacker) = coordinate_to_index(attacker_at.x, attacker_at.y) else {
                continue;
            };
            if !self.get(attacker).is_enemy_of(target) {
                continue;
            }
            let landing_at = center.offset(-dx, -dy);
            let Some(landing) = coordinate_to_index(landing_at.x, landing_at.y) else {
                continue;
            };
            if self.piece_skips(attacker).contains(&landing) {
                return false;
            }
        }
        true
    }
}
