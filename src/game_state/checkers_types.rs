//! Move and result types produced by the rules engine.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::tile_state::TileIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Skip,
}

/// A single step or skip between two playable tiles.
///
/// Equality and hashing only look at the endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: TileIndex,
    pub end: TileIndex,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(start: TileIndex, end: TileIndex, kind: MoveKind) -> Self {
        Self { start, end, kind }
    }

    #[inline]
    pub const fn normal(start: TileIndex, end: TileIndex) -> Self {
        Self::new(start, end, MoveKind::Normal)
    }

    #[inline]
    pub const fn skip(start: TileIndex, end: TileIndex) -> Self {
        Self::new(start, end, MoveKind::Skip)
    }

    #[inline]
    pub fn is_skip(&self) -> bool {
        self.kind == MoveKind::Skip
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = match self.kind {
            MoveKind::Normal => '-',
            MoveKind::Skip => 'x',
        };
        write!(f, "{}{}{}", self.start, sep, self.end)
    }
}

/// Outcome of a game. `Unknown` while undecided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    P1Win,
    P2Win,
    Draw,
    Unknown,
}

impl MatchResult {
    #[inline]
    pub const fn is_decided(self) -> bool {
        !matches!(self, MatchResult::Unknown)
    }

    /// Win for the given side.
    #[inline]
    pub const fn win_for(is_p1: bool) -> Self {
        if is_p1 {
            MatchResult::P1Win
        } else {
            MatchResult::P2Win
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchResult::P1Win => "P1 WIN",
            MatchResult::P2Win => "P2 WIN",
            MatchResult::Draw => "DRAW",
            MatchResult::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{MatchResult, Move};

    #[test]
    fn equality_ignores_move_kind() {
        assert_eq!(Move::normal(8, 12), Move::skip(8, 12));
        assert_ne!(Move::normal(8, 12), Move::normal(8, 13));

        let mut set = HashSet::new();
        set.insert(Move::normal(8, 12));
        assert!(set.contains(&Move::skip(8, 12)));
    }

    #[test]
    fn display_marks_skips() {
        assert_eq!(Move::normal(8, 12).to_string(), "8-12");
        assert_eq!(Move::skip(9, 18).to_string(), "9x18");
        assert_eq!(MatchResult::win_for(false).to_string(), "P2 WIN");
    }
}
