//! Board coordinates for tic-tac-toe.
//!
//! A [`Position`] is a pair of a horizontal and a vertical coordinate.
//! Both halves are closed enumerations, so every position is one of
//! exactly nine values and dispatch happens on the variant tag.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use strum::EnumIter;

/// Horizontal coordinate (column).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, strum::Display,
)]
pub enum HorizPosition {
    /// Left column.
    Left,
    /// Middle column.
    HCenter,
    /// Right column.
    Right,
}

impl HorizPosition {
    fn index(self) -> usize {
        match self {
            HorizPosition::Left => 0,
            HorizPosition::HCenter => 1,
            HorizPosition::Right => 2,
        }
    }
}

/// Vertical coordinate (row).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, strum::Display,
)]
pub enum VertPosition {
    /// Top row.
    Top,
    /// Middle row.
    VCenter,
    /// Bottom row.
    Bottom,
}

impl VertPosition {
    fn index(self) -> usize {
        match self {
            VertPosition::Top => 0,
            VertPosition::VCenter => 1,
            VertPosition::Bottom => 2,
        }
    }
}

/// A cell on the board, keyed by column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    horiz: HorizPosition,
    vert: VertPosition,
}

impl Position {
    /// Top-left corner.
    pub const LEFT_TOP: Position = Position::new(HorizPosition::Left, VertPosition::Top);
    /// Top edge.
    pub const HCENTER_TOP: Position = Position::new(HorizPosition::HCenter, VertPosition::Top);
    /// Top-right corner.
    pub const RIGHT_TOP: Position = Position::new(HorizPosition::Right, VertPosition::Top);
    /// Left edge.
    pub const LEFT_VCENTER: Position = Position::new(HorizPosition::Left, VertPosition::VCenter);
    /// Center cell.
    pub const HCENTER_VCENTER: Position =
        Position::new(HorizPosition::HCenter, VertPosition::VCenter);
    /// Right edge.
    pub const RIGHT_VCENTER: Position = Position::new(HorizPosition::Right, VertPosition::VCenter);
    /// Bottom-left corner.
    pub const LEFT_BOTTOM: Position = Position::new(HorizPosition::Left, VertPosition::Bottom);
    /// Bottom edge.
    pub const HCENTER_BOTTOM: Position =
        Position::new(HorizPosition::HCenter, VertPosition::Bottom);
    /// Bottom-right corner.
    pub const RIGHT_BOTTOM: Position = Position::new(HorizPosition::Right, VertPosition::Bottom);

    /// All 9 positions in canonical order: left to right, top to bottom.
    pub const ALL: [Position; 9] = [
        Position::LEFT_TOP,
        Position::HCENTER_TOP,
        Position::RIGHT_TOP,
        Position::LEFT_VCENTER,
        Position::HCENTER_VCENTER,
        Position::RIGHT_VCENTER,
        Position::LEFT_BOTTOM,
        Position::HCENTER_BOTTOM,
        Position::RIGHT_BOTTOM,
    ];

    /// Creates a position from its coordinates.
    pub const fn new(horiz: HorizPosition, vert: VertPosition) -> Self {
        Self { horiz, vert }
    }

    /// Returns the horizontal coordinate.
    pub fn horiz(self) -> HorizPosition {
        self.horiz
    }

    /// Returns the vertical coordinate.
    pub fn vert(self) -> VertPosition {
        self.vert
    }

    /// Index into the canonical ordering (0-8).
    pub fn index(self) -> usize {
        self.vert.index() * 3 + self.horiz.index()
    }

    /// Creates a position from its canonical index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.horiz, self.vert)
    }
}

/// Input did not name any of the nine positions.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown position: {:?}", input)]
pub struct PositionParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Position {
    type Err = PositionParseError;

    /// Parses a position name such as `LeftTop` or `hcentervcenter`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|pos| pos.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| PositionParseError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    /// Every (horiz, vert) combination, column-major.
    fn grid() -> impl Iterator<Item = Position> {
        HorizPosition::iter()
            .flat_map(|horiz| VertPosition::iter().map(move |vert| Position::new(horiz, vert)))
    }

    #[test]
    fn test_all_is_canonical_order() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::from_index(i), Some(*pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_all_covers_grid() {
        let all: HashSet<_> = Position::ALL.iter().copied().collect();
        let grid: HashSet<_> = grid().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all, grid);
    }

    #[test]
    fn test_names() {
        assert_eq!(Position::LEFT_TOP.to_string(), "LeftTop");
        assert_eq!(Position::HCENTER_VCENTER.to_string(), "HCenterVCenter");
        assert_eq!(Position::RIGHT_BOTTOM.to_string(), "RightBottom");
    }

    #[test]
    fn test_parse_names() {
        for pos in Position::ALL {
            assert_eq!(pos.to_string().parse::<Position>(), Ok(pos));
        }
        assert_eq!("  leftvcenter ".parse::<Position>(), Ok(Position::LEFT_VCENTER));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "Middle".parse::<Position>().unwrap_err();
        assert_eq!(err.input, "Middle");
        assert!(err.to_string().contains("Middle"));
    }
}
