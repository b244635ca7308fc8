//! Value types shared by the configuration parser and the grid builder.

use std::fmt::{self, Display, Formatter};

/// Kind of content a single maze cell can hold.
///
/// This enumeration covers every cell state the generator knows about. Fixed and random
/// obstacles both render as walls; the grid keeps no record of how a wall was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CellKind {
    /// Free cell.
    ///
    /// This variant represents a cell that holds nothing and may still receive a placement.
    Empty,
    /// Obstacle cell.
    ///
    /// This variant represents a wall, whether it came from the fixed obstacle list or from
    /// random placement.
    Wall,
    /// Start marker.
    ///
    /// This variant represents the cell the consuming exercise begins from.
    Start,
    /// Goal marker.
    ///
    /// This variant represents the cell the consuming exercise must reach.
    Goal,
}

impl CellKind {
    /// Returns the character this cell kind renders as in the output map.
    ///
    /// This function provides the symbol used for one cell in the character map written to
    /// the output file: `0` for empty, `1` for walls, `I` for the start and `X` for the goal.
    pub(crate) const fn symbol(self) -> char {
        match self {
            Self::Empty => '0',
            Self::Wall => '1',
            Self::Start => 'I',
            Self::Goal => 'X',
        }
    }
}

/// One-based grid coordinate.
///
/// This structure holds a `(row, column)` pair as read from the configuration file. Building
/// a point implies no validity; whether it falls inside a given grid is checked at the point
/// of use, so out-of-range and even negative components survive parsing intact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Point {
    /// One-based row component.
    pub(crate) row: i32,
    /// One-based column component.
    pub(crate) col: i32,
}

impl Point {
    /// Builds a new point from its row and column components.
    pub(crate) const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl Display for Point {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "({},{})", self.row, self.col)
    }
}
