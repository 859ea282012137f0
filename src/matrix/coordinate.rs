// src/matrix/coordinate.rs

use std::fmt;

/// Composite `(row, col)` key for the entry map.
///
/// Ordering is row-major, so a `BTreeMap<Coordinate, _>` iterates entries
/// row by row and a single row can be pulled out with a range query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }

    /// First coordinate of `row`
    pub(crate) fn row_start(row: usize) -> Self {
        Coordinate { row, col: 0 }
    }

    /// Last possible coordinate of `row`
    pub(crate) fn row_end(row: usize) -> Self {
        Coordinate { row, col: usize::MAX }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
