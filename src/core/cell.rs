//! Grid cell identification.
//!
//! Every position in the maze grid is a `Cell`, addressed by (row, column).
//!
//! ## Layout
//!
//! Cells are 0-indexed in both coordinates: for a grid of dimension `d`,
//! valid cells satisfy `0 <= row, col < d`. The row-major flat index
//! (`row * d + col`) is what the partition structure operates on.
//!
//! ## Usage
//!
//! ```
//! use kruskal_maze::core::Cell;
//!
//! let a = Cell::new(0, 0);
//! let b = Cell::new(0, 1);
//! let c = Cell::new(1, 1);
//!
//! assert!(a.is_adjacent(b));
//! assert!(!a.is_adjacent(c)); // diagonal, Manhattan distance 2
//!
//! // Row-major index in a 3x3 grid
//! assert_eq!(c.index(3), 4);
//! ```

use serde::{Deserialize, Serialize};

/// A single grid position, addressed by (row, column).
///
/// Immutable once created. Ordering is lexicographic (row first), which
/// gives walls a canonical endpoint order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    /// 0-indexed row.
    pub row: u32,
    /// 0-indexed column.
    pub col: u32,
}

impl Cell {
    /// Create a cell at (row, col).
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Check whether another cell is grid-adjacent.
    ///
    /// Two cells are adjacent iff their Manhattan distance is exactly 1,
    /// i.e. they differ by 1 in exactly one coordinate.
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Row-major flat index of this cell in a `dimension`-sized grid.
    ///
    /// Panics if the cell lies outside the grid; an out-of-range cell is
    /// a contract violation, not a recoverable condition.
    #[must_use]
    pub fn index(self, dimension: u32) -> usize {
        assert!(
            self.row < dimension && self.col < dimension,
            "cell {self} out of range for dimension {dimension}"
        );
        self.row as usize * dimension as usize + self.col as usize
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency() {
        let origin = Cell::new(1, 1);

        assert!(origin.is_adjacent(Cell::new(0, 1)));
        assert!(origin.is_adjacent(Cell::new(2, 1)));
        assert!(origin.is_adjacent(Cell::new(1, 0)));
        assert!(origin.is_adjacent(Cell::new(1, 2)));
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let a = Cell::new(3, 4);
        let b = Cell::new(3, 5);

        assert_eq!(a.is_adjacent(b), b.is_adjacent(a));
    }

    #[test]
    fn test_not_adjacent() {
        let origin = Cell::new(1, 1);

        assert!(!origin.is_adjacent(origin));
        assert!(!origin.is_adjacent(Cell::new(0, 0))); // diagonal
        assert!(!origin.is_adjacent(Cell::new(2, 2))); // diagonal
        assert!(!origin.is_adjacent(Cell::new(1, 3))); // distance 2
    }

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(Cell::new(0, 0).manhattan_distance(Cell::new(0, 0)), 0);
        assert_eq!(Cell::new(0, 0).manhattan_distance(Cell::new(2, 3)), 5);
        assert_eq!(Cell::new(2, 3).manhattan_distance(Cell::new(0, 0)), 5);
    }

    #[test]
    fn test_row_major_index() {
        assert_eq!(Cell::new(0, 0).index(4), 0);
        assert_eq!(Cell::new(0, 3).index(4), 3);
        assert_eq!(Cell::new(1, 0).index(4), 4);
        assert_eq!(Cell::new(3, 3).index(4), 15);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let _ = Cell::new(4, 0).index(4);
    }

    #[test]
    fn test_ordering_is_row_major() {
        assert!(Cell::new(0, 5) < Cell::new(1, 0));
        assert!(Cell::new(2, 1) < Cell::new(2, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Cell::new(3, 7)), "(3, 7)");
    }

    #[test]
    fn test_serialization() {
        let cell = Cell::new(5, 9);
        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, deserialized);
    }
}
