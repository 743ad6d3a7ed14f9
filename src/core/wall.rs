//! Walls between adjacent grid cells.
//!
//! A `Wall` is the removable edge between two grid-adjacent cells. The
//! endpoints are stored in canonical (lexicographic) order so that the
//! wall between A and B compares equal no matter which way it was built,
//! and wall sets never hold a duplicate for the symmetric pair.
//!
//! ## Usage
//!
//! ```
//! use kruskal_maze::core::{Cell, Wall};
//!
//! let a = Cell::new(1, 0);
//! let b = Cell::new(0, 0);
//!
//! // Construction order does not matter
//! assert_eq!(Wall::between(a, b), Wall::between(b, a));
//! ```

use serde::{Deserialize, Serialize};

use super::Cell;

/// The removable edge between two grid-adjacent cells.
///
/// Endpoints are canonically ordered: `first() < second()`. Constructing
/// a wall from non-adjacent cells is a contract violation and panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Wall {
    first: Cell,
    second: Cell,
}

impl Wall {
    /// Create the wall between two adjacent cells.
    ///
    /// The pair is unordered: `between(a, b)` and `between(b, a)` yield
    /// the same wall. Panics if the cells are not grid-adjacent; a bad
    /// endpoint pair would corrupt the spanning-tree guarantee, so it is
    /// never tolerated silently.
    #[must_use]
    pub fn between(a: Cell, b: Cell) -> Self {
        assert!(
            a.is_adjacent(b),
            "wall endpoints {a} and {b} are not grid-adjacent"
        );
        if a < b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    /// The lexicographically smaller endpoint.
    #[must_use]
    pub const fn first(self) -> Cell {
        self.first
    }

    /// The lexicographically larger endpoint.
    #[must_use]
    pub const fn second(self) -> Cell {
        self.second
    }

    /// Both endpoints, in canonical order.
    #[must_use]
    pub const fn endpoints(self) -> (Cell, Cell) {
        (self.first, self.second)
    }

    /// Check whether a cell is one of this wall's endpoints.
    #[must_use]
    pub fn touches(self, cell: Cell) -> bool {
        self.first == cell || self.second == cell
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
