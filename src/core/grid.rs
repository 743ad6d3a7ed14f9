//! The square grid the maze is carved out of.
//!
//! `Grid` owns nothing but a dimension; it answers enumeration questions:
//! which cells exist, which walls separate adjacent cells, and who
//! neighbors whom. Wall enumeration is linear in the number of cells
//! (each cell contributes its right and down wall), so every adjacent
//! pair appears exactly once.
//!
//! ## Counts
//!
//! For a d x d grid there are d^2 cells and 2 * d * (d - 1) walls.
//! Dimension 0 and 1 are degenerate: no walls at all.
//!
//! ```
//! use kruskal_maze::core::Grid;
//!
//! let grid = Grid::new(3);
//! assert_eq!(grid.cell_count(), 9);
//! assert_eq!(grid.wall_count(), 12);
//! assert_eq!(grid.walls().len(), 12);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Cell, Wall};

/// A square grid of `dimension` x `dimension` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    dimension: u32,
}

impl Grid {
    /// Create a grid of the given dimension.
    ///
    /// Any dimension >= 0 is a valid grid; range policy (e.g. an
    /// interactive frontend's 7..=50 bounds) belongs to the caller.
    #[must_use]
    pub const fn new(dimension: u32) -> Self {
        Self { dimension }
    }

    /// Side length of the grid.
    #[must_use]
    pub const fn dimension(self) -> u32 {
        self.dimension
    }

    /// Total number of cells (dimension squared).
    #[must_use]
    pub const fn cell_count(self) -> usize {
        (self.dimension as usize) * (self.dimension as usize)
    }

    /// Total number of internal walls: 2 * d * (d - 1).
    #[must_use]
    pub const fn wall_count(self) -> usize {
        let d = self.dimension as usize;
        if d == 0 {
            0
        } else {
            2 * d * (d - 1)
        }
    }

    /// Check whether a cell lies inside the grid.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        cell.row < self.dimension && cell.col < self.dimension
    }

    /// Row-major flat index of a cell, for partition bookkeeping.
    #[must_use]
    pub fn index_of(self, cell: Cell) -> usize {
        cell.index(self.dimension)
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let d = self.dimension;
        (0..d).flat_map(move |row| (0..d).map(move |col| Cell::new(row, col)))
    }

    /// Enumerate every internal wall exactly once.
    ///
    /// Each cell contributes the wall to its right neighbor and the wall
    /// to the neighbor below, so the symmetric pair is never duplicated.
    #[must_use]
    pub fn walls(self) -> Vec<Wall> {
        let mut walls = Vec::with_capacity(self.wall_count());
        for cell in self.cells() {
            if cell.col + 1 < self.dimension {
                walls.push(Wall::between(cell, Cell::new(cell.row, cell.col + 1)));
            }
            if cell.row + 1 < self.dimension {
                walls.push(Wall::between(cell, Cell::new(cell.row + 1, cell.col)));
            }
        }
        walls
    }

    /// Grid-adjacent neighbors of a cell, at most four.
    #[must_use]
    pub fn neighbors(self, cell: Cell) -> SmallVec<[Cell; 4]> {
        let mut out = SmallVec::new();
        if !self.contains(cell) {
            return out;
        }
        if cell.row > 0 {
            out.push(Cell::new(cell.row - 1, cell.col));
        }
        if cell.col > 0 {
            out.push(Cell::new(cell.row, cell.col - 1));
        }
        if cell.col + 1 < self.dimension {
            out.push(Cell::new(cell.row, cell.col + 1));
        }
        if cell.row + 1 < self.dimension {
            out.push(Cell::new(cell.row + 1, cell.col));
        }
        out
    }
}
