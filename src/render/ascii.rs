//! Text rendering of mazes.
//!
//! Draws the border and every intact wall; open passages appear as gaps.
//! A 2x2 maze whose only intact internal wall sits between the bottom
//! two cells renders as:
//!
//! ```text
//! +--+--+
//! |     |
//! +  +  +
//! |  |  |
//! +--+--+
//! ```

use rustc_hash::FxHashSet;

use crate::builder::Maze;
use crate::core::{Cell, Wall};

use super::MazeView;

/// A [`MazeView`] that accumulates removals and renders ASCII art.
///
/// Can be fed incrementally through the view callbacks (rendering at any
/// point shows the maze mid-construction), or used one-shot via
/// [`AsciiRenderer::render_maze`].
#[derive(Clone, Debug, Default)]
pub struct AsciiRenderer {
    dimension: u32,
    open: FxHashSet<Wall>,
}

impl AsciiRenderer {
    /// Create a renderer with no grid yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the current state.
    #[must_use]
    pub fn render(&self) -> String {
        render_walls(self.dimension, &|wall| self.open.contains(&wall))
    }

    /// Render a finished maze.
    #[must_use]
    pub fn render_maze(maze: &Maze) -> String {
        render_walls(maze.dimension(), &|wall| maze.is_open(wall))
    }
}

impl MazeView for AsciiRenderer {
    fn init(&mut self, dimension: u32) {
        self.dimension = dimension;
        self.open.clear();
    }

    fn remove_wall(&mut self, wall: Wall) {
        let _ = self.open.insert(wall);
    }
}

/// Each cell is a 2-wide chamber; `is_open` decides which internal wall
/// segments are drawn. The outer border is always closed.
fn render_walls(dimension: u32, is_open: &dyn Fn(Wall) -> bool) -> String {
    if dimension == 0 {
        return String::new();
    }

    let d = dimension as usize;
    // 2d + 1 lines of 3d + 2 bytes (incl. newline)
    let mut out = String::with_capacity((2 * d + 1) * (3 * d + 2));

    for row in 0..dimension {
        out.push('+');
        for col in 0..dimension {
            let closed = row == 0
                || !is_open(Wall::between(Cell::new(row - 1, col), Cell::new(row, col)));
            out.push_str(if closed { "--+" } else { "  +" });
        }
        out.push('\n');

        for col in 0..dimension {
            let closed = col == 0
                || !is_open(Wall::between(Cell::new(row, col - 1), Cell::new(row, col)));
            out.push_str(if closed { "|  " } else { "   " });
        }
        out.push('|');
        out.push('\n');
    }

    out.push('+');
    for _ in 0..dimension {
        out.push_str("--+");
    }
    out.push('\n');
    out
}
