//! The finished maze.
//!
//! A `Maze` is the end state of one generation run: the grid plus the
//! set of walls that were knocked out (the passages). It is immutable
//! after construction and is what renderers and solvers consume.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Cell, ConfigError, GeneratorConfig, Grid, MazeRng, Wall};
use crate::partition::DisjointSet;

use super::{BuildEvent, Generator};

/// A generated maze: a spanning tree of passages over the grid graph.
///
/// For any dimension >= 1 the passage set is connected, acyclic, and
/// exactly `dimension^2 - 1` walls large.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    grid: Grid,
    passages: FxHashSet<Wall>,
}

impl Maze {
    /// Generate a maze with a fresh shuffle from `rng`.
    #[must_use]
    pub fn generate(dimension: u32, rng: &mut MazeRng) -> Self {
        Self::from_events(dimension, Generator::new(dimension, rng))
    }

    /// Generate from a validated configuration.
    ///
    /// Rejects dimensions outside the supported range before any work
    /// happens; the seed comes from the config, so equal configs yield
    /// equal mazes.
    pub fn generate_with(config: &GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = MazeRng::new(config.seed);
        Ok(Self::generate(config.dimension, &mut rng))
    }

    /// Assemble a maze from an explicit passage set.
    ///
    /// Used by replay consumers that recorded a run's events. No
    /// spanning-tree requirement is imposed here; call
    /// [`Maze::is_spanning_tree`] to verify a hand-built set.
    #[must_use]
    pub fn with_passages(dimension: u32, passages: impl IntoIterator<Item = Wall>) -> Self {
        Self {
            grid: Grid::new(dimension),
            passages: passages.into_iter().collect(),
        }
    }

    fn from_events(dimension: u32, events: impl Iterator<Item = BuildEvent>) -> Self {
        let passages = events
            .filter_map(|event| match event {
                BuildEvent::RemoveWall(wall) => Some(wall),
                BuildEvent::Init { .. } => None,
            })
            .collect();
        Self {
            grid: Grid::new(dimension),
            passages,
        }
    }

    /// Side length of the maze.
    #[must_use]
    pub fn dimension(&self) -> u32 {
        self.grid.dimension()
    }

    /// The underlying grid.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Number of removed walls.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }

    /// Check whether a wall has been removed (is a passage).
    #[must_use]
    pub fn is_open(&self, wall: Wall) -> bool {
        self.passages.contains(&wall)
    }

    /// Iterate over the removed walls, in no particular order.
    pub fn passages(&self) -> impl Iterator<Item = Wall> + '_ {
        self.passages.iter().copied()
    }

    /// Cells reachable from `cell` in one step through open passages.
    #[must_use]
    pub fn open_neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        self.grid
            .neighbors(cell)
            .into_iter()
            .filter(|&n| self.is_open(Wall::between(cell, n)))
            .collect()
    }

    /// Verify the spanning-tree invariant from scratch.
    ///
    /// Re-runs the unions over a fresh partition: any passage that fails
    /// to merge indicates a cycle, and afterwards all cells must share
    /// one partition with exactly `cells - 1` passages. The empty grid
    /// is trivially valid with zero passages.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        let cells = self.grid.cell_count();
        if cells == 0 {
            return self.passages.is_empty();
        }
        if self.passages.len() != cells - 1 {
            return false;
        }

        let mut partition = DisjointSet::new(cells);
        for wall in &self.passages {
            let (a, b) = wall.endpoints();
            if !self.grid.contains(a) || !self.grid.contains(b) {
                return false;
            }
            if !partition.union(self.grid.index_of(a), self.grid.index_of(b)) {
                return false; // cycle
            }
        }
        partition.set_count() == 1
    }
}
