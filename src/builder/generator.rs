//! The randomized Kruskal generation loop.
//!
//! ## Algorithm
//!
//! 1. Enumerate every wall of the grid and shuffle them uniformly.
//! 2. Start every cell in its own partition.
//! 3. Walk the shuffled walls; whenever a wall's two cells are in
//!    different partitions, merge them and emit the wall as removed.
//!
//! After the walk, exactly `dimension^2 - 1` walls have been removed and
//! a single partition remains: the removed walls form a spanning tree of
//! the grid graph.
//!
//! The generator is an `Iterator` over [`BuildEvent`]s. Nothing happens
//! between calls to `next`, so dropping the iterator mid-run is a clean
//! cancellation; the partition state is never left half-merged.
//!
//! ```
//! use kruskal_maze::builder::{BuildEvent, Generator};
//! use kruskal_maze::core::MazeRng;
//!
//! let mut rng = MazeRng::new(42);
//! let events: Vec<_> = Generator::new(4, &mut rng).collect();
//!
//! assert_eq!(events[0], BuildEvent::Init { dimension: 4 });
//! assert_eq!(events.len(), 1 + 15); // init plus 4*4 - 1 removals
//! ```

use crate::core::{Grid, MazeRng, Wall};
use crate::partition::DisjointSet;

use super::BuildEvent;

/// Lazy event stream for one maze construction run.
///
/// Owns its partition state and wall permutation exclusively; the RNG is
/// only borrowed during construction, where the permutation is fixed.
#[derive(Clone, Debug)]
pub struct Generator {
    grid: Grid,
    walls: std::vec::IntoIter<Wall>,
    partition: DisjointSet,
    removed: usize,
    announced: bool,
}

impl Generator {
    /// Start a run over a freshly shuffled wall order.
    #[must_use]
    pub fn new(dimension: u32, rng: &mut MazeRng) -> Self {
        let grid = Grid::new(dimension);
        let mut walls = grid.walls();
        rng.shuffle(&mut walls);
        Self::from_order(grid, walls)
    }

    /// Start a run over a caller-supplied wall order.
    ///
    /// Two runs fed the identical order produce identical event
    /// sequences, which is what replay and the determinism tests rely
    /// on. Every wall must belong to the grid.
    #[must_use]
    pub fn with_wall_order(dimension: u32, walls: Vec<Wall>) -> Self {
        let grid = Grid::new(dimension);
        debug_assert!(
            walls
                .iter()
                .all(|w| grid.contains(w.first()) && grid.contains(w.second())),
            "wall order contains cells outside the {dimension}x{dimension} grid"
        );
        Self::from_order(grid, walls)
    }

    fn from_order(grid: Grid, walls: Vec<Wall>) -> Self {
        Self {
            grid,
            walls: walls.into_iter(),
            partition: DisjointSet::new(grid.cell_count()),
            removed: 0,
            announced: false,
        }
    }

    /// Side length of the grid being generated.
    #[must_use]
    pub fn dimension(&self) -> u32 {
        self.grid.dimension()
    }

    /// Walls removed so far.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.removed
    }

    /// Partitions still disconnected. Reaches 1 when the maze is done
    /// (for dimension >= 1).
    #[must_use]
    pub fn partition_count(&self) -> usize {
        self.partition.set_count()
    }
}

impl Iterator for Generator {
    type Item = BuildEvent;

    fn next(&mut self) -> Option<BuildEvent> {
        if !self.announced {
            self.announced = true;
            return Some(BuildEvent::Init {
                dimension: self.grid.dimension(),
            });
        }

        for wall in self.walls.by_ref() {
            let (a, b) = wall.endpoints();
            if self.partition.union(self.grid.index_of(a), self.grid.index_of(b)) {
                self.removed += 1;
                return Some(BuildEvent::RemoveWall(wall));
            }
        }

        debug_assert!(
            self.grid.cell_count() == 0 || self.partition.set_count() == 1,
            "wall set exhausted with {} partitions left",
            self.partition.set_count()
        );
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending_init = usize::from(!self.announced);
        // Every remaining wall could at most produce one event.
        (pending_init, Some(pending_init + self.walls.len()))
    }
}
