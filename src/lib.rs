//! # kruskal-maze
//!
//! Randomized maze generation via Kruskal's algorithm over a grid graph.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness flows through a seeded,
//!    crate-owned RNG. Same seed, same maze, bit for bit.
//!
//! 2. **Events Over I/O**: The generator emits a lazy sequence of
//!    [`BuildEvent`]s instead of drawing anything; renderers consume
//!    the stream through the [`MazeView`] trait. The core has no I/O
//!    or timing dependency and is independently testable.
//!
//! 3. **Fail Fast On Contract Violations**: Invalid walls or indices
//!    panic; silent tolerance would corrupt the spanning-tree
//!    guarantee. The only recoverable error is config validation.
//!
//! ## Algorithm
//!
//! Every cell starts in its own partition. The walls between adjacent
//! cells are shuffled uniformly and processed once each: a wall whose
//! cells lie in different partitions is removed and the partitions
//! merge; a wall whose cells are already connected stays. The removed
//! walls form a uniform-cost spanning tree: connected, acyclic, exactly
//! `dimension^2 - 1` passages.
//!
//! ```
//! use kruskal_maze::{Maze, MazeRng};
//!
//! let mut rng = MazeRng::new(42);
//! let maze = Maze::generate(10, &mut rng);
//!
//! assert_eq!(maze.passage_count(), 99);
//! assert!(maze.is_spanning_tree());
//! ```
//!
//! ## Modules
//!
//! - `core`: Cells, walls, the grid, RNG, run configuration
//! - `partition`: Disjoint-set connectivity tracking
//! - `builder`: The Kruskal generator, its events, the finished maze
//! - `render`: The view seam and the ASCII renderer

pub mod core;
pub mod partition;
pub mod builder;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    Cell, Wall, Grid,
    MazeRng, MazeRngState,
    GeneratorConfig, ConfigError, MIN_DIMENSION, MAX_DIMENSION,
};

pub use crate::partition::DisjointSet;

pub use crate::builder::{BuildEvent, Generator, Maze};

pub use crate::render::{play, AsciiRenderer, MazeView, NullView, RecordingView};
