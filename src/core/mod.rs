//! Core grid types: cells, walls, the grid itself, RNG, configuration.
//!
//! These are the building blocks every other module consumes. None of
//! them knows anything about the generation algorithm or presentation.

pub mod cell;
pub mod wall;
pub mod grid;
pub mod rng;
pub mod config;

pub use cell::Cell;
pub use wall::Wall;
pub use grid::Grid;
pub use rng::{MazeRng, MazeRngState};
pub use config::{ConfigError, GeneratorConfig, MAX_DIMENSION, MIN_DIMENSION};
