//! Randomized Kruskal maze construction.
//!
//! `Generator` is a lazy iterator over `BuildEvent`s: it announces the
//! grid, then yields one wall removal per successful partition merge, in
//! processed order. `Maze` is the finished spanning tree those events
//! describe. Consumers that only want the result use `Maze::generate`;
//! consumers that want to animate drive the iterator themselves (or go
//! through [`crate::render::play`]).

pub mod event;
pub mod generator;
pub mod maze;

pub use event::BuildEvent;
pub use generator::Generator;
pub use maze::Maze;
