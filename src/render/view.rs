//! The view trait the generator reports progress through.

use crate::builder::{BuildEvent, Generator, Maze};
use crate::core::Wall;

/// Receiver for maze construction progress.
///
/// Implementations decide what "showing" a step means; the generator
/// guarantees `init` arrives exactly once, before any `remove_wall`,
/// and that removals arrive in generation order.
pub trait MazeView {
    /// Announce the grid size before any wall is processed.
    fn init(&mut self, dimension: u32);

    /// A wall was removed; update the display.
    fn remove_wall(&mut self, wall: Wall);
}

/// A view that ignores everything. Useful when only the final maze
/// matters but an API requires a view.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullView;

impl MazeView for NullView {
    fn init(&mut self, _dimension: u32) {}

    fn remove_wall(&mut self, _wall: Wall) {}
}

/// A view that records every event, for tests and replay capture.
#[derive(Clone, Debug, Default)]
pub struct RecordingView {
    /// Events in arrival order.
    pub events: Vec<BuildEvent>,
}

impl RecordingView {
    /// Create an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl MazeView for RecordingView {
    fn init(&mut self, dimension: u32) {
        self.events.push(BuildEvent::Init { dimension });
    }

    fn remove_wall(&mut self, wall: Wall) {
        self.events.push(BuildEvent::RemoveWall(wall));
    }
}

/// Drive a generator to completion against a view, returning the
/// finished maze.
///
/// Each event is forwarded before the next wall is processed, so a view
/// that draws sees the construction in animation order.
pub fn play<V: MazeView>(generator: Generator, view: &mut V) -> Maze {
    let dimension = generator.dimension();
    let mut passages = Vec::new();

    for event in generator {
        match event {
            BuildEvent::Init { dimension } => view.init(dimension),
            BuildEvent::RemoveWall(wall) => {
                view.remove_wall(wall);
                passages.push(wall);
            }
        }
    }

    Maze::with_passages(dimension, passages)
}
