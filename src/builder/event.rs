//! Events emitted during maze construction.
//!
//! The generator never draws, sleeps, or writes anywhere; everything it
//! has to say is one of these values. A renderer replaying the sequence
//! in order reproduces the construction animation exactly.

use serde::{Deserialize, Serialize};

use crate::core::Wall;

/// One step of maze construction, in generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildEvent {
    /// Announces the grid size. Always the first event of a run, emitted
    /// exactly once, before any wall is processed.
    Init {
        /// Side length of the grid being generated.
        dimension: u32,
    },

    /// A wall was knocked out because it joined two previously
    /// disconnected partitions. Emitted once per removed wall.
    RemoveWall(Wall),
}

impl std::fmt::Display for BuildEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Init { dimension } => write!(f, "Init({dimension})"),
            Self::RemoveWall(wall) => write!(f, "RemoveWall({wall})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", BuildEvent::Init { dimension: 9 }), "Init(9)");

        let wall = Wall::between(Cell::new(0, 0), Cell::new(0, 1));
        assert_eq!(
            format!("{}", BuildEvent::RemoveWall(wall)),
            "RemoveWall((0, 0)-(0, 1))"
        );
    }

    #[test]
    fn test_serialization() {
        let wall = Wall::between(Cell::new(1, 0), Cell::new(1, 1));
        let events = [BuildEvent::Init { dimension: 2 }, BuildEvent::RemoveWall(wall)];

        let json = serde_json::to_string(&events).unwrap();
        let deserialized: Vec<BuildEvent> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, events);
    }
}
