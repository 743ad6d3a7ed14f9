//! Property tests over the spanning-tree invariants.
//!
//! For arbitrary dimension/seed pairs the generated maze must always be
//! a spanning tree, and generation must be a pure function of its seed.

use proptest::prelude::*;

use kruskal_maze::builder::{BuildEvent, Generator, Maze};
use kruskal_maze::core::MazeRng;
use kruskal_maze::partition::DisjointSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Passage count is always cells - 1.
    #[test]
    fn prop_passage_count(dimension in 1u32..=24, seed in any::<u64>()) {
        let mut rng = MazeRng::new(seed);
        let maze = Maze::generate(dimension, &mut rng);

        prop_assert_eq!(maze.passage_count(), (dimension as usize).pow(2) - 1);
    }

    /// The passage set is connected and acyclic.
    #[test]
    fn prop_spanning_tree(dimension in 1u32..=24, seed in any::<u64>()) {
        let mut rng = MazeRng::new(seed);
        let maze = Maze::generate(dimension, &mut rng);

        prop_assert!(maze.is_spanning_tree());

        // Re-derive connectivity independently of the maze's own check.
        let grid = maze.grid();
        let mut partition = DisjointSet::new(grid.cell_count());
        for wall in maze.passages() {
            let (a, b) = wall.endpoints();
            prop_assert!(partition.union(grid.index_of(a), grid.index_of(b)));
        }
        prop_assert_eq!(partition.set_count(), 1);
    }

    /// Generation is a pure function of (dimension, seed).
    #[test]
    fn prop_same_seed_same_maze(dimension in 1u32..=16, seed in any::<u64>()) {
        let mut rng1 = MazeRng::new(seed);
        let mut rng2 = MazeRng::new(seed);

        prop_assert_eq!(
            Maze::generate(dimension, &mut rng1),
            Maze::generate(dimension, &mut rng2)
        );
    }

    /// The event stream always starts with Init and removes each wall
    /// at most once.
    #[test]
    fn prop_event_stream_well_formed(dimension in 0u32..=16, seed in any::<u64>()) {
        let mut rng = MazeRng::new(seed);
        let events: Vec<_> = Generator::new(dimension, &mut rng).collect();

        prop_assert_eq!(events[0], BuildEvent::Init { dimension });

        let mut seen = std::collections::HashSet::new();
        for event in &events[1..] {
            match event {
                BuildEvent::RemoveWall(wall) => prop_assert!(seen.insert(*wall)),
                BuildEvent::Init { .. } => prop_assert!(false, "duplicate Init"),
            }
        }
    }
}
