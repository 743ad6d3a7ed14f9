//! Disjoint-set (union-find) over flat indices.
//!
//! ## Contract
//!
//! - `find(i)` returns the current representative of `i`'s partition and
//!   is stable until a `union` touching that partition occurs.
//! - `union(a, b)` returns `true` iff a merge happened; when the two
//!   elements are already connected it returns `false` and mutates
//!   nothing.
//!
//! Union is by size with a deterministic tie-break (the smaller root
//! index wins), which bounds tree depth at O(log n) and keeps `find`
//! a read-only walk. Out-of-range indices are contract violations and
//! panic.
//!
//! ```
//! use kruskal_maze::partition::DisjointSet;
//!
//! let mut sets = DisjointSet::new(4);
//! assert_eq!(sets.set_count(), 4);
//!
//! assert!(sets.union(0, 1));
//! assert!(!sets.union(1, 0)); // already connected
//! assert!(sets.same_set(0, 1));
//! assert_eq!(sets.set_count(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// A dynamic partition of `0..len` supporting find and merge.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisjointSet {
    parent: Vec<u32>,
    size: Vec<u32>,
    set_count: usize,
}

impl DisjointSet {
    /// Create `count` singleton partitions.
    #[must_use]
    pub fn new(count: usize) -> Self {
        assert!(count <= u32::MAX as usize, "partition count exceeds u32 range");
        Self {
            parent: (0..count as u32).collect(),
            size: vec![1; count],
            set_count: count,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True when there are no elements at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of distinct partitions remaining.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Representative of the partition containing `index`.
    ///
    /// Stable across calls until a `union` merges that partition away.
    #[must_use]
    pub fn find(&self, index: usize) -> usize {
        assert!(
            index < self.parent.len(),
            "index {index} out of range for {} elements",
            self.parent.len()
        );
        let mut current = index as u32;
        while self.parent[current as usize] != current {
            current = self.parent[current as usize];
        }
        current as usize
    }

    /// Check whether two elements share a partition.
    #[must_use]
    pub fn same_set(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merge the partitions containing `a` and `b`.
    ///
    /// Returns `true` if a merge occurred, `false` if the elements were
    /// already connected (in which case nothing is mutated). The larger
    /// partition's root wins; on equal sizes, the smaller root index.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        let (winner, loser) = match self.size[root_a].cmp(&self.size[root_b]) {
            std::cmp::Ordering::Greater => (root_a, root_b),
            std::cmp::Ordering::Less => (root_b, root_a),
            std::cmp::Ordering::Equal => {
                if root_a < root_b {
                    (root_a, root_b)
                } else {
                    (root_b, root_a)
                }
            }
        };

        self.parent[loser] = winner as u32;
        self.size[winner] += self.size[loser];
        self.set_count -= 1;
        true
    }
}
