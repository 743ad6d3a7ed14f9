//! Connectivity tracking over grid cells.
//!
//! The generator needs exactly two questions answered while it processes
//! walls: "are these two cells already connected?" and "merge their
//! partitions". `DisjointSet` answers both over row-major cell indices.

mod set;

pub use set::DisjointSet;
