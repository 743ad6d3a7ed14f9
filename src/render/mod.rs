//! Presentation adapters.
//!
//! The generation core never performs I/O; it talks to renderers through
//! the narrow [`MazeView`] trait (announce the grid, remove a wall).
//! What a view does with those callbacks — draw, record, ignore — is its
//! own business. [`AsciiRenderer`] is the concrete view shipped with the
//! crate; graphical frontends implement the same trait.

pub mod view;
pub mod ascii;

pub use view::{play, MazeView, NullView, RecordingView};
pub use ascii::AsciiRenderer;
