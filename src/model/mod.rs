//! Core data model: grid, geometry, path, gaps, and errors.

pub mod error;
pub mod gap;
pub mod geometry;
pub mod grid;
pub mod path;

pub use error::PuzzleError;
pub use gap::{compute_gaps, Gap};
pub use geometry::{Coord, Geometry};
pub use grid::Grid;
pub use path::{boustrophedon_path, Path};
