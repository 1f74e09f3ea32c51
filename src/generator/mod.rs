//! Random path generation and clue-removal puzzle generation (C2, C6).

pub mod params;
pub mod path_generator;
pub mod puzzle_generator;

pub use params::{CluePattern, GenerationParams};
pub use path_generator::random_hampath;
pub use puzzle_generator::generate_puzzle;
