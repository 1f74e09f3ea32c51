//! # Hampath - Hamilton-Path Number Puzzle Engine
//!
//! A Rust implementation of the Hamilton-path number puzzle family (Hidato,
//! Hidoku, Numbrix): fill a grid with consecutive integers so that each
//! number sits adjacent to the next, given only a handful of starting
//! clues. This crate provides the generation and solving engine, not a UI.
//!
//! ## Architecture
//!
//! - **Model** ([`model`]): grid, geometry, Hamiltonian path, and the gap
//!   model that tracks runs of missing numbers between known clues.
//! - **Solver** ([`solver`]): a deductive forced-move solver (C4), with a
//!   recursive backtracking solver (C5) on top for puzzles the deductive
//!   rules alone can't close, plus uniqueness detection.
//! - **Generator** ([`generator`]): builds a random Hamiltonian path (C2)
//!   and removes clues from it (C6) while the solver confirms the result
//!   stays uniquely solvable.
//!
//! ## Quick Start
//!
//! ```rust
//! use hampath::{generate_puzzle, solve, CluePattern, Difficulty, GenerationParams};
//! use rand::rngs::ThreadRng;
//!
//! let params = GenerationParams::new(7, 7, false, CluePattern::Rot2, false, Difficulty::Easy)
//!     .expect("7x7 is within range");
//! let mut rng = rand::thread_rng();
//! let puzzle = generate_puzzle(&params, &mut rng);
//!
//! let solved = solve(&puzzle, false, None, Difficulty::Hard, None, true);
//! assert!(solved.is_some());
//! # let _: ThreadRng = rng;
//! ```

pub mod generator;
pub mod model;
pub mod solver;

pub use generator::{generate_puzzle, random_hampath, CluePattern, GenerationParams};
pub use model::{compute_gaps, Gap, Geometry, Grid, Path, PuzzleError};
pub use solver::{solve, Difficulty};
