//! The deductive and recursive solvers (C4/C5), and the public `solve` entry
//! point (§6).

pub mod deductive;
pub mod recursive;

use crate::model::{compute_gaps, Gap, Geometry, Grid};

/// The two difficulty tiers a generated puzzle can target: `Easy` disables
/// recursive backtracking during verification, `Hard` allows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Hard,
}

/// Everything the solver needs for one solve attempt: the grid being filled
/// in, its gap list, and the geometry rules governing adjacency.
///
/// Cloned wholesale on every speculative recursive branch (§9 "Recursion by
/// state clone") — kept small and `Clone`-derived rather than holding
/// references into a parent state.
#[derive(Debug, Clone)]
pub struct SolverState {
    pub geometry: Geometry,
    pub grid: Grid,
    pub gaps: Vec<Gap>,
}

impl SolverState {
    pub fn new(grid: Grid, diagonal: bool) -> Self {
        let geometry = Geometry::new(grid.width(), grid.height(), diagonal);
        let (gaps, _) = compute_gaps(&grid);
        Self { geometry, grid, gaps }
    }

    /// The longest gap currently on the state, or 0 if there are none.
    pub fn longest_gap(&self) -> u16 {
        self.gaps.iter().map(Gap::missing_count).max().unwrap_or(0)
    }
}

/// Solves `grid` under the given adjacency rule and constraints.
///
/// - `max_gap_length`: if set, a grid whose longest gap exceeds this is
///   rejected up front without attempting recursion (a cheap prefilter).
/// - `max_difficulty`: `Easy` disables recursive backtracking; the deductive
///   fixpoint alone must close every gap.
/// - `step_limit`: caps the recursive solver's step counter; exceeding it is
///   treated as "cannot prove unique", same as finding a second solution.
/// - `unique_only`: when true, a second solution anywhere in the search tree
///   causes `solve` to return `None`.
pub fn solve(
    grid: &Grid,
    diagonal: bool,
    max_gap_length: Option<u16>,
    max_difficulty: Difficulty,
    step_limit: Option<u32>,
    unique_only: bool,
) -> Option<Grid> {
    let state = SolverState::new(grid.clone(), diagonal);

    if let Some(max) = max_gap_length {
        if state.longest_gap() > max {
            return None;
        }
    }

    let mut state = state;
    if !deductive::run_fixpoint(&mut state) {
        return None;
    }

    if state.gaps.is_empty() {
        return Some(state.grid);
    }

    if max_difficulty == Difficulty::Easy {
        return None;
    }

    let mut search = recursive::Search::new(unique_only, step_limit);
    let _ = search.recurse(state);
    if search.multiple || search.aborted {
        None
    } else {
        search.best
    }
}
