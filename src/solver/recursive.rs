//! Backtracking search on top of the deductive fixpoint (C5), with
//! step-budget and uniqueness detection.

use log::trace;

use super::deductive::{advance_low_end, retreat_high_end, run_fixpoint, RuleOutcome};
use super::SolverState;
use crate::model::{Gap, Grid};

/// Drives one `solve` call's recursive search. Accumulates the first
/// solution found and, when `track_uniqueness` is set, keeps searching for
/// a second one.
pub struct Search {
    pub best: Option<Grid>,
    pub multiple: bool,
    pub aborted: bool,
    pub steps: u32,
    step_limit: Option<u32>,
    track_uniqueness: bool,
}

impl Search {
    pub fn new(track_uniqueness: bool, step_limit: Option<u32>) -> Self {
        Self { best: None, multiple: false, aborted: false, steps: 0, step_limit, track_uniqueness }
    }

    /// Runs the deductive fixpoint on `state`, then either records a
    /// solution, gives up on the step budget, or branches on the
    /// least-constrained remaining gap. Returns `true` once the search for
    /// this call can stop (solution recorded and uniqueness not tracked, a
    /// contradiction, or the step budget was exceeded).
    pub fn recurse(&mut self, mut state: SolverState) -> bool {
        self.steps += 1;
        if self.steps % 4096 == 0 {
            trace!("recursive solver: {} steps so far", self.steps);
        }
        if let Some(limit) = self.step_limit {
            if self.steps > limit {
                self.aborted = true;
                return true;
            }
        }

        if !run_fixpoint(&mut state) {
            return false;
        }

        if state.gaps.is_empty() {
            if self.best.is_none() {
                self.best = Some(state.grid);
                return !self.track_uniqueness;
            }
            self.multiple = true;
            return true;
        }

        let gap_idx = select_branch_gap(&state);
        let gap = state.gaps[gap_idx];
        let anchor = gap.l1.or(gap.l2).expect("a gap with no known endpoint cannot be branched on");
        let advancing = gap.l1.is_some();

        for neighbour in state.geometry.neighbours(anchor) {
            if !state.grid.is_empty_cell(neighbour) {
                continue;
            }
            let mut branch = state.clone();
            let outcome = if advancing {
                advance_low_end(&mut branch, gap_idx, neighbour)
            } else {
                retreat_high_end(&mut branch, gap_idx, neighbour)
            };
            if outcome != RuleOutcome::Unsolvable && self.recurse(branch) {
                return true;
            }
        }
        false
    }
}

/// Sorts a copy of the gap index list by adjacency distance between `l1`
/// and `l2` ascending (open-ended gaps last, since they constrain branching
/// the least), ties breaking on `n1` ascending, and returns the first index.
fn select_branch_gap(state: &SolverState) -> usize {
    let mut order: Vec<usize> = (0..state.gaps.len()).collect();
    order.sort_by_key(|&i| gap_sort_key(&state.gaps[i], state));
    order[0]
}

fn gap_sort_key(gap: &Gap, state: &SolverState) -> (bool, usize, u16) {
    match (gap.l1, gap.l2) {
        (Some(a), Some(b)) => (false, state.geometry.distance(a, b), gap.n1),
        _ => (true, usize::MAX, gap.n1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Grid;
    use crate::solver::{solve, Difficulty};

    fn grid_from(width: usize, height: usize, clues: &[((usize, usize), u16)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(pos, n) in clues {
            grid.set(pos, n);
        }
        grid
    }

    /// Scenario 3 (§8): a near-empty grid has many solutions, so unique_only must reject it.
    #[test]
    fn test_scenario_uniqueness_rejection() {
        let grid = grid_from(4, 4, &[((0, 0), 1)]);
        let result = solve(&grid, false, None, Difficulty::Hard, None, true);
        assert!(result.is_none());
    }

    /// Scenario 4 (§8): open-ended gap, 3x3 orthogonal.
    #[test]
    fn test_scenario_open_ended_gap_3x3() {
        let grid = grid_from(3, 3, &[((1, 1), 5), ((0, 0), 1)]);
        let result = solve(&grid, false, None, Difficulty::Hard, None, true);
        let solved = result.expect("puzzle should be solvable");
        assert_eq!(solved.get((1, 1)), 5);
        assert_eq!(solved.get((0, 0)), 1);
        let geo = crate::model::Geometry::new(3, 3, false);
        let path = crate::model::Path::from_grid(&solved).expect("solution must be complete");
        assert!(path.is_valid(&geo));
    }

    #[test]
    fn test_without_unique_only_returns_some_solution() {
        let grid = grid_from(4, 4, &[((0, 0), 1)]);
        let result = solve(&grid, false, None, Difficulty::Hard, None, false);
        assert!(result.is_some());
    }

    #[test]
    fn test_easy_difficulty_refuses_to_recurse() {
        // Needs backtracking beyond the deductive fixpoint; EASY must bail out.
        let grid = grid_from(4, 4, &[((0, 0), 1)]);
        let result = solve(&grid, false, None, Difficulty::Easy, None, false);
        assert!(result.is_none());
    }

    #[test]
    fn test_step_limit_aborts_search() {
        let grid = grid_from(5, 5, &[((0, 0), 1)]);
        let result = solve(&grid, false, None, Difficulty::Hard, Some(1), true);
        assert!(result.is_none());
    }

    #[test]
    fn test_aborted_search_does_not_report_a_found_solution_as_unique() {
        // If the step budget is exhausted after a first solution was already
        // recorded, the search has not actually proven uniqueness: `aborted`
        // must make `solve` return None rather than the stale `best`, even
        // though a solution is sitting right there in `search.best`.
        let grid = grid_from(4, 4, &[((0, 0), 1)]);
        let state = SolverState::new(grid.clone(), false);
        let mut search = Search::new(true, Some(0));
        search.best = Some(grid);
        let _ = search.recurse(state);
        assert!(search.aborted);

        let result = solve(&grid_from(4, 4, &[((0, 0), 1)]), false, None, Difficulty::Hard, Some(0), true);
        assert!(result.is_none());
    }
}
