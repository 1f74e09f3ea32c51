//! Forced-move rules (C4): Rule A ("only move"), Rule B ("straight path"),
//! the blocked-number soundness check, and the fixpoint loop that drives them.

use super::SolverState;
use crate::model::geometry::Coord;

/// The outcome of applying one rule to one gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    Moved,
    DidntMove,
    Unsolvable,
}

/// Places `g.n1 + 1` at `loc`, the forced neighbour of `g.l1`.
///
/// Returns `Unsolvable` if placing it would make the gap's remaining span
/// too short to reach `g.l2` (when known), or if the blocked-number check
/// trips afterwards. Otherwise shrinks the gap (or removes it, if this
/// placement closed it) and returns `Moved`.
pub(crate) fn advance_low_end(state: &mut SolverState, idx: usize, loc: Coord) -> RuleOutcome {
    let gap = state.gaps[idx];
    let new_n = gap.n1 + 1;
    if let Some(l2) = gap.l2 {
        let remaining = gap.n2 - new_n;
        if state.geometry.distance(loc, l2) > remaining as usize {
            return RuleOutcome::Unsolvable;
        }
    }
    state.grid.set(loc, new_n);
    if check_blocked_number(state, loc) {
        return RuleOutcome::Unsolvable;
    }
    if new_n + 1 == gap.n2 {
        state.gaps.remove(idx);
    } else {
        state.gaps[idx].n1 = new_n;
        state.gaps[idx].l1 = Some(loc);
    }
    RuleOutcome::Moved
}

/// Symmetric to [`advance_low_end`]: places `g.n2 - 1` at `loc`, the forced
/// neighbour of `g.l2`.
pub(crate) fn retreat_high_end(state: &mut SolverState, idx: usize, loc: Coord) -> RuleOutcome {
    let gap = state.gaps[idx];
    let new_n = gap.n2 - 1;
    if let Some(l1) = gap.l1 {
        let remaining = new_n - gap.n1;
        if state.geometry.distance(loc, l1) > remaining as usize {
            return RuleOutcome::Unsolvable;
        }
    }
    state.grid.set(loc, new_n);
    if check_blocked_number(state, loc) {
        return RuleOutcome::Unsolvable;
    }
    if gap.n1 + 1 == new_n {
        state.gaps.remove(idx);
    } else {
        state.gaps[idx].n2 = new_n;
        state.gaps[idx].l2 = Some(loc);
    }
    RuleOutcome::Moved
}

/// Rule A ("only move"): if an endpoint of the gap at `idx` has exactly one
/// empty neighbour, that neighbour is the only place its adjacent number can
/// go, so it's placed immediately.
fn apply_rule_a(state: &mut SolverState, idx: usize) -> RuleOutcome {
    let gap = state.gaps[idx];
    if let Some(l1) = gap.l1 {
        let empties: Vec<Coord> =
            state.geometry.neighbours(l1).into_iter().filter(|&c| state.grid.is_empty_cell(c)).collect();
        if empties.len() == 1 {
            return advance_low_end(state, idx, empties[0]);
        }
    }
    let gap = state.gaps[idx];
    if let Some(l2) = gap.l2 {
        let empties: Vec<Coord> =
            state.geometry.neighbours(l2).into_iter().filter(|&c| state.grid.is_empty_cell(c)).collect();
        if empties.len() == 1 {
            return retreat_high_end(state, idx, empties[0]);
        }
    }
    RuleOutcome::DidntMove
}

/// Rule B ("straight path"): if the two known endpoints of a closed gap are
/// exactly `g.n2 - g.n1` apart along a straight line (orthogonal run, or a
/// diagonal in diagonal mode), the gap's interior is forced and filled in
/// one shot.
fn apply_rule_b(state: &mut SolverState, idx: usize) -> RuleOutcome {
    let gap = state.gaps[idx];
    let (l1, l2) = match (gap.l1, gap.l2) {
        (Some(a), Some(b)) => (a, b),
        _ => return RuleOutcome::DidntMove,
    };

    let span = gap.n2 - gap.n1;
    let dx = l2.0 as isize - l1.0 as isize;
    let dy = l2.1 as isize - l1.1 as isize;

    let is_straight = if state.geometry.diagonal() {
        dx.abs() == dy.abs() && dx.unsigned_abs() as u16 == span
    } else {
        (dx == 0 && dy.unsigned_abs() as u16 == span) || (dy == 0 && dx.unsigned_abs() as u16 == span)
    };
    if !is_straight {
        return RuleOutcome::DidntMove;
    }

    let step_x = dx.signum();
    let step_y = dy.signum();
    let mut n = gap.n1;
    for i in 1..span as isize {
        let pos = ((l1.0 as isize + step_x * i) as usize, (l1.1 as isize + step_y * i) as usize);
        if !state.grid.is_empty_cell(pos) {
            return RuleOutcome::Unsolvable;
        }
        n += 1;
        state.grid.set(pos, n);
        if check_blocked_number(state, pos) {
            return RuleOutcome::Unsolvable;
        }
    }
    state.gaps.remove(idx);
    RuleOutcome::Moved
}

/// Sound (but not complete) over-approximation of blockage: after placing a
/// number at `loc`, checks whether any neighbouring clue that still needs
/// both of its numeric neighbours placed (it is simultaneously the `l2` of
/// one gap and the `l1` of the next) has been left with fewer than two
/// neighbours that could plausibly extend its own sequence.
///
/// Returns `true` if a contradiction is detected. Never returns `true` for a
/// puzzle that is actually solvable (§9's soundness requirement) — it may
/// under-detect, never over-detect.
fn check_blocked_number(state: &SolverState, loc: Coord) -> bool {
    let area = state.grid.area() as u16;
    for c in state.geometry.neighbours(loc) {
        let n_c = state.grid.get(c);
        if n_c == 0 {
            continue;
        }
        let is_l2_of_some_gap = state.gaps.iter().any(|g| g.l2 == Some(c));
        if !is_l2_of_some_gap {
            continue;
        }
        let is_l1_of_another_gap = state.gaps.iter().any(|g| g.l1 == Some(c));
        let requires_two_connections = n_c > 1 && n_c < area && is_l1_of_another_gap;
        if !requires_two_connections {
            continue;
        }
        let count = state
            .geometry
            .neighbours(c)
            .into_iter()
            .filter(|&cn| {
                let v = state.grid.get(cn);
                v == 0 || v == n_c - 1 || v == n_c + 1
            })
            .count();
        if count < 2 {
            return true;
        }
    }
    false
}

/// Runs Rule B then Rule A on each gap in turn until a full pass makes no
/// change, or a rule reports `Unsolvable`.
///
/// On `Moved`, the same index is re-examined rather than advanced: a
/// placement can shrink or remove the gap at `idx`, and re-checking lands
/// either on the shrunk gap or, after removal, naturally on the next one.
/// The total count of missing numbers strictly decreases on every `Moved`,
/// so this always terminates.
pub fn run_fixpoint(state: &mut SolverState) -> bool {
    let mut idx = 0;
    loop {
        if idx >= state.gaps.len() {
            break;
        }
        let outcome = match apply_rule_b(state, idx) {
            RuleOutcome::DidntMove => apply_rule_a(state, idx),
            other => other,
        };
        match outcome {
            RuleOutcome::Unsolvable => return false,
            RuleOutcome::Moved => continue,
            RuleOutcome::DidntMove => idx += 1,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Grid;

    fn grid_from(width: usize, height: usize, clues: &[(Coord, u16)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(pos, n) in clues {
            grid.set(pos, n);
        }
        grid
    }

    /// Scenario 1 (§8): deductive solve, 4x4 orthogonal.
    #[test]
    fn test_scenario_deductive_solve_4x4() {
        let grid = grid_from(4, 4, &[((2, 0), 4), ((3, 0), 3), ((1, 2), 7), ((3, 2), 9)]);
        let mut state = SolverState::new(grid, false);
        assert!(run_fixpoint(&mut state));
        assert!(state.gaps.is_empty());
        let expected = [
            (0, 0, 16), (1, 0, 5), (2, 0, 4), (3, 0, 3),
            (0, 1, 15), (1, 1, 6), (2, 1, 1), (3, 1, 2),
            (0, 2, 14), (1, 2, 7), (2, 2, 8), (3, 2, 9),
            (0, 3, 13), (1, 3, 12), (2, 3, 11), (3, 3, 10),
        ];
        for (x, y, n) in expected {
            assert_eq!(state.grid.get((x, y)), n, "mismatch at ({x},{y})");
        }
    }

    /// Scenario 2 (§8): straight-path rule fills two gaps without recursion.
    #[test]
    fn test_scenario_straight_path_rule() {
        let grid = grid_from(
            4,
            4,
            &[((0, 0), 10), ((3, 0), 7), ((1, 1), 12), ((2, 2), 2), ((0, 2), 16), ((1, 3), 14)],
        );
        let mut state = SolverState::new(grid, false);
        assert!(run_fixpoint(&mut state));
        // 7 -> 10 corridor along row 0
        assert_eq!(state.grid.get((2, 0)), 8);
        assert_eq!(state.grid.get((1, 0)), 9);
        // 12 -> 14 corridor down column 1
        assert_eq!(state.grid.get((1, 2)), 13);
    }

    #[test]
    fn test_rule_a_only_move_fires_on_single_empty_neighbour() {
        // (0,0)=1's only empty neighbour is (1,0); its other neighbour,
        // (0,1), is already occupied by the gap's other endpoint.
        let grid = grid_from(3, 3, &[((0, 0), 1), ((0, 1), 9)]);
        let mut state = SolverState::new(grid, false);
        assert!(run_fixpoint(&mut state));
        assert_eq!(state.grid.get((1, 0)), 2);
    }

    #[test]
    fn test_unsolvable_blocked_number_detected() {
        // A clue placed where the sequence can't actually reach trips the
        // blocked-number check once its only neighbour is forced in.
        let grid = grid_from(6, 1, &[((0, 0), 1), ((2, 0), 4), ((5, 0), 6)]);
        let mut state = SolverState::new(grid, false);
        assert!(!run_fixpoint(&mut state));
    }

    #[test]
    fn test_bent_gap_forced_placement_is_not_falsely_unsolvable() {
        // The 4..7 gap bends around a corner rather than running straight,
        // so it's closed by repeated only-move placements rather than Rule
        // B. The reachability precheck must not reject a placement whose
        // distance to the opposite endpoint equals (not exceeds) the
        // number of slots left after it.
        let grid = grid_from(4, 4, &[((2, 0), 4), ((3, 0), 3), ((1, 2), 7), ((3, 2), 9)]);
        let mut state = SolverState::new(grid, false);
        assert!(run_fixpoint(&mut state));
        assert!(state.gaps.is_empty());
    }
}
