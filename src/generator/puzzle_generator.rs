//! Clue-removal puzzle generation (C6): starts from a full Hamiltonian path
//! and strips clues while a verification solve confirms the result stays
//! uniquely solvable.

use log::{debug, trace, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use super::params::{CluePattern, GenerationParams};
use super::path_generator::random_hampath;
use crate::model::Grid;
use crate::solver::{solve, Difficulty};

/// Caps recursive depth in practice (§4.6): a gap longer than this is
/// rejected by the solver's prefilter before recursion is even attempted.
pub const MAX_GAP_LENGTH: u16 = 9;

const RETRY_WARN_THRESHOLD: u32 = 200;

/// Generates a puzzle (a partially-filled grid) matching `params`.
///
/// Always produces a grid that `solve(..., unique_only = true)` can
/// complete, under the adjacency rule and difficulty in `params`.
pub fn generate_puzzle(params: &GenerationParams, rng: &mut impl Rng) -> Grid {
    match params.pattern {
        CluePattern::Ring => generate_with_restart(params, rng, try_ring),
        CluePattern::Border => generate_with_restart(params, rng, try_border),
        CluePattern::None | CluePattern::Rot2 => generate_by_removal(params, rng),
    }
}

/// RING and BORDER commit to a single clue layout per attempt; if the
/// verifier rejects it, the whole path is regenerated from scratch.
fn generate_with_restart(
    params: &GenerationParams,
    rng: &mut impl Rng,
    attempt: fn(&GenerationParams, &Grid) -> Option<Grid>,
) -> Grid {
    let mut retries: u32 = 0;
    loop {
        let path = random_hampath(params.width, params.height, params.diagonal, rng);
        let full = path.to_grid(params.width, params.height);
        if let Some(puzzle) = attempt(params, &full) {
            return puzzle;
        }
        retries += 1;
        debug!("puzzle_generator: retry {retries} after a failed verification");
        if retries % RETRY_WARN_THRESHOLD == 0 {
            warn!("puzzle_generator: {retries} consecutive retries, pattern may be too strict");
        }
    }
}

/// RING: only the rectangular ring one cell in from the border survives.
fn try_ring(params: &GenerationParams, full: &Grid) -> Option<Grid> {
    let mut puzzle = Grid::new(params.width, params.height);
    for (pos, value) in full.iter_cells() {
        if is_ring_cell(pos, params.width, params.height) {
            puzzle.set(pos, value);
        }
    }
    verify(&puzzle, params, Some(MAX_GAP_LENGTH), params.difficulty, Some(1_000))
}

fn is_ring_cell(pos: (usize, usize), width: usize, height: usize) -> bool {
    let (x, y) = pos;
    let d = x.min(width - 1 - x).min(y).min(height - 1 - y);
    d == 1
}

/// BORDER: only the outermost border cells with even `x + y` survive.
/// Difficulty is forced to HARD and the gap-length cap widened, since the
/// sparser border-only clue set routinely needs longer corridors.
fn try_border(params: &GenerationParams, full: &Grid) -> Option<Grid> {
    let mut puzzle = Grid::new(params.width, params.height);
    for (pos, value) in full.iter_cells() {
        if is_border_cell(pos, params.width, params.height) && (pos.0 + pos.1) % 2 == 0 {
            puzzle.set(pos, value);
        }
    }
    let max_gap = params.width.max(params.height) as u16
        + if params.difficulty == Difficulty::Hard { 4 } else { 0 };
    verify(&puzzle, params, Some(max_gap), Difficulty::Hard, Some(100))
}

fn is_border_cell(pos: (usize, usize), width: usize, height: usize) -> bool {
    let (x, y) = pos;
    x == 0 || y == 0 || x == width - 1 || y == height - 1
}

/// NONE / ROT2: shuffle the candidate cell positions and try removing each
/// in turn, restoring it if the puzzle stops being uniquely solvable.
/// There is no outer restart here: the untouched full grid is itself always
/// trivially and uniquely solvable, so one pass always has a valid result.
fn generate_by_removal(params: &GenerationParams, rng: &mut impl Rng) -> Grid {
    let path = random_hampath(params.width, params.height, params.diagonal, rng);
    let mut puzzle = path.to_grid(params.width, params.height);
    let area = params.area();

    let candidate_count = match params.pattern {
        CluePattern::Rot2 => area.div_ceil(2),
        _ => area,
    };
    let mut positions: Vec<usize> = (0..candidate_count).collect();
    positions.shuffle(rng);

    let step_budget = step_budget_for(params);

    for idx in positions {
        let pos = (idx % params.width, idx / params.width);
        let mirror = mirror_of(pos, params.width, params.height);

        let value = puzzle.get(pos);
        if value == 0 {
            continue;
        }
        let mirror_value = match params.pattern {
            CluePattern::Rot2 if mirror != pos => puzzle.get(mirror),
            _ => 0,
        };
        if params.keep_ends && is_end_value(value, area) {
            continue;
        }
        if params.keep_ends && params.pattern == CluePattern::Rot2 && is_end_value(mirror_value, area) {
            continue;
        }

        puzzle.set(pos, 0);
        if params.pattern == CluePattern::Rot2 && mirror != pos {
            puzzle.set(mirror, 0);
        }

        trace!("puzzle_generator: trying removal of clue {value} at {pos:?}");
        if verify(&puzzle, params, Some(MAX_GAP_LENGTH), params.difficulty, step_budget).is_none() {
            puzzle.set(pos, value);
            if params.pattern == CluePattern::Rot2 && mirror != pos {
                puzzle.set(mirror, mirror_value);
            }
        }
    }

    puzzle
}

fn mirror_of(pos: (usize, usize), width: usize, height: usize) -> (usize, usize) {
    (width - 1 - pos.0, height - 1 - pos.1)
}

/// With `keep_ends`, neither `1` nor `A` may be removed.
fn is_end_value(value: u16, area: usize) -> bool {
    value == 1 || value == area as u16
}

fn step_budget_for(params: &GenerationParams) -> Option<u32> {
    match (params.diagonal, params.pattern) {
        (true, CluePattern::Ring) => Some(1_000),
        (true, CluePattern::Border) => Some(100),
        (true, _) => Some(80_000),
        (false, CluePattern::None) => Some(300_000),
        (false, CluePattern::Rot2) => Some(800_000),
        (false, _) => None,
    }
}

fn verify(
    puzzle: &Grid,
    params: &GenerationParams,
    max_gap_length: Option<u16>,
    difficulty: Difficulty,
    step_limit: Option<u32>,
) -> Option<Grid> {
    solve(puzzle, params.diagonal, max_gap_length, difficulty, step_limit, true)
}
