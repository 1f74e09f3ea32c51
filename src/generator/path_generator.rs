//! Random Hamiltonian path generation (C2): a boustrophedon start path,
//! agitated by repeated backbite shuffles.

use rand::Rng;

use crate::model::{boustrophedon_path, Geometry, Path};

/// Tuning constant from §4.2: the shuffle budget is `SHUFFLE_MULTIPLIER * 2 * A`.
pub const SHUFFLE_MULTIPLIER: usize = 5;

/// Builds a random Hamiltonian path on a `width x height` grid.
///
/// Starts from the boustrophedon path and applies `2 * SHUFFLE_MULTIPLIER *
/// area` backbite shuffles, reversing the whole path once at the halfway
/// point so both ends get agitated (§4.2 "balanced shuffling").
pub fn random_hampath(width: usize, height: usize, diagonal: bool, rng: &mut impl Rng) -> Path {
    let geometry = Geometry::new(width, height, diagonal);
    let mut path = boustrophedon_path(width, height).locations().to_vec();
    let budget = 2 * SHUFFLE_MULTIPLIER * width * height;

    for i in 0..budget {
        if i == budget / 2 {
            path.reverse();
        }
        backbite(&mut path, &geometry, rng);
    }

    Path::new(path)
}

/// One backbite move: picks a random neighbour of `path[0]` other than
/// `path[1]`, finds it at index `j` in the path, and reverses `path[0..j]`.
/// Leaves the path unchanged if `path[0]` has no such neighbour.
fn backbite(path: &mut Vec<(usize, usize)>, geometry: &Geometry, rng: &mut impl Rng) {
    let head = path[0];
    let second = path[1];
    let candidates = geometry.neighbours_except(head, second);
    if candidates.is_empty() {
        return;
    }
    let q = candidates[rng.gen_range(0..candidates.len())];
    let j = path.iter().position(|&p| p == q).expect("neighbour of the head is always on the path");
    path[0..j].reverse();
}
