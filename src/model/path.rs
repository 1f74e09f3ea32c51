//! A Hamiltonian path: an ordered sequence of distinct, pairwise-adjacent
//! locations covering every cell of a grid exactly once.

use super::geometry::{Coord, Geometry};
use super::grid::Grid;

/// An ordered sequence of locations. `Path::to_grid` renders it as a numbered
/// grid; `Path::from_grid` is its inverse, reading the numbers back off a
/// fully-solved grid in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    locations: Vec<Coord>,
}

impl Path {
    pub fn new(locations: Vec<Coord>) -> Self {
        Self { locations }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn locations(&self) -> &[Coord] {
        &self.locations
    }

    /// True iff every location is distinct, consecutive locations are
    /// neighbours under `geometry`, and the path covers the grid exactly.
    pub fn is_valid(&self, geometry: &Geometry) -> bool {
        let area = geometry.width() * geometry.height();
        if self.locations.len() != area {
            return false;
        }
        let mut seen = vec![false; area];
        for &(x, y) in &self.locations {
            if x >= geometry.width() || y >= geometry.height() {
                return false;
            }
            let idx = y * geometry.width() + x;
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
        }
        self.locations.windows(2).all(|w| geometry.are_neighbours(w[0], w[1]))
    }

    /// Renders the path as a grid where `path[i]` holds the number `i + 1`.
    pub fn to_grid(&self, width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height);
        for (i, &pos) in self.locations.iter().enumerate() {
            grid.set(pos, (i + 1) as u16);
        }
        grid
    }

    /// Reads a fully-numbered grid back into a path, ordering locations by
    /// their number. Returns `None` if the grid is not a complete 1..=area
    /// permutation (i.e. it isn't a finished solution).
    pub fn from_grid(grid: &Grid) -> Option<Path> {
        let area = grid.area() as u16;
        let mut locations = Vec::with_capacity(area as usize);
        for number in 1..=area {
            locations.push(grid.location_of(number)?);
        }
        Some(Path::new(locations))
    }
}

/// Builds the boustrophedon (zig-zag) starting path: row 0 left-to-right,
/// row 1 right-to-left, and so on.
pub fn boustrophedon_path(width: usize, height: usize) -> Path {
    let mut locations = Vec::with_capacity(width * height);
    for y in 0..height {
        if y % 2 == 0 {
            for x in 0..width {
                locations.push((x, y));
            }
        } else {
            for x in (0..width).rev() {
                locations.push((x, y));
            }
        }
    }
    Path::new(locations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boustrophedon_path_is_valid() {
        let geo = Geometry::new(4, 3, false);
        let path = boustrophedon_path(4, 3);
        assert_eq!(path.len(), 12);
        assert!(path.is_valid(&geo));
    }

    #[test]
    fn test_boustrophedon_row_direction_alternates() {
        let path = boustrophedon_path(3, 2);
        assert_eq!(path.locations()[0..3], [(0, 0), (1, 0), (2, 0)]);
        assert_eq!(path.locations()[3..6], [(2, 1), (1, 1), (0, 1)]);
    }

    #[test]
    fn test_to_grid_numbers_in_order() {
        let path = Path::new(vec![(0, 0), (1, 0), (1, 1)]);
        let grid = path.to_grid(2, 2);
        assert_eq!(grid.get((0, 0)), 1);
        assert_eq!(grid.get((1, 0)), 2);
        assert_eq!(grid.get((1, 1)), 3);
    }

    #[test]
    fn test_round_trip() {
        let geo = Geometry::new(4, 4, true);
        let original = boustrophedon_path(4, 4);
        let grid = original.to_grid(4, 4);
        let recovered = Path::from_grid(&grid).unwrap();
        assert_eq!(original, recovered);
        assert!(recovered.is_valid(&geo));
    }

    #[test]
    fn test_from_grid_incomplete_returns_none() {
        let mut grid = Grid::new(3, 3);
        grid.set((0, 0), 1);
        assert_eq!(Path::from_grid(&grid), None);
    }

    #[test]
    fn test_is_valid_rejects_non_adjacent_step() {
        let geo = Geometry::new(3, 3, false);
        let path = Path::new(vec![(0, 0), (2, 0), (2, 1), (2, 2), (1, 2), (1, 1), (1, 0), (0, 1), (0, 2)]);
        assert!(!path.is_valid(&geo));
    }

    #[test]
    fn test_is_valid_rejects_duplicate_cell() {
        let geo = Geometry::new(2, 2, false);
        let path = Path::new(vec![(0, 0), (1, 0), (1, 0), (0, 1)]);
        assert!(!path.is_valid(&geo));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn boustrophedon_path_is_always_valid(w in 3usize..10, h in 3usize..10) {
                let geo = Geometry::new(w, h, false);
                let path = boustrophedon_path(w, h);
                prop_assert!(path.is_valid(&geo));
                prop_assert_eq!(path.len(), w * h);
            }

            #[test]
            fn to_grid_then_from_grid_round_trips(w in 3usize..8, h in 3usize..8) {
                let path = boustrophedon_path(w, h);
                let grid = path.to_grid(w, h);
                let recovered = Path::from_grid(&grid).unwrap();
                prop_assert_eq!(path, recovered);
            }
        }
    }
}
