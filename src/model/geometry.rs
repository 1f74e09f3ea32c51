//! Cell adjacency, neighbour enumeration, and adjacency-distance.
//!
//! `Geometry` carries only the grid dimensions and the diagonal-adjacency
//! flag; every method is a pure function of its arguments. Fixing the
//! neighbour enumeration order here (N, E, S, W, then the four diagonals)
//! means every caller — the deductive solver's endpoint scans, the
//! recursive solver's branch enumeration — gets the same deterministic
//! order for free.

/// A grid coordinate, `(x, y)`, with `0 <= x < width` and `0 <= y < height`.
pub type Coord = (usize, usize);

/// The eight compass offsets in the order neighbours are always enumerated:
/// N, E, S, W, NE, SE, SW, NW. The first four are orthogonal; diagonal mode
/// adds the last four.
const OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, 0),
    (1, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
];

/// Grid adjacency and distance rules for a fixed width/height/diagonal combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    width: usize,
    height: usize,
    diagonal: bool,
}

impl Geometry {
    pub fn new(width: usize, height: usize, diagonal: bool) -> Self {
        Self { width, height, diagonal }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn diagonal(&self) -> bool {
        self.diagonal
    }

    fn offset_count(&self) -> usize {
        if self.diagonal { 8 } else { 4 }
    }

    fn in_bounds(&self, x: isize, y: isize) -> Option<Coord> {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            Some((x as usize, y as usize))
        } else {
            None
        }
    }

    /// The 2-8 in-bounds neighbours of `pos`, in fixed N/E/S/W(/NE/SE/SW/NW) order.
    pub fn neighbours(&self, pos: Coord) -> Vec<Coord> {
        let (x, y) = pos;
        OFFSETS[..self.offset_count()]
            .iter()
            .filter_map(|&(dx, dy)| self.in_bounds(x as isize + dx, y as isize + dy))
            .collect()
    }

    /// Same as [`neighbours`](Self::neighbours), excluding one specific location.
    pub fn neighbours_except(&self, pos: Coord, except: Coord) -> Vec<Coord> {
        self.neighbours(pos).into_iter().filter(|&c| c != except).collect()
    }

    /// Adjacency distance: Manhattan when `diagonal` is false, Chebyshev when true.
    pub fn distance(&self, a: Coord, b: Coord) -> usize {
        let dx = a.0.abs_diff(b.0);
        let dy = a.1.abs_diff(b.1);
        if self.diagonal {
            dx.max(dy)
        } else {
            dx + dy
        }
    }

    /// Two cells are neighbours iff their adjacency distance is exactly 1.
    pub fn are_neighbours(&self, a: Coord, b: Coord) -> bool {
        self.distance(a, b) == 1
    }
}
