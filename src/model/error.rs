use std::fmt;

/// Errors surfaced by the parameter layer, before any core algorithm runs.
///
/// Every variant is produced at construction time (`GenerationParams::new`,
/// `Grid::from_cells`) so that the solver, gap model, and generator functions
/// downstream never have to handle malformed input themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleError {
    /// Width is below the minimum of 3.
    WidthTooSmall { width: usize, min: usize },
    /// Height is below the minimum of 3.
    HeightTooSmall { height: usize, min: usize },
    /// width * height exceeds the maximum supported area of 99.
    AreaTooLarge { area: usize, max: usize },
    /// `Grid::from_cells` was given a buffer whose length doesn't match width * height.
    CellCountMismatch { expected: usize, actual: usize },
    /// `Grid::from_cells` was given a cell value outside `0..=area`.
    CellValueOutOfRange { value: u16, area: usize },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleError::WidthTooSmall { width, min } => {
                write!(f, "grid width {width} is too small (minimum: {min})")
            }
            PuzzleError::HeightTooSmall { height, min } => {
                write!(f, "grid height {height} is too small (minimum: {min})")
            }
            PuzzleError::AreaTooLarge { area, max } => {
                write!(f, "grid area {area} is too large (maximum: {max})")
            }
            PuzzleError::CellCountMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            PuzzleError::CellValueOutOfRange { value, area } => {
                write!(f, "cell value {value} is out of range for a grid of area {area}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_too_small_display() {
        let err = PuzzleError::WidthTooSmall { width: 2, min: 3 };
        assert_eq!(err.to_string(), "grid width 2 is too small (minimum: 3)");
    }

    #[test]
    fn test_area_too_large_display() {
        let err = PuzzleError::AreaTooLarge { area: 100, max: 99 };
        assert_eq!(err.to_string(), "grid area 100 is too large (maximum: 99)");
    }

    #[test]
    fn test_cell_count_mismatch_display() {
        let err = PuzzleError::CellCountMismatch { expected: 16, actual: 15 };
        assert_eq!(err.to_string(), "expected 16 cells, got 15");
    }
}
