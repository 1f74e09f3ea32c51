//! Generation parameters: the validated configuration `generate_puzzle`
//! consumes (§4.6, §10.1).

use crate::model::grid::{MAX_AREA, MIN_DIMENSION};
use crate::model::PuzzleError;
use crate::solver::Difficulty;

/// Which cells of the full solution are allowed to remain as clues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CluePattern {
    /// No positional constraint; clues may end up anywhere.
    None,
    /// Clues are kept or removed in rotationally-symmetric pairs under
    /// `(x,y) <-> (W-1-x, H-1-y)`.
    Rot2,
    /// Only the rectangular ring one cell in from the border survives.
    Ring,
    /// Only border cells with even `x + y` survive.
    Border,
}

/// Validated generation configuration. Construct via [`GenerationParams::new`];
/// every downstream function assumes the dimensions are already sound.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub width: usize,
    pub height: usize,
    pub diagonal: bool,
    pub pattern: CluePattern,
    pub keep_ends: bool,
    pub difficulty: Difficulty,
}

impl GenerationParams {
    /// Validates dimensions before any algorithm runs, matching the
    /// teacher's `PuzzleState::new`/`MoveValidator::new` bounds checks.
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::WidthTooSmall`/`HeightTooSmall` if either
    /// dimension is below 3, or `PuzzleError::AreaTooLarge` if the area
    /// exceeds 99.
    pub fn new(
        width: usize,
        height: usize,
        diagonal: bool,
        pattern: CluePattern,
        keep_ends: bool,
        difficulty: Difficulty,
    ) -> Result<Self, PuzzleError> {
        if width < MIN_DIMENSION {
            return Err(PuzzleError::WidthTooSmall { width, min: MIN_DIMENSION });
        }
        if height < MIN_DIMENSION {
            return Err(PuzzleError::HeightTooSmall { height, min: MIN_DIMENSION });
        }
        let area = width * height;
        if area > MAX_AREA {
            return Err(PuzzleError::AreaTooLarge { area, max: MAX_AREA });
        }
        Ok(Self { width, height, diagonal, pattern, keep_ends, difficulty })
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_width_too_small() {
        let err = GenerationParams::new(2, 5, false, CluePattern::None, false, Difficulty::Easy)
            .unwrap_err();
        assert!(matches!(err, PuzzleError::WidthTooSmall { width: 2, min: 3 }));
    }

    #[test]
    fn test_new_rejects_height_too_small() {
        let err = GenerationParams::new(5, 2, false, CluePattern::None, false, Difficulty::Easy)
            .unwrap_err();
        assert!(matches!(err, PuzzleError::HeightTooSmall { height: 2, min: 3 }));
    }

    #[test]
    fn test_new_rejects_area_too_large() {
        let err = GenerationParams::new(10, 10, false, CluePattern::None, false, Difficulty::Easy)
            .unwrap_err();
        assert!(matches!(err, PuzzleError::AreaTooLarge { area: 100, max: 99 }));
    }

    #[test]
    fn test_new_accepts_valid_params() {
        let params =
            GenerationParams::new(7, 7, false, CluePattern::Rot2, true, Difficulty::Easy).unwrap();
        assert_eq!(params.area(), 49);
    }
}
