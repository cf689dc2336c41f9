//! Common error types for grid access and ship placement.

use crate::orientation::Orientation;

/// Errors returned by direct grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is out of bounds [0..N).
    IndexOutOfBounds { row: usize, col: usize },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// Reasons a placement is rejected by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Underlying grid error.
    Grid(GridError),
    /// Some cell of the ship would fall outside the board.
    OutOfBounds {
        row: usize,
        col: usize,
        orientation: Orientation,
    },
    /// The cell at (`row`, `col`) already holds a ship.
    Overlap { row: usize, col: usize },
}

impl From<GridError> for PlacementError {
    fn from(err: GridError) -> Self {
        PlacementError::Grid(err)
    }
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::Grid(e) => write!(f, "Grid error: {}", e),
            PlacementError::OutOfBounds {
                row,
                col,
                orientation,
            } => write!(
                f,
                "{} ship at (row {}, col {}) leaves the board",
                orientation, row, col
            ),
            PlacementError::Overlap { row, col } => {
                write!(f, "Ships overlap at ({}, {})", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
