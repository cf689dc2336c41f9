//! Ship placement requests and the validated cells they cover.

use crate::config::SHIP_LENGTH;
use crate::orientation::Orientation;

/// A named ship anchored at (`row`, `col`) and extending along `orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    name: &'static str,
    row: usize,
    col: usize,
    orientation: Orientation,
}

impl Placement {
    /// Create a new placement request.
    pub const fn new(name: &'static str, row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            name,
            row,
            col,
            orientation,
        }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Starting cell (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The `i`-th candidate cell, or `None` if it has a negative coordinate.
    pub fn cell(&self, i: usize) -> Option<(usize, usize)> {
        self.orientation.cell(self.row, self.col, i)
    }
}

/// Cells of a placement that passed validation on an `N×N` grid.
///
/// Only the validator constructs these, so every cell is in `[0, N)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint<const N: usize> {
    cells: [(usize, usize); SHIP_LENGTH],
}

impl<const N: usize> Footprint<N> {
    pub(crate) fn new(cells: [(usize, usize); SHIP_LENGTH]) -> Self {
        Self { cells }
    }

    /// Covered cells in placement order.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Whether the footprint covers (`row`, `col`).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }
}
