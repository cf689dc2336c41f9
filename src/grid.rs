//! The placement grid: an `N×N` matrix of cell sentinels.

use core::fmt;
use log::warn;

use crate::common::{GridError, PlacementError};
use crate::config::{BOARD_SIZE, SHIP, SHIP_LENGTH, WATER};
use crate::placement::{Footprint, Placement};

/// The standard 10×10 board.
pub type Board = Grid<BOARD_SIZE>;

/// An `N×N` grid of `WATER`/`SHIP` sentinels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid<const N: usize> {
    cells: [[u8; N]; N],
}

impl<const N: usize> Grid<N> {
    /// Create a grid with every cell set to water.
    pub fn new() -> Self {
        Grid {
            cells: [[WATER; N]; N],
        }
    }

    /// Reset every cell to water.
    pub fn fill_water(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(WATER);
        }
    }

    /// Value stored at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Returns `true` if (row, col) holds a ship segment.
    pub fn is_ship(&self, row: usize, col: usize) -> Result<bool, GridError> {
        Ok(self.get(row, col)? == SHIP)
    }

    /// Number of cells holding a ship segment.
    pub fn ship_cells(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&v| v == SHIP)
            .count()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8; N]> + '_ {
        self.cells.iter()
    }

    /// Check that `placement` fits on the grid and touches no other ship.
    ///
    /// Bounds are checked for every segment before any cell is read; the
    /// overlap scan then stops at the first occupied cell. The grid is
    /// never modified.
    pub fn validate(&self, placement: &Placement) -> Result<Footprint<N>, PlacementError> {
        let (row, col) = placement.origin();
        let orientation = placement.orientation();

        let mut cells = [(0, 0); SHIP_LENGTH];
        for (i, slot) in cells.iter_mut().enumerate() {
            match placement.cell(i) {
                Some((r, c)) if r < N && c < N => *slot = (r, c),
                _ => {
                    warn!(
                        "{} ship (L{}, C{}) leaves the board",
                        orientation, row, col
                    );
                    return Err(PlacementError::OutOfBounds {
                        row,
                        col,
                        orientation,
                    });
                }
            }
        }

        for &(r, c) in cells.iter() {
            if self.cells[r][c] == SHIP {
                warn!("ship overlap at ({}, {})", r, c);
                return Err(PlacementError::Overlap { row: r, col: c });
            }
        }

        Ok(Footprint::new(cells))
    }

    /// Write the ship sentinel into every cell of a validated footprint.
    pub fn mark(&mut self, footprint: &Footprint<N>) {
        for &(r, c) in footprint.cells() {
            self.cells[r][c] = SHIP;
        }
    }

    /// Validate `placement` and, if it is accepted, mark its cells.
    pub fn place(&mut self, placement: &Placement) -> Result<Footprint<N>, PlacementError> {
        let footprint = self.validate(placement)?;
        self.mark(&footprint);
        Ok(footprint)
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= N || col >= N {
            Err(GridError::IndexOutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Decimal digits needed to print `n`.
fn digits(mut n: usize) -> usize {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}

/// Column header followed by one line per row, each value trailed by a space.
///
/// Columns are padded to the width of the largest index so boards wider
/// than ten cells stay aligned.
impl<const N: usize> fmt::Display for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = digits(N.saturating_sub(1));
        let label = width + 2;
        write!(f, "{:label$}", "")?;
        for c in 0..N {
            write!(f, "{:<width$} ", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{:<label$}", r)?;
            for v in row.iter() {
                write!(f, "{:<width$} ", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
