//! Ship orientations and the coordinate deltas they walk along.

use core::fmt;

/// Direction a ship extends from its starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum Orientation {
    /// Down the rows (row++, col).
    Vertical,
    /// Across the columns (row, col++).
    Horizontal,
    /// Top-left to bottom-right (row++, col++).
    Diagonal,
    /// Top-right to bottom-left (row++, col--).
    AntiDiagonal,
}

impl Orientation {
    /// All orientations, in declaration order.
    pub const ALL: [Orientation; 4] = [
        Orientation::Vertical,
        Orientation::Horizontal,
        Orientation::Diagonal,
        Orientation::AntiDiagonal,
    ];

    /// `(d_row, d_col)` applied once per ship segment.
    pub const fn step(self) -> (isize, isize) {
        match self {
            Orientation::Vertical => (1, 0),
            Orientation::Horizontal => (0, 1),
            Orientation::Diagonal => (1, 1),
            Orientation::AntiDiagonal => (1, -1),
        }
    }

    /// The `i`-th cell of a ship starting at (`row`, `col`).
    ///
    /// Returns `None` when the cell would have a negative coordinate. The
    /// upper bound is the grid's concern.
    pub fn cell(self, row: usize, col: usize, i: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.step();
        let i = isize::try_from(i).ok()?;
        let r = row.checked_add_signed(dr.checked_mul(i)?)?;
        let c = col.checked_add_signed(dc.checked_mul(i)?)?;
        Some((r, c))
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Orientation::Vertical => "Vertical",
            Orientation::Horizontal => "Horizontal",
            Orientation::Diagonal => "Diagonal TL-BR",
            Orientation::AntiDiagonal => "Diagonal TR-BL",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
