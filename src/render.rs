#![cfg(feature = "std")]

use std::io::{self, Write};

use crate::config::{SHIP, WATER};
use crate::grid::Grid;
use crate::setup::Setup;

const BANNER: &str = "=== BATTLESHIP BOARD ===";

/// Write the banner, the grid with row/column headers, and the legend.
pub fn render_board<W: Write, const N: usize>(out: &mut W, grid: &Grid<N>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", BANNER)?;
    write!(out, "{}", grid)?;
    writeln!(out, "{}", "=".repeat(BANNER.len()))?;
    writeln!(out, "Legend: {} = Water, {} = Ship", WATER, SHIP)
}

/// Render a grid into an owned string.
pub fn board_to_string<const N: usize>(grid: &Grid<N>) -> String {
    let mut buf = Vec::new();
    // writing into a Vec cannot fail
    let _ = render_board(&mut buf, grid);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Print a grid to stdout.
pub fn print_board<const N: usize>(grid: &Grid<N>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_board(&mut out, grid)?;
    out.flush()
}

/// Write the text-mode run log: start banner, one attempt line and one
/// result line per ship, then the rendered board.
pub fn render_setup<W: Write>(out: &mut W, setup: &Setup) -> io::Result<()> {
    writeln!(out, "Starting Battleship setup ({} level)", setup.level.name())?;
    writeln!(out, "Board initialized with water ({}).", WATER)?;
    for (i, outcome) in setup.outcomes.iter().enumerate() {
        let (row, col) = outcome.placement.origin();
        let orientation = outcome.placement.orientation();
        writeln!(
            out,
            "Trying to place ship {} ({}) at ({}, {})...",
            i + 1,
            orientation,
            row,
            col
        )?;
        match &outcome.result {
            Ok(_) => writeln!(out, "Ship {} ({}) placed successfully!", i + 1, orientation)?,
            Err(e) => writeln!(out, "Failed to place ship {} ({}): {}.", i + 1, orientation, e)?,
        }
    }
    render_board(out, &setup.board)
}
