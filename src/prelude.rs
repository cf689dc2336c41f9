//! Commonly used types and utilities for ease of import.

pub use crate::{Board, Grid, Orientation, Placement, PlacementError, BOARD_SIZE, SHIP_LENGTH};

#[cfg(feature = "std")]
pub use crate::{print_board, run_setup, Level, SetupReport};
