#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
mod common;
mod config;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod orientation;
mod placement;
pub mod prelude;
#[cfg(feature = "std")]
pub mod render;
#[cfg(feature = "std")]
pub mod setup;

pub use common::*;
pub use config::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use orientation::*;
pub use placement::*;
#[cfg(feature = "std")]
pub use render::{board_to_string, print_board, render_board, render_setup};
#[cfg(feature = "std")]
pub use setup::*;
