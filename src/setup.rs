#![cfg(feature = "std")]

//! Fleet setup driver: initialize a board, place each hardcoded ship in turn,
//! and collect what happened to every one of them.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::common::PlacementError;
use crate::config::{ADVENTURER_FLEET, BOARD_SIZE, NOVICE_FLEET, WATER};
use crate::grid::Board;
use crate::orientation::Orientation;
use crate::placement::{Footprint, Placement};

/// Which hardcoded fleet to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// One vertical and one horizontal ship.
    Novice,
    /// One ship in each of the four orientations.
    #[default]
    Adventurer,
}

impl Level {
    /// Ships placed at this level, in placement order.
    pub fn fleet(self) -> &'static [Placement] {
        match self {
            Level::Novice => &NOVICE_FLEET,
            Level::Adventurer => &ADVENTURER_FLEET,
        }
    }

    /// Lowercase name, matching the `--level` value and the serialized form.
    pub fn name(self) -> &'static str {
        match self {
            Level::Novice => "novice",
            Level::Adventurer => "adventurer",
        }
    }
}

/// Result of attempting one ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipOutcome {
    pub placement: Placement,
    pub result: Result<Footprint<BOARD_SIZE>, PlacementError>,
}

impl ShipOutcome {
    /// Whether the ship made it onto the board.
    pub fn is_placed(&self) -> bool {
        self.result.is_ok()
    }
}

/// A finished setup run.
#[derive(Debug, Clone)]
pub struct Setup {
    pub level: Level,
    pub board: Board,
    pub outcomes: Vec<ShipOutcome>,
}

impl Setup {
    /// Number of ships that were placed.
    pub fn placed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_placed()).count()
    }
}

/// Initialize a board and try every ship of `level`'s fleet.
pub fn run_setup(level: Level) -> Setup {
    place_fleet(level, level.fleet())
}

/// Initialize a board and try every ship of `fleet` in order.
///
/// A rejected ship is recorded and skipped; later ships are still attempted.
pub fn place_fleet(level: Level, fleet: &[Placement]) -> Setup {
    let mut board = Board::new();
    info!("board initialized with water ({})", WATER);

    let outcomes = fleet
        .iter()
        .map(|placement| {
            let (row, col) = placement.origin();
            debug!(
                "placing {} ship at ({}, {}) heading {}",
                placement.name(),
                row,
                col,
                placement.orientation()
            );
            ShipOutcome {
                placement: *placement,
                result: board.place(placement),
            }
        })
        .collect::<Vec<_>>();

    let setup = Setup {
        level,
        board,
        outcomes,
    };
    info!("{} of {} ships placed", setup.placed(), setup.outcomes.len());
    setup
}

/// Serializable view of a single ship attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipReport {
    pub name: String,
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
    pub placed: bool,
    pub cells: Vec<(usize, usize)>,
    pub error: Option<String>,
}

/// Serializable view of a whole setup run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupReport {
    pub level: Level,
    pub ships: Vec<ShipReport>,
    pub grid: Vec<Vec<u8>>,
    pub ship_cells: usize,
}

impl From<&ShipOutcome> for ShipReport {
    fn from(outcome: &ShipOutcome) -> Self {
        let (row, col) = outcome.placement.origin();
        let (cells, error) = match &outcome.result {
            Ok(fp) => (fp.cells().to_vec(), None),
            Err(e) => (Vec::new(), Some(e.to_string())),
        };
        ShipReport {
            name: outcome.placement.name().to_string(),
            row,
            col,
            orientation: outcome.placement.orientation(),
            placed: outcome.is_placed(),
            cells,
            error,
        }
    }
}

impl From<&Setup> for SetupReport {
    fn from(setup: &Setup) -> Self {
        SetupReport {
            level: setup.level,
            ships: setup.outcomes.iter().map(ShipReport::from).collect(),
            grid: setup.board.rows().map(|row| row.to_vec()).collect(),
            ship_cells: setup.board.ship_cells(),
        }
    }
}
