use crate::orientation::Orientation;
use crate::placement::Placement;

pub const BOARD_SIZE: usize = 10;
pub const SHIP_LENGTH: usize = 3;

/// Sentinel stored in empty cells.
pub const WATER: u8 = 0;
/// Sentinel stored in cells occupied by a ship.
pub const SHIP: u8 = 3;

/// Two axis-aligned ships.
pub const NOVICE_FLEET: [Placement; 2] = [
    Placement::new("Vertical", 2, 3, Orientation::Vertical),
    Placement::new("Horizontal", 5, 5, Orientation::Horizontal),
];

/// One ship per orientation.
pub const ADVENTURER_FLEET: [Placement; 4] = [
    Placement::new("Vertical", 1, 1, Orientation::Vertical),
    Placement::new("Horizontal", 1, 6, Orientation::Horizontal),
    Placement::new("Diagonal", 3, 3, Orientation::Diagonal),
    Placement::new("Anti-diagonal", 5, 8, Orientation::AntiDiagonal),
];
