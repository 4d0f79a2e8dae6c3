//! The bee: position plus facing.
//!
//! Facing is a cyclic order North → East → South → West → North.
//! Movement always happens along the current facing axis; moving backward
//! reverses along that axis without turning.

use serde::{Deserialize, Serialize};

use super::grid::Position;

/// Cardinal orientation of the agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    North,
    East,
    South,
    West,
}

impl Facing {
    /// All facings in clockwise order, starting at North.
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Position in the clockwise cycle (North = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Facing::North => 0,
            Facing::East => 1,
            Facing::South => 2,
            Facing::West => 3,
        }
    }

    /// Rotate one step in the given direction.
    #[must_use]
    pub const fn turned(self, turn: Turn) -> Self {
        let idx = match turn {
            Turn::Right => (self.index() + 1) % 4,
            Turn::Left => (self.index() + 3) % 4,
        };
        Self::ALL[idx]
    }

    /// Unit delta `(dx, dy)` for one forward step in a top-left-origin grid.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Facing::North => (0, -1),
            Facing::East => (1, 0),
            Facing::South => (0, 1),
            Facing::West => (-1, 0),
        }
    }

    /// Clockwise rotation in degrees, for sprite orientation.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Facing::North => 0,
            Facing::East => 90,
            Facing::South => 180,
            Facing::West => 270,
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Facing::North => "N",
            Facing::East => "E",
            Facing::South => "S",
            Facing::West => "W",
        };
        f.write_str(s)
    }
}

/// Rotation command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
}

/// Movement command relative to the current facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDirection {
    Forward,
    Backward,
}

impl MoveDirection {
    /// Signed step multiplier along the facing axis.
    #[must_use]
    pub const fn step(self) -> isize {
        match self {
            MoveDirection::Forward => 1,
            MoveDirection::Backward => -1,
        }
    }
}

/// The player-controlled bee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    pub position: Position,
    pub facing: Facing,
}

impl Agent {
    /// Create an agent at a position with a facing.
    #[must_use]
    pub const fn new(position: Position, facing: Facing) -> Self {
        Self { position, facing }
    }

    /// Destination of a move on a `size`×`size` grid, or `None` if it
    /// would leave the grid.
    #[must_use]
    pub fn destination(&self, direction: MoveDirection, size: usize) -> Option<Position> {
        let (dx, dy) = self.facing.delta();
        let step = direction.step();
        self.position.offset(dx * step, dy * step, size)
    }
}
