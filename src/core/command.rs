//! Player commands and command history records.
//!
//! Commands are the engine's only input surface: four movement/rotation
//! commands plus `Reset`. An input source produces at most one command per
//! discrete user action.

use serde::{Deserialize, Serialize};

use super::agent::{MoveDirection, Turn};

/// A player command.
///
/// ## Example
///
/// ```
/// use bee_grid::core::Command;
///
/// assert_eq!(Command::from_key("ArrowUp"), Some(Command::MoveForward));
/// assert_eq!(Command::from_key("Enter"), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
    /// Generate a fresh board and start a new session.
    Reset,
}

impl Command {
    /// All commands, movement first.
    pub const ALL: [Command; 5] = [
        Command::MoveForward,
        Command::MoveBackward,
        Command::TurnLeft,
        Command::TurnRight,
        Command::Reset,
    ];

    /// Map a keyboard key name to a command.
    ///
    /// Arrow keys drive the bee; every other key is ignored. Reset has no
    /// key binding.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Command::MoveForward),
            "ArrowDown" => Some(Command::MoveBackward),
            "ArrowLeft" => Some(Command::TurnLeft),
            "ArrowRight" => Some(Command::TurnRight),
            _ => None,
        }
    }

    /// The movement this command performs, if any.
    #[must_use]
    pub const fn as_move(self) -> Option<MoveDirection> {
        match self {
            Command::MoveForward => Some(MoveDirection::Forward),
            Command::MoveBackward => Some(MoveDirection::Backward),
            _ => None,
        }
    }

    /// The rotation this command performs, if any.
    #[must_use]
    pub const fn as_turn(self) -> Option<Turn> {
        match self {
            Command::TurnLeft => Some(Turn::Left),
            Command::TurnRight => Some(Turn::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Command::MoveForward => "forward",
            Command::MoveBackward => "backward",
            Command::TurnLeft => "left",
            Command::TurnRight => "right",
            Command::Reset => "reset",
        };
        f.write_str(s)
    }
}

impl From<MoveDirection> for Command {
    fn from(direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::Forward => Command::MoveForward,
            MoveDirection::Backward => Command::MoveBackward,
        }
    }
}

impl From<Turn> for Command {
    fn from(turn: Turn) -> Self {
        match turn {
            Turn::Left => Command::TurnLeft,
            Turn::Right => Command::TurnRight,
        }
    }
}

/// A dispatched command with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Session number (starts at 1, bumped by each reset).
    pub session: u32,

    /// Sequence number within the session.
    pub sequence: u32,

    /// The command dispatched.
    pub command: Command,
}

impl CommandRecord {
    /// Create a new command record.
    #[must_use]
    pub fn new(session: u32, sequence: u32, command: Command) -> Self {
        Self {
            session,
            sequence,
            command,
        }
    }
}
