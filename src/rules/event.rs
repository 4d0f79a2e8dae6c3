//! Events emitted by transitions.
//!
//! Every transition reports what happened as a short list of `GameEvent`s.
//! Two of them are advisory: hitting the grid edge and reaching the flower
//! without all the honey. Those map to a `Notice` that the presentation layer
//! shows briefly. The core never decides how long.

use serde::{Deserialize, Serialize};

use crate::core::{Command, Facing, Position};

/// Something that happened while applying a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// The bee moved from one cell to an adjacent one.
    Moved { from: Position, to: Position },

    /// The bee rotated in place.
    Turned { from: Facing, to: Facing },

    /// A honey drop was picked up.
    HoneyCollected {
        at: Position,
        collected: u32,
        total: u32,
    },

    /// The move would have left the grid; nothing changed.
    BoundaryBlocked { at: Position, heading: Facing },

    /// The bee reached the flower before collecting all the honey.
    NeedMoreHoney { collected: u32, total: u32 },

    /// The bee reached the flower with all the honey.
    Won,

    /// The command arrived after the session was won and was dropped.
    Ignored(Command),

    /// A new board was generated.
    Reset { session: u32 },
}

impl GameEvent {
    /// Advisory notice for the presentation layer, if this event carries one.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match *self {
            GameEvent::BoundaryBlocked { .. } => Some(Notice::Boundary),
            GameEvent::NeedMoreHoney { collected, total } => {
                Some(Notice::NeedMoreHoney { collected, total })
            }
            _ => None,
        }
    }
}

/// Transient advisory message value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notice {
    /// Bumped into the edge of the grid.
    Boundary,
    /// Reached the flower early; carries current progress.
    NeedMoreHoney { collected: u32, total: u32 },
}
