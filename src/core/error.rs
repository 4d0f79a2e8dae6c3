//! Error types for board configuration and state construction.
//!
//! Gameplay rejections (boundary hits, visiting the flower too early) are
//! not errors; see `rules::GameEvent`.

use thiserror::Error;

use super::grid::Position;

/// A board configuration or game state that breaks a board invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 2, got {0}")]
    GridTooSmall(usize),
    #[error("at least one honey drop is required")]
    NoHoney,
    #[error("{honey} honey drops do not fit on a {size}x{size} grid (max {capacity})")]
    TooMuchHoney {
        honey: usize,
        size: usize,
        capacity: usize,
    },
    #[error("placement attempt budget must be non-zero")]
    NoPlacementAttempts,
    #[error("honey position {0} is outside the grid")]
    HoneyOutOfBounds(Position),
    #[error("honey position {0} overlaps the start or flower cell")]
    HoneyOnReservedCell(Position),
    #[error("honey position {0} is listed more than once")]
    DuplicateHoney(Position),
    #[error("bee position {0} is outside the grid")]
    AgentOutOfBounds(Position),
    #[error("{collected} collected plus {remaining} on the board does not match {total} honey")]
    HoneyMismatch {
        collected: u32,
        remaining: usize,
        total: u32,
    },
    #[error("won with {collected} of {total} honey")]
    PrematureWin { collected: u32, total: u32 },
}
