//! # bee-grid
//!
//! A deterministic grid game engine: pilot a bee around an N×N board with
//! move and turn commands, collect every honey drop, then reach the flower.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: Moves and turns consume a `GameState` and return
//!    the next one plus the events that describe what happened. Rejected
//!    moves are events, never errors.
//!
//! 2. **Single owner**: A `Session` owns the live state. Renderers read
//!    snapshots; input sources dispatch commands.
//!
//! 3. **Reproducible boards**: Honey placement draws from a seeded ChaCha8
//!    stream, bounded so that generation always terminates.
//!
//! ## Modules
//!
//! - `core`: Positions, cells, board, bee, state, commands, RNG, configuration
//! - `rules`: Board generation and move/turn transitions
//! - `session`: The controller owning one game between resets
//! - `locale`: Spanish and English display strings
//! - `background`: Optional cosmetic background images
//! - `view`: Render snapshots and toast timing

pub mod core;
pub mod rules;
pub mod session;
pub mod locale;
pub mod background;
pub mod view;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Agent, Board, BoardConfig, Cell, Command, CommandRecord, ConfigError, Facing, GameRng,
    GameRngState, GameState, HoneyPlacement, MoveDirection, Position, Status, Turn,
};

pub use crate::rules::{apply_move, apply_turn, generate, GameEvent, Generated, Notice, Transition};

pub use crate::session::{Outcome, Session};

pub use crate::locale::{Language, Localizer, MessageKey};

pub use crate::background::{
    request_background, BackgroundError, BackgroundProvider, ImageRef, NoBackground,
};

pub use crate::view::{Snapshot, Toast};
