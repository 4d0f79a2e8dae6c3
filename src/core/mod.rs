//! Core engine types: grid, agent, state, commands, RNG, configuration.
//!
//! Everything here is plain data. The rules that move the bee live in
//! `rules`; the controller that owns a live session lives in `session`.

pub mod agent;
pub mod command;
pub mod config;
pub mod error;
pub mod grid;
pub mod rng;
pub mod state;

pub use agent::{Agent, Facing, MoveDirection, Turn};
pub use command::{Command, CommandRecord};
pub use config::{BoardConfig, HoneyPlacement, DEFAULT_GRID_SIZE, DEFAULT_HONEY_COUNT};
pub use error::ConfigError;
pub use grid::{Board, Cell, Position};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Status};
