//! Game rules: board generation and state transitions.
//!
//! - `generation`: builds a fresh board for a `BoardConfig`
//! - `transition`: pure move/turn functions over `GameState`
//! - `event`: what a transition reports, and which reports are advisory
//!
//! Nothing here holds state between calls; `session::Session` is the
//! controller that owns the live game.

pub mod event;
pub mod generation;
pub mod transition;

pub use event::{GameEvent, Notice};
pub use generation::{generate, Generated};
pub(crate) use generation::generate_validated;
pub use transition::{apply_move, apply_turn, Events, Transition};
