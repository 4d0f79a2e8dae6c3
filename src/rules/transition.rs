//! Movement and rotation transitions.
//!
//! Both transitions consume a `GameState` and return a `Transition`: the
//! next state plus the events describing what happened. A transition either
//! applies fully or leaves the state untouched; rejected moves are not
//! errors, they come back as advisory events.
//!
//! ## Movement
//!
//! 1. Won sessions ignore the command.
//! 2. The destination is one step along the facing axis (backward reverses
//!    along the same axis without turning).
//! 3. Destinations off the grid are rejected with `BoundaryBlocked`.
//! 4. Honey on the destination is always collected. The flower wins only
//!    once every drop is in; otherwise the bee still lands on it and
//!    `NeedMoreHoney` reports progress.

use smallvec::SmallVec;

use crate::core::{Cell, Command, GameState, MoveDirection, Turn};

use super::event::{GameEvent, Notice};

/// Events produced by one transition. Never more than two.
pub type Events = SmallVec<[GameEvent; 2]>;

/// Result of applying one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// The state after the command.
    pub state: GameState,
    /// What happened, in order.
    pub events: Events,
}

impl Transition {
    fn unchanged(state: GameState, event: GameEvent) -> Self {
        let mut events = Events::new();
        events.push(event);
        Self { state, events }
    }

    /// First advisory notice among the events, if any.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        self.events.iter().find_map(GameEvent::notice)
    }

    /// Check whether the command changed the state.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.events.iter().all(|e| {
            matches!(
                e,
                GameEvent::BoundaryBlocked { .. } | GameEvent::Ignored(_)
            )
        })
    }
}

/// Move the bee one step forward or backward along its facing.
#[must_use]
pub fn apply_move(mut state: GameState, direction: MoveDirection) -> Transition {
    if state.is_won() {
        return Transition::unchanged(state, GameEvent::Ignored(Command::from(direction)));
    }

    let agent = state.agent();
    let size = state.board().size();
    let Some(to) = agent.destination(direction, size) else {
        return Transition::unchanged(
            state,
            GameEvent::BoundaryBlocked {
                at: agent.position,
                heading: agent.facing,
            },
        );
    };

    let mut events = Events::new();
    events.push(GameEvent::Moved {
        from: agent.position,
        to,
    });

    match state.board().get(to) {
        Some(Cell::Honey) => {
            state.collect_honey(to);
            events.push(GameEvent::HoneyCollected {
                at: to,
                collected: state.collected(),
                total: state.total(),
            });
        }
        Some(Cell::Flower) => {
            if state.has_all_honey() {
                state.mark_won();
                events.push(GameEvent::Won);
            } else {
                events.push(GameEvent::NeedMoreHoney {
                    collected: state.collected(),
                    total: state.total(),
                });
            }
        }
        _ => {}
    }

    state.agent_mut().position = to;

    Transition { state, events }
}

/// Rotate the bee a quarter turn in place.
#[must_use]
pub fn apply_turn(mut state: GameState, turn: Turn) -> Transition {
    if state.is_won() {
        return Transition::unchanged(state, GameEvent::Ignored(Command::from(turn)));
    }

    let from = state.agent().facing;
    let to = from.turned(turn);
    state.agent_mut().facing = to;

    Transition::unchanged(state, GameEvent::Turned { from, to })
}
