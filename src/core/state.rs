//! Game state: board, bee, honey counters and status.
//!
//! ## GameState
//!
//! The aggregate one session plays on. It is cheap to clone (the board is a
//! persistent vector), and transitions in `rules` consume a state and return
//! the next one. Fields are only reachable through accessors so that every
//! mutation goes through a transition.
//!
//! `total` is always the honey the board started with: `new` counts it from
//! the board, and deserialization rejects states whose counters disagree
//! with their board.

use serde::{Deserialize, Serialize};

use super::agent::{Agent, Facing};
use super::error::ConfigError;
use super::grid::{Board, Cell, Position};

/// Session status. `Won` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Playing,
    Won,
}

/// Complete state of one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    board: Board,
    agent: Agent,
    collected: u32,
    total: u32,
    status: Status,
}

impl GameState {
    /// Create a state in `Playing` status with nothing collected.
    ///
    /// Every honey drop on `board` must be collected before the flower wins.
    /// Fails if the board holds no honey or the bee is off the grid.
    pub fn new(board: Board, agent: Agent) -> Result<Self, ConfigError> {
        if !agent.position.in_bounds(board.size()) {
            return Err(ConfigError::AgentOutOfBounds(agent.position));
        }
        let total = board.count(Cell::Honey);
        if total == 0 {
            return Err(ConfigError::NoHoney);
        }
        Ok(Self::fresh(board, agent, total as u32))
    }

    /// Unchecked constructor for boards built from a validated config.
    pub(crate) fn fresh(board: Board, agent: Agent, total: u32) -> Self {
        Self {
            board,
            agent,
            collected: 0,
            total,
            status: Status::Playing,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn agent(&self) -> Agent {
        self.agent
    }

    /// Honey collected so far.
    #[must_use]
    pub fn collected(&self) -> u32 {
        self.collected
    }

    /// Honey placed at generation.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Check if the session has been won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == Status::Won
    }

    /// Check if every honey drop has been collected.
    #[must_use]
    pub fn has_all_honey(&self) -> bool {
        self.collected == self.total
    }

    /// Cell under the bee.
    #[must_use]
    pub fn cell_under_agent(&self) -> Option<Cell> {
        self.board.get(self.agent.position)
    }

    // === Transition internals ===

    /// Zero-sized stand-in while the live state is out for a transition.
    pub(crate) fn vacant() -> Self {
        Self::fresh(Board::empty(0), Agent::new(Position::new(0, 0), Facing::North), 0)
    }

    pub(crate) fn agent_mut(&mut self) -> &mut Agent {
        &mut self.agent
    }

    /// Consume the honey at `pos` and bump the counter.
    pub(crate) fn collect_honey(&mut self, pos: Position) {
        self.board.set(pos, Cell::Empty);
        self.collected += 1;
    }

    pub(crate) fn mark_won(&mut self) {
        self.status = Status::Won;
    }
}

/// Wire form of `GameState`, checked before it becomes one.
#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    agent: Agent,
    collected: u32,
    total: u32,
    status: Status,
}

impl TryFrom<RawGameState> for GameState {
    type Error = ConfigError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        if !raw.agent.position.in_bounds(raw.board.size()) {
            return Err(ConfigError::AgentOutOfBounds(raw.agent.position));
        }
        if raw.total == 0 {
            return Err(ConfigError::NoHoney);
        }
        let remaining = raw.board.count(Cell::Honey);
        if raw.collected as usize + remaining != raw.total as usize {
            return Err(ConfigError::HoneyMismatch {
                collected: raw.collected,
                remaining,
                total: raw.total,
            });
        }
        if raw.status == Status::Won && raw.collected != raw.total {
            return Err(ConfigError::PrematureWin {
                collected: raw.collected,
                total: raw.total,
            });
        }

        Ok(Self {
            board: raw.board,
            agent: raw.agent,
            collected: raw.collected,
            total: raw.total,
            status: raw.status,
        })
    }
}
