//! Board generation.
//!
//! Start sits in the bottom-left corner, the flower in the top-right corner,
//! and honey is scattered by rejection sampling: draw a uniform cell, keep it
//! only if it is still empty. Draws are bounded by
//! `BoardConfig::max_placement_attempts`; whatever is left after the budget
//! runs out goes to the first empty cells in row-major order, so generation
//! always terminates.

use tracing::{debug, warn};

use crate::core::{
    Agent, Board, BoardConfig, Cell, ConfigError, Facing, GameRng, GameState, HoneyPlacement,
};

/// A freshly generated board with its starting bee.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    board: Board,
    agent: Agent,
    total: u32,
}

impl Generated {
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Bee on the start cell, facing North.
    #[must_use]
    pub fn agent(&self) -> Agent {
        self.agent
    }

    /// Honey drops placed.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Turn the generated layout into a playable state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        GameState::fresh(self.board, self.agent, self.total)
    }
}

/// Generate a board for `config`, drawing honey positions from `rng`.
///
/// Fails only if `config` does not pass `BoardConfig::validate`; a valid
/// config always yields a board with exactly its honey count.
pub fn generate(config: &BoardConfig, rng: &mut GameRng) -> Result<Generated, ConfigError> {
    config.validate()?;
    Ok(generate_validated(config, rng))
}

/// Generation for a config that already passed validation.
pub(crate) fn generate_validated(config: &BoardConfig, rng: &mut GameRng) -> Generated {
    let size = config.size;
    let start = config.start();
    let flower = config.flower();

    let mut board = Board::empty(size);
    board.set(start, Cell::Start);
    board.set(flower, Cell::Flower);

    let placed = match &config.honey {
        HoneyPlacement::Random { count } => {
            place_random(&mut board, *count, config.max_placement_attempts, rng)
        }
        HoneyPlacement::Fixed(positions) => {
            let mut placed = 0;
            for &pos in positions {
                if board.get(pos) == Some(Cell::Empty) {
                    board.set(pos, Cell::Honey);
                    placed += 1;
                }
            }
            placed
        }
    };

    debug!(size, honey = placed, "generated board");

    Generated {
        board,
        agent: Agent::new(start, Facing::North),
        total: placed as u32,
    }
}

/// Rejection-sample `count` honey cells, falling back to first-fit.
///
/// Returns the number placed.
fn place_random(board: &mut Board, count: usize, max_attempts: usize, rng: &mut GameRng) -> usize {
    let mut placed = 0;
    let mut attempts = 0;

    while placed < count && attempts < max_attempts {
        let pos = rng.gen_position(board.size());
        attempts += 1;
        if board.get(pos) == Some(Cell::Empty) {
            board.set(pos, Cell::Honey);
            placed += 1;
        }
    }

    if placed < count {
        warn!(
            attempts,
            remaining = count - placed,
            "placement budget exhausted, filling first empty cells"
        );
        let free: Vec<_> = board.positions_of(Cell::Empty).take(count - placed).collect();
        for pos in free {
            board.set(pos, Cell::Honey);
            placed += 1;
        }
    }

    placed
}
