//! Board configuration.
//!
//! `BoardConfig` fixes the grid dimension and how honey is placed. The start
//! cell is always the bottom-left corner and the flower the top-right corner.
//! A config must pass `validate` before it is used to generate boards, which
//! is what lets `generate` turn invalid configs away before placing anything.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::grid::Position;

/// Default grid dimension.
pub const DEFAULT_GRID_SIZE: usize = 5;

/// Default number of honey drops.
pub const DEFAULT_HONEY_COUNT: usize = 4;

/// Default bound on random placement draws before falling back to first-fit.
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: usize = 1024;

/// How honey drops are placed on a fresh board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoneyPlacement {
    /// Uniform random cells, rejecting occupied draws.
    Random { count: usize },
    /// Exactly these cells.
    Fixed(Vec<Position>),
}

impl HoneyPlacement {
    /// Number of honey drops this placement produces.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            HoneyPlacement::Random { count } => *count,
            HoneyPlacement::Fixed(positions) => positions.len(),
        }
    }
}

/// Board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Grid dimension N (the board is N×N).
    pub size: usize,

    /// Honey placement strategy.
    pub honey: HoneyPlacement,

    /// Maximum random draws before remaining honey is placed by a
    /// row-major scan for the first empty cell.
    pub max_placement_attempts: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            honey: HoneyPlacement::Random {
                count: DEFAULT_HONEY_COUNT,
            },
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl BoardConfig {
    /// Create a default 5×5 config with four random honey drops.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid dimension.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Place `count` honey drops at random.
    #[must_use]
    pub fn with_random_honey(mut self, count: usize) -> Self {
        self.honey = HoneyPlacement::Random { count };
        self
    }

    /// Place honey at exactly these positions.
    #[must_use]
    pub fn with_fixed_honey(mut self, positions: impl Into<Vec<Position>>) -> Self {
        self.honey = HoneyPlacement::Fixed(positions.into());
        self
    }

    /// Set the random placement attempt budget.
    #[must_use]
    pub fn with_max_placement_attempts(mut self, attempts: usize) -> Self {
        self.max_placement_attempts = attempts;
        self
    }

    /// Validate and return the config.
    pub fn build(self) -> Result<Self, ConfigError> {
        self.validate()?;
        Ok(self)
    }

    /// Start cell: bottom-left corner.
    #[must_use]
    pub fn start(&self) -> Position {
        Position::new(0, self.size.saturating_sub(1))
    }

    /// Flower cell: top-right corner.
    #[must_use]
    pub fn flower(&self) -> Position {
        Position::new(self.size.saturating_sub(1), 0)
    }

    /// Number of honey drops a generated board will hold.
    #[must_use]
    pub fn honey_count(&self) -> usize {
        self.honey.count()
    }

    /// Cells available for honey (all but start and flower).
    #[must_use]
    pub fn honey_capacity(&self) -> usize {
        (self.size * self.size).saturating_sub(2)
    }

    /// Check that this config can always produce a valid board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 2 {
            return Err(ConfigError::GridTooSmall(self.size));
        }
        if self.max_placement_attempts == 0 {
            return Err(ConfigError::NoPlacementAttempts);
        }

        let honey = self.honey_count();
        if honey == 0 {
            return Err(ConfigError::NoHoney);
        }
        if honey > self.honey_capacity() {
            return Err(ConfigError::TooMuchHoney {
                honey,
                size: self.size,
                capacity: self.honey_capacity(),
            });
        }

        if let HoneyPlacement::Fixed(positions) = &self.honey {
            let mut seen = FxHashSet::default();
            for &pos in positions {
                if !pos.in_bounds(self.size) {
                    return Err(ConfigError::HoneyOutOfBounds(pos));
                }
                if pos == self.start() || pos == self.flower() {
                    return Err(ConfigError::HoneyOnReservedCell(pos));
                }
                if !seen.insert(pos) {
                    return Err(ConfigError::DuplicateHoney(pos));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.size, 5);
        assert_eq!(config.honey_count(), 4);
        assert_eq!(config.start(), Position::new(0, 4));
        assert_eq!(config.flower(), Position::new(4, 0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::new()
            .with_size(7)
            .with_random_honey(10)
            .with_max_placement_attempts(16)
            .build()
            .unwrap();

        assert_eq!(config.size, 7);
        assert_eq!(config.honey_count(), 10);
        assert_eq!(config.max_placement_attempts, 16);
        assert_eq!(config.start(), Position::new(0, 6));
        assert_eq!(config.flower(), Position::new(6, 0));
    }

    #[test]
    fn test_grid_too_small() {
        let err = BoardConfig::new().with_size(1).build().unwrap_err();
        assert_eq!(err, ConfigError::GridTooSmall(1));
    }

    #[test]
    fn test_honey_bounds() {
        assert_eq!(
            BoardConfig::new().with_random_honey(0).validate(),
            Err(ConfigError::NoHoney)
        );

        // 5x5 has 23 free cells
        assert!(BoardConfig::new().with_random_honey(23).validate().is_ok());
        assert_eq!(
            BoardConfig::new().with_random_honey(24).validate(),
            Err(ConfigError::TooMuchHoney {
                honey: 24,
                size: 5,
                capacity: 23
            })
        );
    }

    #[test]
    fn test_zero_attempts() {
        assert_eq!(
            BoardConfig::new().with_max_placement_attempts(0).validate(),
            Err(ConfigError::NoPlacementAttempts)
        );
    }

    #[test]
    fn test_fixed_honey_validation() {
        let ok = BoardConfig::new().with_fixed_honey(vec![
            Position::new(2, 2),
            Position::new(3, 1),
            Position::new(1, 3),
            Position::new(4, 3),
        ]);
        assert!(ok.validate().is_ok());
        assert_eq!(ok.honey_count(), 4);

        let out = BoardConfig::new().with_fixed_honey(vec![Position::new(5, 0)]);
        assert_eq!(out.validate(), Err(ConfigError::HoneyOutOfBounds(Position::new(5, 0))));

        let on_start = BoardConfig::new().with_fixed_honey(vec![Position::new(0, 4)]);
        assert_eq!(
            on_start.validate(),
            Err(ConfigError::HoneyOnReservedCell(Position::new(0, 4)))
        );

        let dup = BoardConfig::new().with_fixed_honey(vec![Position::new(1, 1), Position::new(1, 1)]);
        assert_eq!(dup.validate(), Err(ConfigError::DuplicateHoney(Position::new(1, 1))));
    }

    #[test]
    fn test_error_messages() {
        let err = BoardConfig::new().with_random_honey(30).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "30 honey drops do not fit on a 5x5 grid (max 23)"
        );
    }
}
