//! Game configuration.
//!
//! A `GameConfig` fixes the board shape and the number of participants
//! for one game instance. Rule sets decide everything else.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::{MAX_PLAYERS, MIN_PLAYERS};

/// Shape and participants of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board height.
    pub num_rows: usize,

    /// Board width.
    pub num_cols: usize,

    /// Number of players taking turns (2-4).
    pub num_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_rows: 6,
            num_cols: 7,
            num_players: 2,
        }
    }
}

impl GameConfig {
    /// Create a config for a `num_rows x num_cols` board.
    #[must_use]
    pub fn new(num_rows: usize, num_cols: usize, num_players: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            num_players,
        }
    }

    /// Set the board dimensions.
    pub fn with_dimensions(mut self, num_rows: usize, num_cols: usize) -> Self {
        self.num_rows = num_rows;
        self.num_cols = num_cols;
        self
    }

    /// Set the number of players.
    pub fn with_players(mut self, num_players: usize) -> Self {
        self.num_players = num_players;
        self
    }

    /// Check the config against the engine limits and a rule set's
    /// supported player range.
    ///
    /// The accepted player range is the intersection of `2..=4` and
    /// `supported`.
    pub fn validate(&self, supported: RangeInclusive<usize>) -> Result<(), GameError> {
        let min = (*supported.start()).max(MIN_PLAYERS);
        let max = (*supported.end()).min(MAX_PLAYERS);
        if !(min..=max).contains(&self.num_players) {
            return Err(GameError::InvalidPlayerCount {
                requested: self.num_players,
                min,
                max,
            });
        }

        if self.num_rows == 0 || self.num_cols == 0 {
            return Err(GameError::InvalidDimensions {
                rows: self.num_rows,
                cols: self.num_cols,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!((config.num_rows, config.num_cols), (6, 7));
        assert_eq!(config.num_players, 2);
        assert!(config.validate(2..=4).is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default().with_dimensions(8, 8).with_players(3);
        assert_eq!(config, GameConfig::new(8, 8, 3));
    }

    #[test]
    fn test_validate_player_count() {
        for n in [0, 1, 5, 9] {
            let err = GameConfig::default().with_players(n).validate(2..=4);
            assert_eq!(
                err,
                Err(GameError::InvalidPlayerCount {
                    requested: n,
                    min: 2,
                    max: 4
                })
            );
        }
        for n in 2..=4 {
            assert!(GameConfig::default().with_players(n).validate(2..=4).is_ok());
        }
    }

    #[test]
    fn test_validate_narrows_to_rule_set_range() {
        let config = GameConfig::default().with_players(3);
        assert_eq!(
            config.validate(2..=2),
            Err(GameError::InvalidPlayerCount {
                requested: 3,
                min: 2,
                max: 2
            })
        );
    }

    #[test]
    fn test_validate_dimensions() {
        let config = GameConfig::new(0, 7, 2);
        assert!(matches!(
            config.validate(2..=4),
            Err(GameError::InvalidDimensions { rows: 0, cols: 7 })
        ));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(4, 5, 3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
