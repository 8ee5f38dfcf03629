//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// How opponents are modelled during the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    /// Every player maximizes their own share of the score (max-n).
    MaxN,
    /// All other players are assumed to minimize the searching player's
    /// share (paranoid search, alpha-beta on one component).
    Paranoid,
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum plies explored below the root (default: 7).
    /// Values below 1 are treated as 1.
    pub depth: u32,

    /// Opponent model.
    pub mode: SearchMode,

    /// Seed for randomized evaluators.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 7,
            mode: SearchMode::MaxN,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom opponent model.
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 7);
        assert_eq!(config.mode, SearchMode::MaxN);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_depth(3)
            .with_mode(SearchMode::Paranoid)
            .with_seed(123);

        assert_eq!(config.depth, 3);
        assert_eq!(config.mode, SearchMode::Paranoid);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_mode(SearchMode::Paranoid);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
