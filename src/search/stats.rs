//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited, root included.
    pub nodes: u64,

    /// Depth-limit positions scored by the evaluator.
    pub leaves: u64,

    /// Finished positions reached.
    pub terminal_hits: u64,

    /// Sibling lists abandoned early by pruning.
    pub pruned: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.nodes, 0);
        assert_eq!(stats.pruned, 0);
    }

    #[test]
    fn test_stats_nodes_per_second() {
        let mut stats = SearchStats::new();
        stats.nodes = 1000;
        stats.time_us = 500_000;
        assert!((stats.nodes_per_second() - 2000.0).abs() < 0.01);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats {
            nodes: 10,
            leaves: 4,
            terminal_hits: 2,
            pruned: 1,
            time_us: 99,
        };
        stats.reset();
        assert_eq!(stats, SearchStats::default());
        assert_eq!(stats.nodes_per_second(), 0.0);
    }
}
