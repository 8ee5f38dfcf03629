//! Computer opponent.
//!
//! ## Overview
//!
//! A depth-limited search over [`Game`](crate::engine::Game) successors.
//! Each player's prospects are a score vector whose entries are
//! non-negative and sum to 1:
//!
//! - **Terminal positions**: the winner gets 1.0, a tie gives each player
//!   `1 / N`
//! - **Depth limit**: a pluggable [`EvaluationFunction`] estimates the
//!   split
//! - **Opponent model**: max-n with shallow pruning, or paranoid
//!   alpha-beta
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use npmm::core::GameConfig;
//! use npmm::engine::Game;
//! use npmm::games::PushUpFour;
//! use npmm::search::{RunHeuristic, SearchConfig, Searcher};
//!
//! let game = Game::new(Arc::new(PushUpFour::default()), GameConfig::default()).unwrap();
//! let mut searcher = Searcher::new(SearchConfig::default().with_depth(3))
//!     .with_evaluator(RunHeuristic::new(4));
//!
//! let mv = searcher.best_move(&game).unwrap();
//! assert!(game.valid_moves().contains(&mv));
//! ```

pub mod config;
pub mod eval;
pub mod searcher;
pub mod stats;

pub use config::{SearchConfig, SearchMode};
pub use eval::{
    normalize, terminal_scores, EvaluationFunction, NeutralEvaluation, RandomEvaluation,
    RunHeuristic,
};
pub use searcher::{SearchOutcome, Searcher};
pub use stats::SearchStats;
