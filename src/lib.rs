//! # npmm
//!
//! An engine for N-in-a-row board games played by 2-4 players, with a
//! depth-limited search opponent.
//!
//! ## Design Principles
//!
//! 1. **Pluggable Rules**: The engine knows nothing about a particular
//!    game. Legality, transitions and terminal conditions come from a
//!    `RuleSet` trait object chosen when a game is created.
//!
//! 2. **N-Player First**: Players, score vectors and seating are sized
//!    by the player count. Nothing assumes two players.
//!
//! 3. **Reject, Never Corrupt**: Every operation either commits a complete
//!    new state or reports a typed `GameError` and leaves the game as it
//!    was.
//!
//! ## Architecture
//!
//! - **Persistent Boards**: `im::Vector` storage makes cloning a game O(1),
//!   so the search can branch freely.
//!
//! - **Max-n Search**: Constant-sum score vectors with shallow pruning, or
//!   paranoid alpha-beta.
//!
//! ## Modules
//!
//! - `core`: Players, board, moves, state, status, configuration, errors, RNG
//! - `rules`: `RuleSet` trait and the run detector
//! - `engine`: `Game`, the turn state machine
//! - `games`: Built-in rule sets and the registry
//! - `search`: Computer opponent
//! - `controller`: Handle-based boundary for a UI or runtime
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod engine;
pub mod games;
pub mod search;
pub mod controller;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardCell, Move,
    Player, PlayerMap, PlayerConversionError,
    GameState, GameStatus, GameConfig, GameError,
    GameRng,
};

pub use crate::rules::{RuleSet, MoveList, RunDetector};

pub use crate::engine::Game;

pub use crate::games::{PushUpFour, ConnectFour, Othello, RuleSetRegistry};

pub use crate::search::{
    SearchConfig, SearchMode, Searcher, SearchOutcome, SearchStats,
    EvaluationFunction, NeutralEvaluation, RandomEvaluation, RunHeuristic,
};

pub use crate::controller::{GameController, GameHandle, ControllerConfig, Seat};
