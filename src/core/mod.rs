//! Core engine types: players, board, state, configuration, RNG, errors.
//!
//! This module contains the fundamental building blocks that are
//! rule-agnostic. Rule sets interpret them; the core never does.

pub mod board;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{cell_symbol, Board, BoardCell, Move};
pub use config::GameConfig;
pub use error::{GameError, PlayerConversionError};
pub use player::{Player, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};
pub use rng::GameRng;
pub use state::{GameState, GameStatus};
