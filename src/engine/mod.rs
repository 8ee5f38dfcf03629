//! Turn state machine.
//!
//! `Ongoing` moves to a terminal status (`Tie` or exactly one player's
//! win) and never leaves it. The engine owns only the current state; there
//! is no history or undo.

pub mod game;

pub use game::Game;
