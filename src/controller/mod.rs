//! Boundary API for a UI or runtime.
//!
//! A [`GameController`] owns every running game behind a [`GameHandle`]
//! and seats each player as [`Seat::Human`] or [`Seat::Computer`]. All
//! game logic lives in the engine and the rule sets; the controller only
//! routes calls and enforces seating.

pub mod config;
pub mod game_controller;

pub use config::{ControllerConfig, Seat};
pub use game_controller::{GameController, GameHandle};
