//! Rule set trait and the shared run detector.
//!
//! Games implement `RuleSet` to define:
//! - Initial board and turn
//! - Legal moves for each game state
//! - How moves produce the next state
//! - Win and tie conditions
//!
//! The engine calls into `RuleSet` but never interprets game-specific
//! concepts directly.

pub mod detector;
pub mod rule_set;

pub use detector::{Direction, RunDetector, Window};
pub use rule_set::{MoveList, RuleSet};
