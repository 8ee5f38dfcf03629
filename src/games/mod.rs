//! Built-in rule sets and the registry that selects between them.
//!
//! - `PushUpFour`: chips enter from the bottom and push the column up
//! - `ConnectFour`: chips drop onto the lowest empty cell
//! - `Othello`: flanking captures, two players only
//!
//! PushUpFour and ConnectFour support 2-4 players to exercise the
//! engine's N-player paths.

mod connect_four;
mod othello;
mod push_up_four;
mod registry;

pub use connect_four::ConnectFour;
pub use othello::Othello;
pub use push_up_four::PushUpFour;
pub use registry::RuleSetRegistry;
