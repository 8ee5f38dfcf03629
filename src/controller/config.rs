//! Controller configuration and seating.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::search::SearchConfig;

/// Who makes the moves for a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Moves arrive through `submit_human_move`.
    Human,
    /// Moves are chosen by the search through `request_ai_move`.
    Computer,
}

impl Seat {
    /// Player 0 is human, everyone else is the computer.
    #[must_use]
    pub fn default_layout(num_players: usize) -> Vec<Seat> {
        (0..num_players)
            .map(|i| if i == Player::Player0.index() { Seat::Human } else { Seat::Computer })
            .collect()
    }
}

/// Settings shared by every game a controller creates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Board size as `(rows, cols)`. `None` uses the rule set's default.
    pub dimensions: Option<(usize, usize)>,

    /// Search settings for computer seats.
    pub search: SearchConfig,
}

impl ControllerConfig {
    /// Create a new config with a fixed board size.
    pub fn with_dimensions(mut self, num_rows: usize, num_cols: usize) -> Self {
        self.dimensions = Some((num_rows, num_cols));
        self
    }

    /// Create a new config with custom search settings.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}
