//! Game state and terminal status.
//!
//! ## GameState
//!
//! Snapshot of one position: whose turn it is, how many moves have been
//! applied, and the board. States are values; rule sets return a new
//! state from every transition instead of editing the current one.
//!
//! ## GameStatus
//!
//! `Ongoing` until a rule set reports a tie or a single winner. Any other
//! status is terminal and absorbing.

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::player::Player;

/// One position of a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Player whose turn it is.
    pub to_move: Player,

    /// Number of moves applied so far (starts at 0).
    pub move_num: usize,

    /// Current board.
    pub board: Board,
}

impl GameState {
    #[must_use]
    pub fn new(to_move: Player, move_num: usize, board: Board) -> Self {
        Self {
            to_move,
            move_num,
            board,
        }
    }
}

/// Outcome classification of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Ongoing,
    Tie,
    Player0Win,
    Player1Win,
    Player2Win,
    Player3Win,
}

impl GameStatus {
    /// Status for a win by `player`.
    #[must_use]
    pub const fn win(player: Player) -> Self {
        match player {
            Player::Player0 => GameStatus::Player0Win,
            Player::Player1 => GameStatus::Player1Win,
            Player::Player2 => GameStatus::Player2Win,
            Player::Player3 => GameStatus::Player3Win,
        }
    }

    /// The winning player, if this status is a win.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Player0Win => Some(Player::Player0),
            GameStatus::Player1Win => Some(Player::Player1),
            GameStatus::Player2Win => Some(Player::Player2),
            GameStatus::Player3Win => Some(Player::Player3),
            GameStatus::Ongoing | GameStatus::Tie => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            Some(player) => write!(f, "{player} wins"),
            None if *self == GameStatus::Tie => write!(f, "Tie"),
            None => write!(f, "Ongoing"),
        }
    }
}
