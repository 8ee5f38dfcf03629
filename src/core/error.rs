//! Error types reported by the engine and the controller.
//!
//! Every rejection leaves game state untouched; the variant says which
//! rule was violated so a caller can re-render without guessing.

use super::board::Move;
use super::player::Player;
use super::state::GameStatus;

/// An integer that does not name a player seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{value} is not a valid player index")]
pub struct PlayerConversionError {
    pub value: usize,
}

/// Errors raised while creating or advancing a game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("player count {requested} is outside the supported range {min}..={max}")]
    InvalidPlayerCount {
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("board of {rows}x{cols} cells cannot hold a game")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("move {mv} is not a valid move in the current position")]
    InvalidMove { mv: Move },

    #[error("game is already over ({status:?}); no further moves are accepted")]
    MoveAfterTerminal { status: GameStatus },

    #[error("{submitted} tried to move but it is {to_move}'s turn")]
    OutOfTurn { submitted: Player, to_move: Player },

    #[error("{player} is computer-controlled; human moves are not accepted for it")]
    NotHumanTurn { player: Player },

    #[error("{player} is human-controlled; request a human move instead")]
    NotComputerTurn { player: Player },

    #[error("unexpected symbol {symbol:?} on line {line} of a board diagram")]
    BoardSymbol { symbol: char, line: usize },

    #[error("{player} cannot be to move in a {num_players}-player game")]
    NonParticipant { player: Player, num_players: usize },

    #[error(transparent)]
    PlayerConversion(#[from] PlayerConversionError),

    #[error("game is ongoing at move {move_num} but the rule set offers no valid moves")]
    SearchInvariantViolation { move_num: usize },

    #[error("rule set `{rule_set}` broke the engine contract: {detail}")]
    RuleSetViolation { rule_set: String, detail: String },

    #[error("no game is registered under handle {0}")]
    UnknownHandle(u64),

    #[error("no rule set is registered under the name `{0}`")]
    UnknownRuleSet(String),
}
