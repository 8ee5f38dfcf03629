//! Rule set trait for game implementations.
//!
//! Games implement `RuleSet` to define their rules:
//! - Initial board and starting player
//! - Which coordinates are legal moves
//! - How a move produces the next state
//! - Win and tie conditions

use std::fmt::Debug;
use std::ops::RangeInclusive;

use smallvec::SmallVec;

use crate::core::{Board, GameState, Move, Player, MAX_PLAYERS, MIN_PLAYERS};
use crate::engine::Game;

/// Move list returned by `valid_moves`.
///
/// Column-drop games rarely offer more than a dozen moves, so the common
/// case stays on the stack.
pub type MoveList = SmallVec<[Move; 16]>;

/// Rule set trait.
///
/// A rule set is a stateless strategy object: it holds only immutable
/// parameters and every method computes its answer from the `Game` it is
/// handed. One instance can therefore be shared (behind an `Arc`) by any
/// number of concurrent games.
///
/// ## Implementation Notes
///
/// - `valid_moves`: must return coordinates on the board; return empty
///   only when the position is terminal
/// - `transition`: only called with a move from `valid_moves`; must set
///   `move_num` to the current value plus one and hand the turn to a
///   participating player
/// - `is_tie`: checked before `is_win`, so a rule set decides here whether
///   simultaneous wins count as a tie
pub trait RuleSet: Debug + Send + Sync {
    /// Stable identifier used by the registry and in logs.
    fn name(&self) -> &str;

    /// Player counts this rule set supports.
    ///
    /// The engine additionally limits games to 2-4 players.
    fn player_range(&self) -> RangeInclusive<usize> {
        MIN_PLAYERS..=MAX_PLAYERS
    }

    /// Board shape used when the caller does not choose one.
    fn default_dimensions(&self) -> (usize, usize) {
        (6, 7)
    }

    /// Board a new game starts from.
    fn initial_board(&self, num_rows: usize, num_cols: usize) -> Board {
        Board::empty(num_rows, num_cols)
    }

    /// Player who makes the first move.
    fn initial_to_move(&self) -> Player {
        Player::Player0
    }

    /// Legal moves for the player to move.
    fn valid_moves(&self, game: &Game) -> MoveList;

    /// State after the player to move plays `mv`.
    fn transition(&self, game: &Game, mv: Move) -> GameState;

    /// Whether `player` currently satisfies the win condition.
    fn is_win(&self, game: &Game, player: Player) -> bool;

    /// Whether the position is a tie.
    fn is_tie(&self, game: &Game) -> bool;
}
