//! PushUpFour, the reference rule set.
//!
//! - Empty board; Player 0 moves first
//! - A move inserts a chip at the bottom of a column whose top cell is
//!   still empty, pushing the chips already in that column up one row
//! - A player wins with `run_length` (default 4) consecutive chips in a
//!   row, column, or diagonal
//! - Two or more simultaneous runs (pushing can complete an opponent's
//!   line) or a full board without a run is a tie

use crate::core::{GameState, Move, Player};
use crate::engine::Game;
use crate::rules::{MoveList, RuleSet, RunDetector};

/// PushUpFour rule set.
#[derive(Clone, Copy, Debug)]
pub struct PushUpFour {
    detector: RunDetector,
}

impl PushUpFour {
    /// Rule set requiring runs of `run_length` chips.
    #[must_use]
    pub fn new(run_length: usize) -> Self {
        Self {
            detector: RunDetector::new(run_length),
        }
    }

    #[must_use]
    pub fn run_length(&self) -> usize {
        self.detector.run_length()
    }
}

impl Default for PushUpFour {
    fn default() -> Self {
        Self::new(4)
    }
}

impl RuleSet for PushUpFour {
    fn name(&self) -> &str {
        "push_up_four"
    }

    fn valid_moves(&self, game: &Game) -> MoveList {
        let bottom = game.num_rows() - 1;
        (0..game.num_cols())
            .filter(|&col| game.board().get(0, col).is_none())
            .map(|col| Move::new(bottom, col))
            .collect()
    }

    fn transition(&self, game: &Game, mv: Move) -> GameState {
        let bottom = game.num_rows() - 1;
        let mut board = game.board().clone();

        for row in 0..bottom {
            board.set(row, mv.col, board.get(row + 1, mv.col));
        }
        board.set(bottom, mv.col, Some(game.to_move()));

        GameState::new(game.next_player(), game.move_num() + 1, board)
    }

    fn is_win(&self, game: &Game, player: Player) -> bool {
        self.detector.has_run(game.board(), player)
    }

    fn is_tie(&self, game: &Game) -> bool {
        self.detector.is_tie(game.board(), game.num_players())
    }
}
