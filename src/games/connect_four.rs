//! Connect-Four style gravity variant.
//!
//! Chips drop onto the lowest empty cell of a column. Wins and ties use
//! the same run detection as PushUpFour.

use crate::core::{GameState, Move, Player};
use crate::engine::Game;
use crate::rules::{MoveList, RuleSet, RunDetector};

/// Gravity drop rule set.
#[derive(Clone, Copy, Debug)]
pub struct ConnectFour {
    detector: RunDetector,
}

impl ConnectFour {
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

    /// Lowest empty row in `col`, if the column is not full.
    fn landing_row(game: &Game, col: usize) -> Option<usize> {
        (0..game.num_rows())
            .rev()
            .find(|&row| game.board().get(row, col).is_none())
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new(4)
    }
}

impl RuleSet for ConnectFour {
    fn name(&self) -> &str {
        "connect_four"
    }

    fn valid_moves(&self, game: &Game) -> MoveList {
        (0..game.num_cols())
            .filter_map(|col| Self::landing_row(game, col).map(|row| Move::new(row, col)))
            .collect()
    }

    fn transition(&self, game: &Game, mv: Move) -> GameState {
        let board = game.board().with_cell(mv.row, mv.col, Some(game.to_move()));
        GameState::new(game.next_player(), game.move_num() + 1, board)
    }

    fn is_win(&self, game: &Game, player: Player) -> bool {
        self.detector.has_run(game.board(), player)
    }

    fn is_tie(&self, game: &Game) -> bool {
        self.detector.is_tie(game.board(), game.num_players())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::{GameConfig, GameStatus};

    fn game(rows: usize, cols: usize, players: usize) -> Game {
        Game::new(Arc::new(ConnectFour::default()), GameConfig::new(rows, cols, players)).unwrap()
    }

    #[test]
    fn test_chips_stack_from_the_bottom() {
        let mut game = game(6, 7, 2);
        game.apply_move(Move::new(5, 3)).unwrap();
        assert!(game.valid_moves().contains(&Move::new(4, 3)));
        assert!(!game.valid_moves().contains(&Move::new(5, 3)));

        game.apply_move(Move::new(4, 3)).unwrap();
        assert_eq!(game.board().get(5, 3), Some(Player::Player0));
        assert_eq!(game.board().get(4, 3), Some(Player::Player1));
    }

    #[test]
    fn test_diagonal_win() {
        let mut game = game(6, 7, 2);
        let moves = [
            (5, 0), (5, 1), (4, 1), (5, 2), (4, 2), (5, 3),
            (3, 2), (4, 3), (3, 3), (5, 6), (2, 3),
        ];
        for mv in moves {
            game.apply_move(Move::from(mv)).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Player0Win);
        assert_eq!(game.move_num(), 11);
    }

    #[test]
    fn test_full_board_tie() {
        // 2x2 board cannot hold a run of 4; filling it is a tie.
        let mut game = game(2, 2, 2);
        for mv in [(1, 0), (1, 1), (0, 0), (0, 1)] {
            assert_eq!(game.status(), GameStatus::Ongoing);
            game.apply_move(Move::from(mv)).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Tie);
    }

    #[test]
    fn test_four_players_rotate() {
        let mut game = game(6, 7, 4);
        let seen: Vec<_> = (0..8)
            .map(|col| {
                let player = game.to_move();
                game.apply_move(Move::new(5 - col / 7, col % 7)).unwrap();
                player
            })
            .collect();
        assert_eq!(
            seen,
            vec![
                Player::Player0, Player::Player1, Player::Player2, Player::Player3,
                Player::Player0, Player::Player1, Player::Player2, Player::Player3,
            ]
        );
    }
}
