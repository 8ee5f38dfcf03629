//! Othello for two players.
//!
//! - The four centre cells start in the diagonal pattern; Player 0 moves
//!   first
//! - A placement must flank at least one line of opponent discs, which
//!   are flipped
//! - A player with no legal placement passes: the turn stays with the
//!   player who just moved
//! - When neither player can place, the player with more discs wins;
//!   equal counts tie

use crate::core::{Board, GameState, Move, Player};
use crate::engine::Game;
use crate::rules::{MoveList, RuleSet};

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Othello rule set.
#[derive(Clone, Copy, Debug, Default)]
pub struct Othello;

impl Othello {
    fn step(board: &Board, from: Move, (dr, dc): (isize, isize)) -> Option<Move> {
        let row = from.row.checked_add_signed(dr)?;
        let col = from.col.checked_add_signed(dc)?;
        board.contains(row, col).then_some(Move::new(row, col))
    }

    /// Opponent discs that placing at `mv` would flip for `player`.
    fn captures(board: &Board, mv: Move, player: Player) -> Vec<Move> {
        if board.get(mv.row, mv.col).is_some() {
            return Vec::new();
        }

        let mut flipped = Vec::new();
        for dir in DIRECTIONS {
            let mut line = Vec::new();
            let mut cursor = Self::step(board, mv, dir);
            while let Some(pos) = cursor {
                match board.get(pos.row, pos.col) {
                    Some(p) if p == player => {
                        flipped.append(&mut line);
                        break;
                    }
                    Some(_) => line.push(pos),
                    None => break,
                }
                cursor = Self::step(board, pos, dir);
            }
        }
        flipped
    }

    fn placements(board: &Board, player: Player) -> MoveList {
        board
            .coordinates()
            .filter(|&mv| !Self::captures(board, mv, player).is_empty())
            .collect()
    }

    fn opponent(player: Player) -> Player {
        player.next(2)
    }

    /// Neither player can place a disc.
    fn is_over(board: &Board) -> bool {
        Self::placements(board, Player::Player0).is_empty()
            && Self::placements(board, Player::Player1).is_empty()
    }
}

impl RuleSet for Othello {
    fn name(&self) -> &str {
        "othello"
    }

    fn player_range(&self) -> std::ops::RangeInclusive<usize> {
        2..=2
    }

    fn default_dimensions(&self) -> (usize, usize) {
        (8, 8)
    }

    fn initial_board(&self, num_rows: usize, num_cols: usize) -> Board {
        let mut board = Board::empty(num_rows, num_cols);
        if num_rows >= 2 && num_cols >= 2 {
            let (r, c) = (num_rows / 2 - 1, num_cols / 2 - 1);
            board.set(r, c, Some(Player::Player0));
            board.set(r + 1, c + 1, Some(Player::Player0));
            board.set(r, c + 1, Some(Player::Player1));
            board.set(r + 1, c, Some(Player::Player1));
        }
        board
    }

    fn valid_moves(&self, game: &Game) -> MoveList {
        Self::placements(game.board(), game.to_move())
    }

    fn transition(&self, game: &Game, mv: Move) -> GameState {
        let player = game.to_move();
        let mut board = game.board().clone();
        for pos in Self::captures(&board, mv, player) {
            board.set(pos.row, pos.col, Some(player));
        }
        board.set(mv.row, mv.col, Some(player));

        let next = game.next_player();
        let to_move = if Self::placements(&board, next).is_empty()
            && !Self::placements(&board, player).is_empty()
        {
            player
        } else {
            next
        };

        GameState::new(to_move, game.move_num() + 1, board)
    }

    fn is_win(&self, game: &Game, player: Player) -> bool {
        let board = game.board();
        Self::is_over(board) && board.count(player) > board.count(Self::opponent(player))
    }

    fn is_tie(&self, game: &Game) -> bool {
        let board = game.board();
        Self::is_over(board) && board.count(Player::Player0) == board.count(Player::Player1)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::{GameConfig, GameError, GameStatus};

    fn new_game() -> Game {
        Game::new(Arc::new(Othello), GameConfig::new(8, 8, 2)).unwrap()
    }

    #[test]
    fn test_initial_position() {
        let game = new_game();
        assert_eq!(game.board().count(Player::Player0), 2);
        assert_eq!(game.board().count(Player::Player1), 2);
        assert_eq!(
            game.valid_moves().as_slice(),
            &[Move::new(2, 4), Move::new(3, 5), Move::new(4, 2), Move::new(5, 3)]
        );
    }

    #[test]
    fn test_placement_flips() {
        let mut game = new_game();
        game.apply_move(Move::new(2, 4)).unwrap();
        assert_eq!(game.board().get(3, 4), Some(Player::Player0));
        assert_eq!(game.board().count(Player::Player0), 4);
        assert_eq!(game.board().count(Player::Player1), 1);
        assert_eq!(game.to_move(), Player::Player1);
    }

    #[test]
    fn test_only_two_players() {
        let err = Game::new(Arc::new(Othello), GameConfig::new(8, 8, 3)).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidPlayerCount {
                requested: 3,
                min: 2,
                max: 2
            }
        );
    }

    #[test]
    fn test_last_disc_flipped_ends_game() {
        // Taking (0, 2) flips Player 1's last disc, so neither side can
        // place and the game ends.
        let board = Board::parse(
            "01..
             0...
             ....
             ....",
        )
        .unwrap();
        let game = Game::from_position(
            Arc::new(Othello),
            2,
            GameState::new(Player::Player0, 10, board),
        )
        .unwrap();
        let next = game.successor(Move::new(0, 2)).unwrap();
        assert_eq!(next.board().count(Player::Player1), 0);
        assert_eq!(next.status(), GameStatus::Player0Win);
    }

    #[test]
    fn test_pass_keeps_turn() {
        // Flipping (1, 0) leaves Player 1 with a disc at (0, 1) that can
        // only be flanked by Player 0, so Player 1 passes.
        let board = Board::parse(
            "01..
             1...
             ....
             ....",
        )
        .unwrap();
        let game = Game::from_position(
            Arc::new(Othello),
            2,
            GameState::new(Player::Player0, 6, board),
        )
        .unwrap();
        let next = game.successor(Move::new(2, 0)).unwrap();
        assert_eq!(next.board().get(1, 0), Some(Player::Player0));
        assert_eq!(next.to_move(), Player::Player0);
        assert_eq!(next.status(), GameStatus::Ongoing);
        assert_eq!(next.valid_moves().as_slice(), &[Move::new(0, 2)]);
    }

    #[test]
    fn test_equal_discs_when_blocked_is_tie() {
        let board = Board::parse(
            "0011
             ....",
        )
        .unwrap();
        let game = Game::from_position(
            Arc::new(Othello),
            2,
            GameState::new(Player::Player0, 4, board),
        )
        .unwrap();
        assert_eq!(game.status(), GameStatus::Tie);
    }
}
