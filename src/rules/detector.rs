//! Run detection shared by N-in-a-row rule sets.
//!
//! A *window* is `run_length` consecutive cells along a row, a column, a
//! down-right diagonal, or a down-left diagonal. A player wins when some
//! window holds only that player's pieces. Checking one player costs
//! O(rows x cols x run_length).

use smallvec::SmallVec;

use crate::core::{Board, BoardCell, Move, Player};

/// Line direction a window extends in from its anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Row,
    /// Top to bottom along a column.
    Column,
    /// Towards the bottom-right corner; anchored at the top-left cell.
    DownRight,
    /// Towards the bottom-left corner; anchored at the top-right cell.
    DownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Row,
        Direction::Column,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Cell reached after `k` steps from `anchor`.
    fn offset(self, anchor: Move, k: usize) -> Move {
        match self {
            Direction::Row => Move::new(anchor.row, anchor.col + k),
            Direction::Column => Move::new(anchor.row + k, anchor.col),
            Direction::DownRight => Move::new(anchor.row + k, anchor.col + k),
            Direction::DownLeft => Move::new(anchor.row + k, anchor.col - k),
        }
    }
}

/// A run-length window on a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Window {
    pub anchor: Move,
    pub direction: Direction,
    pub len: usize,
}

impl Window {
    /// Coordinates covered by this window, starting at the anchor.
    pub fn coordinates(self) -> impl Iterator<Item = Move> {
        (0..self.len).map(move |k| self.direction.offset(self.anchor, k))
    }

    /// Cell contents covered by this window.
    pub fn cells(self, board: &Board) -> impl Iterator<Item = BoardCell> + '_ {
        self.coordinates().map(|m| board.get(m.row, m.col))
    }
}

/// Detects runs of a fixed length on rectangular boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunDetector {
    run_length: usize,
}

impl RunDetector {
    /// Create a detector for runs of `run_length` cells.
    ///
    /// Panics if `run_length` is zero.
    #[must_use]
    pub fn new(run_length: usize) -> Self {
        assert!(run_length > 0, "Run length must be at least 1");
        Self { run_length }
    }

    #[must_use]
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// Every window that fits on a `num_rows x num_cols` board.
    ///
    /// Yields nothing along a direction the board is too small for.
    pub fn windows(&self, num_rows: usize, num_cols: usize) -> impl Iterator<Item = Window> {
        let len = self.run_length;
        // Last anchor index along an axis, or None if no window fits.
        let last = move |extent: usize| extent.checked_sub(len);

        Direction::ALL.into_iter().flat_map(move |direction| {
            let (rows, cols) = match direction {
                Direction::Row => (Some(0..num_rows), last(num_cols).map(|c| 0..c + 1)),
                Direction::Column => (last(num_rows).map(|r| 0..r + 1), Some(0..num_cols)),
                Direction::DownRight => (
                    last(num_rows).map(|r| 0..r + 1),
                    last(num_cols).map(|c| 0..c + 1),
                ),
                Direction::DownLeft => (
                    last(num_rows).map(|r| 0..r + 1),
                    last(num_cols).map(|_| len - 1..num_cols),
                ),
            };
            let rows = rows.unwrap_or(0..0);
            let cols = cols.unwrap_or(0..0);

            rows.flat_map(move |row| {
                cols.clone().map(move |col| Window {
                    anchor: Move::new(row, col),
                    direction,
                    len,
                })
            })
        })
    }

    /// Whether `player` owns every cell of some window.
    #[must_use]
    pub fn has_run(&self, board: &Board, player: Player) -> bool {
        self.windows(board.num_rows(), board.num_cols())
            .any(|w| w.cells(board).all(|cell| cell == Some(player)))
    }

    /// Players among the first `num_players` that currently have a run,
    /// in turn order.
    #[must_use]
    pub fn winners(&self, board: &Board, num_players: usize) -> SmallVec<[Player; 4]> {
        Player::all(num_players)
            .filter(|&p| self.has_run(board, p))
            .collect()
    }

    /// Tie test shared by run-based rule sets.
    ///
    /// A tie is either more than one player holding a run at once, or a
    /// full board on which nobody holds one.
    #[must_use]
    pub fn is_tie(&self, board: &Board, num_players: usize) -> bool {
        let winners = self.winners(board, num_players);
        winners.len() > 1 || (winners.is_empty() && board.is_full())
    }
}
