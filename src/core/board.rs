//! Rectangular game board and move coordinates.
//!
//! Row 0 is the top of the board. Cells are stored in a persistent
//! `im::Vector` in row-major order, so cloning a board is O(1) and
//! the search can keep many sibling positions alive cheaply.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::player::Player;

/// Contents of one board cell: empty or owned by a player.
pub type BoardCell = Option<Player>;

/// A `(row, col)` coordinate on the board.
///
/// Ordering is row-major, which the search uses for deterministic
/// tie-breaking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Move> for (usize, usize) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed-shape grid of optional player-owned cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    num_rows: usize,
    num_cols: usize,
    cells: Vector<BoardCell>,
}

impl Board {
    /// Create a board with every cell empty.
    #[must_use]
    pub fn empty(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            cells: std::iter::repeat(None).take(num_rows * num_cols).collect(),
        }
    }

    /// Build a board from a matrix of rows.
    ///
    /// Fails with `InvalidDimensions` if the matrix is empty or ragged.
    pub fn from_rows(rows: Vec<Vec<BoardCell>>) -> Result<Self, GameError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if num_rows == 0 || num_cols == 0 || rows.iter().any(|r| r.len() != num_cols) {
            return Err(GameError::InvalidDimensions {
                rows: num_rows,
                cols: num_cols,
            });
        }

        Ok(Self {
            num_rows,
            num_cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse a board from text, one line per row.
    ///
    /// `.` is empty and the digits `0`-`3` are player seats. Whitespace
    /// inside a line is ignored. Mostly useful for constructing positions
    /// in tests.
    ///
    /// ```
    /// use npmm::core::{Board, Player};
    ///
    /// let board = Board::parse("..1\n.00").unwrap();
    /// assert_eq!(board.get(1, 2), Some(Player::Player0));
    /// assert_eq!(board.get(0, 2), Some(Player::Player1));
    /// ```
    pub fn parse(text: &str) -> Result<Self, GameError> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(index, line)| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match (c, c.to_digit(10)) {
                        ('.', _) => Ok(None),
                        (_, Some(d)) => Player::try_from(d as usize)
                            .map(Some)
                            .map_err(GameError::from),
                        (symbol, None) => Err(GameError::BoardSymbol {
                            symbol,
                            line: index + 1,
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Whether `(row, col)` lies on the board.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.num_rows && col < self.num_cols
    }

    /// Get the contents of a cell.
    ///
    /// Panics if the coordinate is off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> BoardCell {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) is outside a {}x{} board",
            self.num_rows,
            self.num_cols
        );
        self.cells[row * self.num_cols + col]
    }

    /// Overwrite a cell in place.
    ///
    /// Rule sets use this on their private copy while building the next
    /// board; callers only ever see the finished value.
    pub fn set(&mut self, row: usize, col: usize, cell: BoardCell) {
        assert!(
            self.contains(row, col),
            "cell ({row}, {col}) is outside a {}x{} board",
            self.num_rows,
            self.num_cols
        );
        self.cells.set(row * self.num_cols + col, cell);
    }

    /// Return a new board with one cell replaced.
    #[must_use]
    pub fn with_cell(&self, row: usize, col: usize, cell: BoardCell) -> Self {
        let mut next = self.clone();
        next.set(row, col, cell);
        next
    }

    /// Iterate over the cells of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = BoardCell> + '_ {
        let start = row * self.num_cols;
        self.cells.iter().skip(start).take(self.num_cols).copied()
    }

    /// Copy the board out as a `rows x cols` matrix.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<BoardCell>> {
        (0..self.num_rows).map(|r| self.row(r).collect()).collect()
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of cells owned by `player`.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    /// Iterate over every coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Move> {
        let cols = self.num_cols;
        (0..self.num_rows).flat_map(move |row| (0..cols).map(move |col| Move::new(row, col)))
    }
}

/// Display symbol for a cell, matching the browser front end.
#[must_use]
pub fn cell_symbol(cell: BoardCell) -> char {
    match cell {
        None => '.',
        Some(Player::Player0) => 'X',
        Some(Player::Player1) => 'O',
        Some(Player::Player2) => 'Z',
        Some(Player::Player3) => 'W',
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.num_rows {
            let line: String = self.row(row).map(cell_symbol).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
