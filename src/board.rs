//! Immutable 19x19 board snapshot.

use std::fmt;
use std::str::FromStr;

use crate::constants::{CHAR_BLACK, CHAR_EMPTY, CHAR_WHITE, N};
use crate::error::{BoardError, NotAPlayer};

/// Occupancy of a single intersection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Decode a test-case character (`0`, `1` or `2`).
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            CHAR_EMPTY => Some(Cell::Empty),
            CHAR_BLACK => Some(Cell::Black),
            CHAR_WHITE => Some(Cell::White),
            _ => None,
        }
    }

    /// Encode as a test-case character.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => CHAR_EMPTY,
            Cell::Black => CHAR_BLACK,
            Cell::White => CHAR_WHITE,
        }
    }
}

/// A stone color that can own a winning line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Black moves first and is checked first.
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    /// Winner code printed by the verdict report.
    pub fn code(self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl TryFrom<Cell> for Player {
    type Error = NotAPlayer;

    fn try_from(cell: Cell) -> Result<Self, Self::Error> {
        match cell {
            Cell::Black => Ok(Player::Black),
            Cell::White => Ok(Player::White),
            Cell::Empty => Err(NotAPlayer),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "black"),
            Player::White => write!(f, "white"),
        }
    }
}

/// A full 19x19 position.
///
/// There is no way to build a partial board: every constructor either takes
/// a complete grid or validates its input into one. Once built, a board is
/// never modified in place; [`Board::with_stone`] returns a new board.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    pub fn from_cells(cells: [[Cell; N]; N]) -> Self {
        Self { cells }
    }

    /// Build a board from text rows of `0`/`1`/`2`.
    ///
    /// Fails unless there are exactly `N` rows of exactly `N` valid cells.
    /// Rows are trimmed before validation.
    pub fn from_rows<'a, I>(rows: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut cells = [[Cell::Empty; N]; N];
        let mut found = 0;

        for (row, line) in rows.into_iter().enumerate() {
            found += 1;
            if row >= N {
                continue;
            }

            let line = line.trim();
            let len = line.chars().count();
            if len != N {
                return Err(BoardError::RowLength { row: row + 1, len });
            }

            for (col, ch) in line.chars().enumerate() {
                cells[row][col] = Cell::from_char(ch).ok_or(BoardError::InvalidCell {
                    row: row + 1,
                    col: col + 1,
                    ch,
                })?;
            }
        }

        if found != N {
            return Err(BoardError::RowCount { found });
        }
        Ok(Self { cells })
    }

    /// Stone at `(row, col)`.
    ///
    /// Panics if either coordinate is outside `0..N`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < N && col < N,
            "board coordinate ({row}, {col}) out of range"
        );
        self.cells[row][col]
    }

    /// Signed lookup; `None` for anything off the board.
    #[inline]
    pub fn try_get(&self, row: isize, col: isize) -> Option<Cell> {
        if !Self::is_valid(row, col) {
            return None;
        }
        Some(self.cells[row as usize][col as usize])
    }

    #[inline]
    pub fn is_valid(row: isize, col: isize) -> bool {
        row >= 0 && row < N as isize && col >= 0 && col < N as isize
    }

    /// Copy of this board with one cell replaced.
    #[must_use]
    pub fn with_stone(mut self, row: usize, col: usize, cell: Cell) -> Self {
        assert!(
            row < N && col < N,
            "board coordinate ({row}, {col}) out of range"
        );
        self.cells[row][col] = cell;
        self
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; N]> + '_ {
        self.cells.iter()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse one board; blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(s.lines().map(str::trim).filter(|l| !l.is_empty()))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        write!(f, "{self}")?;
        write!(f, "}}")
    }
}
