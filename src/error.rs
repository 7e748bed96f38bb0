//! Error types for board construction and test-case parsing.

/// A test case that does not describe a full 19x19 grid.
///
/// Row and column numbers are 1-based, matching the verdict output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 19 rows but found {found}")]
    RowCount { found: usize },

    #[error("row {row} has {len} cells, expected 19")]
    RowLength { row: usize, len: usize },

    #[error("invalid cell {ch:?} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, ch: char },
}

/// A problem with the batch header that prevents reading any case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty, expected a test case count")]
    MissingCount,

    #[error("invalid test case count {0:?}")]
    InvalidCount(String),
}

/// The input ended before every announced case was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected {declared} test cases but found {found}")]
pub struct MissingCases {
    pub declared: usize,
    pub found: usize,
}

/// `Cell::Empty` used where a stone color is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("empty cell is not a player")]
pub struct NotAPlayer;
