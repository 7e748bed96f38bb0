//! Test-case batch parsing.
//!
//! A batch starts with the number of cases, followed by 19 rows of
//! `0`/`1`/`2` per case. Blank lines are ignored everywhere. A malformed case
//! only invalidates itself: it still consumes up to 19 lines, so the cases
//! after it are read from the right place. Nothing is allocated from the
//! header's count alone; cases are only created for rows actually present.

use crate::board::Board;
use crate::constants::N;
use crate::error::{BoardError, MissingCases, ParseError};

/// One case from a batch, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// 1-based position in the batch.
    pub index: usize,
    pub board: Result<Board, BoardError>,
}

/// Cases read from one input, plus the count its header announced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub declared: usize,
    pub cases: Vec<TestCase>,
}

impl Batch {
    /// Set when the input ran out before `declared` cases were read.
    pub fn missing(&self) -> Option<MissingCases> {
        (self.cases.len() < self.declared).then_some(MissingCases {
            declared: self.declared,
            found: self.cases.len(),
        })
    }
}

/// Split a batch into its cases.
///
/// Only a missing or unreadable case count fails the whole batch. The count
/// is an upper bound: reading stops once the input has no rows left, and
/// [`Batch::missing`] reports the shortfall. Lines after the last announced
/// case are ignored.
pub fn parse_batch(input: &str) -> Result<Batch, ParseError> {
    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());

    let header = lines.next().ok_or(ParseError::MissingCount)?;
    let declared: usize = header
        .parse()
        .map_err(|_| ParseError::InvalidCount(header.to_string()))?;

    let mut cases = Vec::new();
    while cases.len() < declared {
        let rows: Vec<&str> = lines.by_ref().take(N).collect();
        if rows.is_empty() {
            break;
        }
        cases.push(TestCase {
            index: cases.len() + 1,
            board: Board::from_rows(rows),
        });
    }
    Ok(Batch { declared, cases })
}

/// Render boards as a batch that [`parse_batch`] reads back.
pub fn write_batch(boards: &[Board]) -> String {
    let mut out = format!("{}\n", boards.len());
    for board in boards {
        out.push_str(&board.to_string());
    }
    out
}
