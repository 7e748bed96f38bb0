//! Verdict output for a parsed batch.
//!
//! Verdicts go to one writer (stdout in the binary) and per-case errors to
//! another (stderr), so the verdict stream stays machine-readable:
//!
//! ```text
//! 1        <- Black wins
//! 3 7      <- 1-indexed row and column of the run's first stone
//! 0        <- no winner
//! ```

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::board::Player;
use crate::detector::{judge, Verdict};
use crate::testcase::Batch;

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Verdict::NoWinner => write!(f, "0"),
            Verdict::Winner { player, row, col } => {
                write!(f, "{}\n{} {}", player.code(), row + 1, col + 1)
            }
        }
    }
}

/// Counts from one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub black_wins: usize,
    pub white_wins: usize,
    pub no_winner: usize,
    pub malformed: usize,
    /// Cases announced by the header but absent from the input.
    pub missing: usize,
}

impl Summary {
    pub fn evaluated(&self) -> usize {
        self.black_wins + self.white_wins + self.no_winner
    }

    /// Every announced case was present and well-formed.
    pub fn is_clean(&self) -> bool {
        self.malformed == 0 && self.missing == 0
    }

    fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Winner {
                player: Player::Black,
                ..
            } => self.black_wins += 1,
            Verdict::Winner {
                player: Player::White,
                ..
            } => self.white_wins += 1,
            Verdict::NoWinner => self.no_winner += 1,
        }
    }
}

/// Output options for [`run_batch`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Echo each board after its verdict.
    pub show_board: bool,
}

/// Judge every case, writing verdicts to `out` and malformed-case errors to
/// `err`. A malformed case never stops the cases after it; a short batch is
/// reported once, after the last case.
pub fn run_batch<W, E>(
    batch: &Batch,
    options: ReportOptions,
    out: &mut W,
    err: &mut E,
) -> io::Result<Summary>
where
    W: Write,
    E: Write,
{
    info!(
        declared = batch.declared,
        cases = batch.cases.len(),
        "evaluating batch"
    );
    let mut summary = Summary::default();

    for case in &batch.cases {
        match &case.board {
            Ok(board) => {
                let verdict = judge(board);
                debug!(case = case.index, ?verdict, "judged");
                summary.record(verdict);

                writeln!(out, "{verdict}")?;
                if options.show_board {
                    writeln!(out, "{board}")?;
                }
            }
            Err(e) => {
                warn!(case = case.index, error = %e, "malformed test case");
                summary.malformed += 1;
                writeln!(err, "ERROR: test case {}: {e}", case.index)?;
            }
        }
    }

    if let Some(missing) = batch.missing() {
        warn!(%missing, "batch ended early");
        summary.missing = missing.declared - missing.found;
        writeln!(err, "ERROR: {missing}")?;
    }

    out.flush()?;
    info!(
        evaluated = summary.evaluated(),
        malformed = summary.malformed,
        missing = summary.missing,
        black = summary.black_wins,
        white = summary.white_wins,
        "batch finished"
    );
    Ok(summary)
}
