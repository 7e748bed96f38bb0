//! Renju-Check: exact-five win detection for 19x19 Renju positions.
//!
//! Given a board, this crate answers "has this player already won, and
//! where?". Only a run of exactly five stones wins; six or more in a row is
//! an overline and does not count.
//!
//! ## Modules
//!
//! - [`constants`] - Board size, win length and text encoding
//! - [`board`] - Immutable board snapshot and stone colors
//! - [`detector`] - Win detection and the per-board verdict
//! - [`testcase`] - Parsing batches of test cases
//! - [`report`] - Writing verdicts for a batch
//! - [`generate`] - Random test-case generation
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use renju_check::board::{Board, Cell};
//! use renju_check::detector::{evaluate, WinResult};
//!
//! let board = (0..5).fold(Board::empty(), |b, col| b.with_stone(0, col, Cell::Black));
//! assert_eq!(evaluate(&board, Cell::Black), WinResult::Win { row: 0, col: 0 });
//!
//! // A sixth stone makes it an overline.
//! let board = board.with_stone(0, 5, Cell::Black);
//! assert_eq!(evaluate(&board, Cell::Black), WinResult::NoWin);
//! ```

pub mod board;
pub mod constants;
pub mod detector;
pub mod error;
pub mod generate;
pub mod report;
pub mod testcase;
