//! Board geometry and rule constants.
//!
//! Renju is always played on a 19x19 board and only an exact run of five
//! counts as a win, so both values are fixed at compile time.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 19;

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

// =============================================================================
// Rule Parameters
// =============================================================================

/// Exact run length that wins. Longer runs are overlines.
pub const WIN_LENGTH: usize = 5;

// =============================================================================
// Text Encoding
// =============================================================================

/// Empty cell in the test-case format.
pub const CHAR_EMPTY: char = '0';

/// Black stone in the test-case format.
pub const CHAR_BLACK: char = '1';

/// White stone in the test-case format.
pub const CHAR_WHITE: char = '2';

// =============================================================================
// Generator Defaults
// =============================================================================

/// Default number of boards written by `generate`.
pub const DEFAULT_CASES: usize = 10;

/// Default number of scattered stones per generated board.
pub const DEFAULT_STONES: usize = 40;

/// Shortest planted run (one short of a win).
pub const PLANT_MIN_LEN: usize = WIN_LENGTH - 1;

/// Longest planted run (an overline of seven).
pub const PLANT_MAX_LEN: usize = WIN_LENGTH + 2;
