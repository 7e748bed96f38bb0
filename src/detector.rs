//! Exact-five win detection.
//!
//! A player wins with an unbroken run of exactly [`WIN_LENGTH`] stones.
//! Runs of six or more (overlines) do not count. Every run is found from its
//! first cell by scanning forward along one of four directions, so the
//! mirrored directions never need to be checked.

use crate::board::{Board, Cell, Player};
use crate::constants::{N, WIN_LENGTH};

/// One of the four line axes, as a (column step, row step) vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl Direction {
    /// Scan priority when one anchor starts several runs.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// Column and row step: `(dx, dy)`.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (1, -1),
        }
    }
}

/// Outcome of a win query for one player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WinResult {
    NoWin,
    /// First cell of the winning run, 0-indexed.
    Win { row: usize, col: usize },
}

impl WinResult {
    pub fn position(self) -> Option<(usize, usize)> {
        match self {
            WinResult::Win { row, col } => Some((row, col)),
            WinResult::NoWin => None,
        }
    }
}

/// Scans one board for exact-five runs.
///
/// Holds nothing but a borrow of the board, so every query is a pure
/// function of the board and the player.
#[derive(Copy, Clone, Debug)]
pub struct WinDetector<'a> {
    board: &'a Board,
}

impl<'a> WinDetector<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Find the first run of exactly five `player` stones.
    ///
    /// Cells are visited row by row, left to right, and directions in
    /// [`Direction::ALL`] order; the first qualifying run wins.
    pub fn check(&self, player: Player) -> WinResult {
        let stone = Cell::from(player);

        for row in 0..N {
            for col in 0..N {
                if self.board.get(row, col) != stone {
                    continue;
                }
                for dir in Direction::ALL {
                    if self.is_exact_five(row, col, dir, stone) {
                        return WinResult::Win { row, col };
                    }
                }
            }
        }
        WinResult::NoWin
    }

    /// Count `stone` cells starting at the anchor, capped at [`WIN_LENGTH`].
    fn run_length(&self, row: usize, col: usize, dir: Direction, stone: Cell) -> usize {
        let (dx, dy) = dir.delta();
        let (r0, c0) = (row as isize, col as isize);

        (0..WIN_LENGTH as isize)
            .take_while(|&i| self.board.try_get(r0 + i * dy, c0 + i * dx) == Some(stone))
            .count()
    }

    /// Five in a row whose outer neighbors are not the same color.
    ///
    /// Only the cell before the anchor and the cell after the fifth stone
    /// are inspected. Off-board neighbors never extend a line.
    fn is_exact_five(&self, row: usize, col: usize, dir: Direction, stone: Cell) -> bool {
        if self.run_length(row, col, dir, stone) != WIN_LENGTH {
            return false;
        }

        let (dx, dy) = dir.delta();
        let (r0, c0) = (row as isize, col as isize);
        let len = WIN_LENGTH as isize;

        let before = self.board.try_get(r0 - dy, c0 - dx);
        let after = self.board.try_get(r0 + len * dy, c0 + len * dx);
        before != Some(stone) && after != Some(stone)
    }
}

/// Has `player` already won on `board`, and where?
///
/// `Cell::Empty` is not a player; asking about it answers [`WinResult::NoWin`]
/// without scanning. Use [`WinDetector::check`] to rule that out statically.
pub fn evaluate(board: &Board, player: Cell) -> WinResult {
    match Player::try_from(player) {
        Ok(player) => WinDetector::new(board).check(player),
        Err(_) => WinResult::NoWin,
    }
}

/// Combined result for both players on one board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    NoWinner,
    Winner {
        player: Player,
        row: usize,
        col: usize,
    },
}

/// Check Black, then White. Black is reported if both have a five.
pub fn judge(board: &Board) -> Verdict {
    let detector = WinDetector::new(board);
    for player in Player::ALL {
        if let WinResult::Win { row, col } = detector.check(player) {
            return Verdict::Winner { player, row, col };
        }
    }
    Verdict::NoWinner
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Place `len` stones from `(row, col)` along `dir`.
    fn line(board: Board, row: usize, col: usize, dir: Direction, len: usize, cell: Cell) -> Board {
        let (dx, dy) = dir.delta();
        (0..len as isize).fold(board, |b, i| {
            let r = row as isize + i * dy;
            let c = col as isize + i * dx;
            b.with_stone(r as usize, c as usize, cell)
        })
    }

    #[test]
    fn test_empty_board_no_win() {
        let board = Board::empty();
        assert_eq!(evaluate(&board, Cell::Black), WinResult::NoWin);
        assert_eq!(evaluate(&board, Cell::White), WinResult::NoWin);
        assert_eq!(judge(&board), Verdict::NoWinner);
    }

    #[test]
    fn test_horizontal_five_at_origin() {
        let board = line(Board::empty(), 0, 0, Direction::Horizontal, 5, Cell::Black);
        assert_eq!(evaluate(&board, Cell::Black), WinResult::Win { row: 0, col: 0 });
        assert_eq!(evaluate(&board, Cell::White), WinResult::NoWin);
    }

    #[test]
    fn test_six_is_overline() {
        let board = line(Board::empty(), 0, 0, Direction::Horizontal, 6, Cell::Black);
        assert_eq!(evaluate(&board, Cell::Black), WinResult::NoWin);
    }

    #[test]
    fn test_overline_in_middle_of_row() {
        let board = line(Board::empty(), 9, 3, Direction::Horizontal, 7, Cell::White);
        assert_eq!(evaluate(&board, Cell::White), WinResult::NoWin);
    }

    #[test]
    fn test_diagonal_down_five() {
        let board = line(Board::empty(), 2, 2, Direction::DiagonalDown, 5, Cell::White);
        assert_eq!(evaluate(&board, Cell::White), WinResult::Win { row: 2, col: 2 });
    }

    #[test]
    fn test_diagonal_up_five_anchored_at_bottom_left() {
        // Runs are only counted forward, so the top stone of an up-diagonal
        // is reached first but cannot anchor it.
        let board = line(Board::empty(), 10, 4, Direction::DiagonalUp, 5, Cell::Black);
        assert_eq!(
            evaluate(&board, Cell::Black),
            WinResult::Win { row: 10, col: 4 }
        );
    }

    #[test]
    fn test_vertical_five() {
        let board = line(Board::empty(), 7, 11, Direction::Vertical, 5, Cell::Black);
        assert_eq!(
            evaluate(&board, Cell::Black),
            WinResult::Win { row: 7, col: 11 }
        );
    }

    #[test]
    fn test_four_is_not_enough() {
        for dir in Direction::ALL {
            let board = line(Board::empty(), 9, 9, dir, 4, Cell::Black);
            assert_eq!(evaluate(&board, Cell::Black), WinResult::NoWin, "{dir:?}");
        }
    }

    #[test]
    fn test_blocked_by_opponent_still_wins() {
        let board = line(Board::empty(), 5, 5, Direction::Horizontal, 5, Cell::Black)
            .with_stone(5, 4, Cell::White)
            .with_stone(5, 10, Cell::White);
        assert_eq!(evaluate(&board, Cell::Black), WinResult::Win { row: 5, col: 5 });
    }

    #[test]
    fn test_edges_do_not_extend_line() {
        let right = line(Board::empty(), 3, N - 5, Direction::Horizontal, 5, Cell::Black);
        assert_eq!(
            evaluate(&right, Cell::Black),
            WinResult::Win { row: 3, col: N - 5 }
        );

        let bottom = line(Board::empty(), N - 5, 0, Direction::Vertical, 5, Cell::White);
        assert_eq!(
            evaluate(&bottom, Cell::White),
            WinResult::Win { row: N - 5, col: 0 }
        );

        let corner = line(Board::empty(), N - 5, N - 5, Direction::DiagonalDown, 5, Cell::Black);
        assert_eq!(
            evaluate(&corner, Cell::Black),
            WinResult::Win {
                row: N - 5,
                col: N - 5
            }
        );

        let up = line(Board::empty(), N - 1, 0, Direction::DiagonalUp, 5, Cell::Black);
        assert_eq!(
            evaluate(&up, Cell::Black),
            WinResult::Win { row: N - 1, col: 0 }
        );
    }

    #[test]
    fn test_overline_skipped_for_later_five() {
        let board = line(Board::empty(), 0, 0, Direction::Horizontal, 6, Cell::Black);
        let board = line(board, 12, 2, Direction::Vertical, 5, Cell::Black);
        assert_eq!(
            evaluate(&board, Cell::Black),
            WinResult::Win { row: 12, col: 2 }
        );
    }

    #[test]
    fn test_direction_priority_at_shared_anchor() {
        let board = line(Board::empty(), 4, 4, Direction::Vertical, 5, Cell::Black);
        let board = line(board, 4, 4, Direction::DiagonalDown, 5, Cell::Black);
        assert_eq!(evaluate(&board, Cell::Black), WinResult::Win { row: 4, col: 4 });
    }

    #[test]
    fn test_row_major_order_picks_topmost_run() {
        let board = line(Board::empty(), 10, 0, Direction::Horizontal, 5, Cell::White);
        let board = line(board, 3, 14, Direction::Horizontal, 5, Cell::White);
        assert_eq!(
            evaluate(&board, Cell::White),
            WinResult::Win { row: 3, col: 14 }
        );
    }

    #[test]
    fn test_empty_is_not_a_player() {
        let board = Board::empty();
        assert_eq!(evaluate(&board, Cell::Empty), WinResult::NoWin);
    }

    #[test]
    fn test_judge_prefers_black() {
        let board = line(Board::empty(), 0, 0, Direction::Horizontal, 5, Cell::White);
        let board = line(board, 18, 0, Direction::Horizontal, 5, Cell::Black);
        assert_eq!(
            judge(&board),
            Verdict::Winner {
                player: Player::Black,
                row: 18,
                col: 0
            }
        );
    }

    #[test]
    fn test_judge_white_only() {
        let board = line(Board::empty(), 1, 1, Direction::Vertical, 5, Cell::White);
        assert_eq!(
            judge(&board),
            Verdict::Winner {
                player: Player::White,
                row: 1,
                col: 1
            }
        );
    }

    #[test]
    fn test_win_result_helpers() {
        assert_eq!(WinResult::Win { row: 1, col: 2 }.position(), Some((1, 2)));
        assert_eq!(WinResult::NoWin.position(), None);
    }
}
