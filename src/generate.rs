//! Random test-case generation.
//!
//! Boards are scattered with random stones and, half of the time, get a
//! straight run planted on top whose length straddles the win length (four
//! to seven), so a batch mixes near misses, wins and overlines.

use crate::board::{Board, Cell};
use crate::constants::{DEFAULT_STONES, N, PLANT_MAX_LEN, PLANT_MIN_LEN};
use crate::detector::Direction;

/// Generator settings.
#[derive(Debug, Clone, Copy)]
pub struct GenConfig {
    /// Random stones scattered per board before planting.
    pub stones: usize,
    /// Chance in percent of planting a run.
    pub plant_percent: u8,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            stones: DEFAULT_STONES,
            plant_percent: 50,
        }
    }
}

/// A straight run placed on a generated board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantedRun {
    pub row: usize,
    pub col: usize,
    pub dir: Direction,
    pub len: usize,
    pub cell: Cell,
}

impl PlantedRun {
    /// Cells covered by the run, from its first stone.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (dx, dy) = self.dir.delta();
        (0..self.len as isize).map(move |i| {
            (
                (self.row as isize + i * dy) as usize,
                (self.col as isize + i * dx) as usize,
            )
        })
    }

    pub fn apply(&self, board: Board) -> Board {
        self.cells()
            .fold(board, |b, (r, c)| b.with_stone(r, c, self.cell))
    }
}

/// Seeded board generator.
pub struct Generator {
    rng: fastrand::Rng,
    config: GenConfig,
}

impl Generator {
    pub fn new(seed: u64, config: GenConfig) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            config,
        }
    }

    fn stone(&mut self) -> Cell {
        if self.rng.bool() {
            Cell::Black
        } else {
            Cell::White
        }
    }

    /// Board with `config.stones` random stones (overlapping picks collapse).
    pub fn scatter(&mut self) -> Board {
        let mut board = Board::empty();
        for _ in 0..self.config.stones {
            let row = self.rng.usize(0..N);
            let col = self.rng.usize(0..N);
            let cell = self.stone();
            board = board.with_stone(row, col, cell);
        }
        board
    }

    /// A run of random color, direction and length that fits on the board.
    pub fn run(&mut self) -> PlantedRun {
        let len = self.rng.usize(PLANT_MIN_LEN..=PLANT_MAX_LEN);
        let dir = Direction::ALL[self.rng.usize(0..Direction::ALL.len())];
        let (dx, dy) = dir.delta();
        let span = len - 1;

        let col = self.rng.usize(0..N - span * dx as usize);
        let row = match dy {
            0 => self.rng.usize(0..N),
            1 => self.rng.usize(0..N - span),
            _ => self.rng.usize(span..N),
        };

        PlantedRun {
            row,
            col,
            dir,
            len,
            cell: self.stone(),
        }
    }

    /// Next board, with the run planted on it if one was.
    pub fn board(&mut self) -> (Board, Option<PlantedRun>) {
        let board = self.scatter();
        if self.rng.u8(0..100) < self.config.plant_percent {
            let run = self.run();
            (run.apply(board), Some(run))
        } else {
            (board, None)
        }
    }

    pub fn batch(&mut self, cases: usize) -> Vec<Board> {
        (0..cases).map(|_| self.board().0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_batch() {
        let a = Generator::new(42, GenConfig::default()).batch(5);
        let b = Generator::new(42, GenConfig::default()).batch(5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scatter_bounded_by_stone_count() {
        let config = GenConfig {
            stones: 30,
            plant_percent: 0,
        };
        let mut generator = Generator::new(7, config);
        for _ in 0..20 {
            let (board, run) = generator.board();
            assert!(run.is_none());
            assert!(board.count(Cell::Empty) >= N * N - 30);
        }
    }

    #[test]
    fn test_runs_stay_on_board() {
        let mut generator = Generator::new(1234, GenConfig::default());
        for _ in 0..500 {
            let run = generator.run();
            assert!((PLANT_MIN_LEN..=PLANT_MAX_LEN).contains(&run.len));
            assert_eq!(run.cells().count(), run.len);
            for (r, c) in run.cells() {
                assert!(r < N && c < N, "{run:?} leaves the board at ({r}, {c})");
            }
        }
    }

    #[test]
    fn test_planted_run_is_on_board() {
        let config = GenConfig {
            stones: 0,
            plant_percent: 100,
        };
        let mut generator = Generator::new(99, config);
        let (board, run) = generator.board();
        let run = run.unwrap();
        for (r, c) in run.cells() {
            assert_eq!(board.get(r, c), run.cell);
        }
        assert_eq!(board.count(run.cell), run.len);
    }
}
