// board.rs - Grid of cells and the per-tick evolution step

use rand::Rng;
use tracing::{debug, info, warn};

use crate::cell::{Cell, CellState};
use crate::rules;

/// Largest row or column count a board accepts.
pub const MAX_DIMENSION: usize = 400;

/// What a single tick did to the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Blank cells that a neighbor spread into.
    pub spawned: usize,
    /// Occupied cells taken over by a stronger neighbor.
    pub overtaken: usize,
}

impl StepReport {
    pub fn changed(&self) -> usize {
        self.spawned + self.overtaken
    }
}

/// Cell count per state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Population {
    pub blank: usize,
    pub rock: usize,
    pub paper: usize,
    pub scissors: usize,
}

impl Population {
    pub fn occupied(&self) -> usize {
        self.rock + self.paper + self.scissors
    }

    pub fn count(&self, state: CellState) -> usize {
        match state {
            CellState::Blank    => self.blank,
            CellState::Rock     => self.rock,
            CellState::Paper    => self.paper,
            CellState::Scissors => self.scissors,
        }
    }
}

/// Rectangular grid of cells, stored row-major.
///
/// `next` is the second half of a double buffer: a tick reads only from
/// `cells` and writes only to `next`, then the two are swapped.
#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    next: Vec<Cell>,
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Board {
    /// Build a fresh all-blank board. Dimensions are clamped to `1..=MAX_DIMENSION`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = clamp_dimension("rows", rows);
        let cols = clamp_dimension("cols", cols);
        let cells = build_cells(rows, cols);
        Self {
            rows,
            cols,
            next: cells.clone(),
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A board always holds at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    /// Cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the board.
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        assert!(
            self.contains(x, y),
            "cell ({x}, {y}) outside {}x{} board",
            self.cols,
            self.rows
        );
        &self.cells[self.index(x, y)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Rows top to bottom, each left to right.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Discard every cell and rebuild with the current dimensions.
    pub fn reset(&mut self) {
        self.cells = build_cells(self.rows, self.cols);
        self.next = self.cells.clone();
        info!(rows = self.rows, cols = self.cols, "Board reset");
    }

    /// Discard every cell and rebuild with new dimensions.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = clamp_dimension("rows", rows);
        self.cols = clamp_dimension("cols", cols);
        self.reset();
    }

    /// Set a cell directly. Returns `false` (and does nothing) when the
    /// coordinates fall outside the board.
    pub fn paint(&mut self, x: usize, y: usize, state: CellState) -> bool {
        if !self.contains(x, y) {
            debug!(x, y, rows = self.rows, cols = self.cols, "Paint outside board ignored");
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx].paint(state);
        true
    }

    /// Moore neighborhood of `(x, y)` clipped to the board, without `(x, y)` itself.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + use<> {
        debug_assert!(self.contains(x, y));
        let xs = x.saturating_sub(1)..=(x + 1).min(self.cols - 1);
        let ys = y.saturating_sub(1)..=(y + 1).min(self.rows - 1);
        ys.flat_map(move |ny| xs.clone().map(move |nx| (nx, ny)))
            .filter(move |&pos| pos != (x, y))
    }

    /// Uniformly chosen neighbor of `(x, y)`. `None` only on a 1x1 board.
    pub fn random_neighbor<R: Rng + ?Sized>(&self, x: usize, y: usize, rng: &mut R) -> Option<(usize, usize)> {
        let width = (x + 1).min(self.cols - 1) - x.saturating_sub(1) + 1;
        let height = (y + 1).min(self.rows - 1) - y.saturating_sub(1) + 1;
        let candidates = width * height - 1;
        if candidates == 0 {
            return None;
        }
        let pick = rng.random_range(0..candidates);
        self.neighbors(x, y).nth(pick)
    }

    /// Advance the board by one tick.
    ///
    /// Every cell compares itself against one random neighbor as they stood
    /// before the tick; nothing written during the tick is read back.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> StepReport {
        let mut report = StepReport::default();
        self.next.clone_from(&self.cells);

        for y in 0..self.rows {
            for x in 0..self.cols {
                let Some((nx, ny)) = self.random_neighbor(x, y, rng) else {
                    continue;
                };
                let current = self.cells[self.index(x, y)];
                let neighbor = self.cells[self.index(nx, ny)];

                if !rules::can_spread(current.state, neighbor.state, neighbor.generation) {
                    continue;
                }

                let idx = self.index(x, y);
                let target = &mut self.next[idx];
                if current.state.is_blank() {
                    target.generation = neighbor.generation + 1;   // Spread into empty space
                    if !neighbor.state.is_blank() {
                        report.spawned += 1;
                    }
                } else {
                    target.generation = 0;                         // Overtaken
                    report.overtaken += 1;
                }
                target.state = neighbor.state;
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        report
    }

    pub fn population(&self) -> Population {
        let mut pop = Population::default();
        for cell in &self.cells {
            match cell.state {
                CellState::Blank    => pop.blank += 1,
                CellState::Rock     => pop.rock += 1,
                CellState::Paper    => pop.paper += 1,
                CellState::Scissors => pop.scissors += 1,
            }
        }
        pop
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.cols + x
    }
}

fn build_cells(rows: usize, cols: usize) -> Vec<Cell> {
    (0..rows)
        .flat_map(|y| (0..cols).map(move |x| Cell::new(x, y)))
        .collect()
}

fn clamp_dimension(name: &str, value: usize) -> usize {
    let clamped = value.clamp(1, MAX_DIMENSION);
    if clamped != value {
        warn!(dimension = name, requested = value, clamped, "Board dimension out of range");
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{GENERATION_CAP, INITIAL_GENERATION, PAINTED_GENERATION};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    /// Board whose every cell is `state` at `generation`.
    fn filled(rows: usize, cols: usize, state: CellState, generation: u32) -> Board {
        let mut board = Board::new(rows, cols);
        for y in 0..rows {
            for x in 0..cols {
                set(&mut board, x, y, state, generation);
            }
        }
        board
    }

    fn set(board: &mut Board, x: usize, y: usize, state: CellState, generation: u32) {
        board.paint(x, y, state);
        let idx = board.index(x, y);
        board.cells[idx].generation = generation;
    }

    #[test]
    fn new_board_is_blank_at_initial_generation() {
        let board = Board::new(4, 6);
        assert_eq!((board.rows(), board.cols(), board.len()), (4, 6, 24));
        for cell in board.iter() {
            assert_eq!(cell.state, CellState::Blank);
            assert_eq!(cell.generation, INITIAL_GENERATION);
        }
    }

    #[test]
    fn cells_know_their_position() {
        let board = Board::new(3, 5);
        for (y, row) in board.iter_rows().enumerate() {
            assert_eq!(row.len(), 5);
            for (x, cell) in row.iter().enumerate() {
                assert_eq!((cell.x(), cell.y()), (x, y));
            }
        }
    }

    #[test]
    fn dimensions_are_clamped() {
        let board = Board::new(0, MAX_DIMENSION + 10);
        assert_eq!(board.rows(), 1);
        assert_eq!(board.cols(), MAX_DIMENSION);
    }

    #[test]
    fn paint_sets_state_and_zero_generation() {
        let mut board = Board::new(5, 5);
        set(&mut board, 2, 3, CellState::Paper, 7);
        assert!(board.paint(2, 3, CellState::Rock));
        let cell = board.cell(2, 3);
        assert_eq!(cell.state, CellState::Rock);
        assert_eq!(cell.generation, PAINTED_GENERATION);
    }

    #[test]
    fn paint_outside_board_is_ignored() {
        let mut board = Board::new(3, 3);
        assert!(!board.paint(3, 0, CellState::Rock));
        assert!(!board.paint(0, 3, CellState::Rock));
        assert_eq!(board.population().occupied(), 0);
    }

    #[test]
    #[should_panic]
    fn cell_outside_board_panics() {
        let board = Board::new(3, 3);
        let _ = board.cell(3, 1);
    }

    #[test]
    fn reset_restores_blank_board() {
        let mut board = filled(4, 4, CellState::Scissors, 5);
        board.reset();
        assert_eq!(board, Board::new(4, 4));
    }

    #[test]
    fn resize_discards_prior_state() {
        let mut board = filled(5, 5, CellState::Rock, 2);
        board.resize(3, 3);
        assert_eq!(board.len(), 9);
        assert_eq!(board.population().blank, 9);
        assert!(board.iter().all(|c| c.generation == INITIAL_GENERATION));
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let board = Board::new(5, 5);
        let n: Vec<_> = board.neighbors(2, 2).collect();
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&(2, 2)));
    }

    #[test]
    fn corner_and_edge_neighbor_counts() {
        let board = Board::new(5, 5);
        assert_eq!(board.neighbors(0, 0).count(), 3);
        assert_eq!(board.neighbors(4, 4).count(), 3);
        assert_eq!(board.neighbors(0, 4).count(), 3);
        assert_eq!(board.neighbors(2, 0).count(), 5);
        assert_eq!(board.neighbors(4, 2).count(), 5);
    }

    #[test]
    fn thin_board_neighbors() {
        let row = Board::new(1, 4);
        assert_eq!(row.neighbors(0, 0).collect::<Vec<_>>(), vec![(1, 0)]);
        assert_eq!(row.neighbors(2, 0).count(), 2);
    }

    #[test]
    fn random_neighbor_covers_neighborhood_and_skips_origin() {
        let board = Board::new(5, 5);
        let mut rng = rng();

        for (x, y, expected) in [(2, 2, 8), (0, 0, 3), (4, 2, 5)] {
            let mut seen = HashSet::new();
            for _ in 0..500 {
                let pick = board.random_neighbor(x, y, &mut rng).unwrap();
                assert_ne!(pick, (x, y));
                assert!(board.contains(pick.0, pick.1));
                seen.insert(pick);
            }
            let all: HashSet<_> = board.neighbors(x, y).collect();
            assert_eq!(seen.len(), expected);
            assert_eq!(seen, all);
        }
    }

    #[test]
    fn single_cell_board_has_no_neighbor() {
        let mut board = Board::new(1, 1);
        board.paint(0, 0, CellState::Rock);
        assert_eq!(board.random_neighbor(0, 0, &mut rng()), None);
        assert_eq!(board.step(&mut rng()), StepReport::default());
        assert_eq!(board.cell(0, 0).state, CellState::Rock);
    }

    #[test]
    fn single_seed_spreads_into_neighborhood_only() {
        let mut board = Board::new(5, 5);
        set(&mut board, 2, 2, CellState::Rock, 5);

        let report = board.step(&mut rng());
        let pop = board.population();
        assert!(pop.rock >= 1 && pop.rock <= 9);
        assert_eq!(pop.rock, 1 + report.spawned);
        assert_eq!(report.overtaken, 0);

        for cell in board.iter().filter(|c| c.state == CellState::Rock) {
            assert!(cell.x().abs_diff(2) <= 1 && cell.y().abs_diff(2) <= 1);
            if (cell.x(), cell.y()) != (2, 2) {
                assert_eq!(cell.generation, 6);
            }
        }
    }

    #[test]
    fn capped_seed_does_not_spread() {
        let mut board = Board::new(5, 5);
        set(&mut board, 2, 2, CellState::Rock, GENERATION_CAP);
        let mut rng = rng();
        for _ in 0..20 {
            let report = board.step(&mut rng);
            assert_eq!(report.changed(), 0);
        }
        assert_eq!(board.population().rock, 1);
    }

    #[test]
    fn surrounded_cell_is_overtaken_with_zero_generation() {
        let mut board = filled(3, 3, CellState::Paper, 4);
        set(&mut board, 1, 1, CellState::Rock, 3);

        let report = board.step(&mut rng());
        assert_eq!(report.overtaken, 1);
        assert_eq!(report.spawned, 0);
        assert_eq!(board.population().paper, 9);
        assert_eq!(board.cell(1, 1).generation, 0);
        assert_eq!(board.cell(0, 0).generation, 4);
    }

    #[test]
    fn step_reads_from_snapshot_only() {
        let mut rng = rng();
        for _ in 0..50 {
            let mut board = Board::new(1, 6);
            board.paint(0, 0, CellState::Scissors);
            board.step(&mut rng);
            for x in 2..6 {
                assert!(board.cell(x, 0).state.is_blank(), "cascade reached x={x}");
            }
        }
    }

    #[test]
    fn blank_cells_age_from_blank_neighbors() {
        let mut board = Board::new(3, 3);
        board.step(&mut rng());
        for cell in board.iter() {
            assert!(cell.state.is_blank());
            assert_eq!(cell.generation, INITIAL_GENERATION + 1);
        }
    }

    #[test]
    fn population_counts_every_state() {
        let mut board = Board::new(2, 3);
        board.paint(0, 0, CellState::Rock);
        board.paint(1, 0, CellState::Rock);
        board.paint(2, 0, CellState::Paper);
        board.paint(0, 1, CellState::Scissors);
        let pop = board.population();
        assert_eq!(pop, Population { blank: 2, rock: 2, paper: 1, scissors: 1 });
        assert_eq!(pop.occupied(), 4);
        assert_eq!(pop.count(CellState::Rock), 2);
    }
}
