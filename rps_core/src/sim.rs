// sim.rs - Simulation controller: run/pause state, tick timer, user actions

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info, trace};

use crate::board::{Board, StepReport};
use crate::cell::CellState;
use crate::config::{self, SimConfig};
use crate::patterns::{self, Pattern};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Paused,
    Running,
}

/// Owns the board and every setting the control panel can change.
///
/// All calls happen on one thread; a frame calls [`Simulation::advance`]
/// before reading the board for drawing.
pub struct Simulation {
    board: Board,
    config: SimConfig,
    status: Status,
    mode: CellState,
    last_tick: Option<Instant>,
    tick_count: u64,
    rng: SmallRng,
}

impl Simulation {
    pub fn new(mut config: SimConfig) -> Self {
        config.sanitize();
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let board = Board::new(config.grid.rows, config.grid.cols);
        info!(
            rows = board.rows(),
            cols = board.cols(),
            ticks_per_second = config.timing.ticks_per_second,
            seed = ?config.seed,
            "Simulation created"
        );
        Self {
            board,
            config,
            status: Status::Paused,
            mode: CellState::Blank,
            last_tick: None,
            tick_count: 0,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn start(&mut self) {
        if !self.is_running() {
            self.status = Status::Running;
            info!(tick = self.tick_count, "Simulation started");
        }
    }

    pub fn pause(&mut self) {
        if self.is_running() {
            self.status = Status::Paused;
            info!(tick = self.tick_count, "Simulation paused");
        }
    }

    pub fn toggle_running(&mut self) {
        match self.status {
            Status::Paused  => self.start(),
            Status::Running => self.pause(),
        }
    }

    /// Animation-frame hook. Performs one tick if running and the tick
    /// interval has elapsed since the previous timed tick.
    pub fn advance(&mut self, now: Instant) -> Option<StepReport> {
        if !self.is_running() {
            return None;
        }
        let due = match self.last_tick {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.tick_interval(),
        };
        if !due {
            return None;
        }
        self.last_tick = Some(now);
        Some(self.tick())
    }

    /// Perform exactly one tick regardless of run/pause state.
    pub fn step(&mut self) -> StepReport {
        self.tick()
    }

    fn tick(&mut self) -> StepReport {
        let report = self.board.step(&mut self.rng);
        self.tick_count += 1;
        debug!(
            tick = self.tick_count,
            spawned = report.spawned,
            overtaken = report.overtaken,
            "Tick"
        );
        report
    }

    /// Pause and rebuild the board with the current dimensions.
    pub fn reset(&mut self) {
        self.pause();
        self.board.reset();
        self.last_tick = None;
        self.tick_count = 0;
    }

    /// Pause and rebuild the board with new dimensions (clamped to at least 1x1).
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.pause();
        self.board.resize(rows, cols);
        self.config.grid.rows = self.board.rows();
        self.config.grid.cols = self.board.cols();
        self.last_tick = None;
        self.tick_count = 0;
        info!(rows = self.board.rows(), cols = self.board.cols(), "Board resized");
    }

    pub fn set_rows(&mut self, rows: usize) {
        self.resize(rows, self.board.cols());
    }

    pub fn set_cols(&mut self, cols: usize) {
        self.resize(self.board.rows(), cols);
    }

    pub fn ticks_per_second(&self) -> f32 {
        self.config.timing.ticks_per_second
    }

    pub fn set_ticks_per_second(&mut self, tps: f32) {
        let tps = config::clamp_ticks_per_second(tps);
        self.config.timing.ticks_per_second = tps;
        debug!(ticks_per_second = tps, "Tick rate changed");
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.config.timing.ticks_per_second))
    }

    pub fn mode(&self) -> CellState {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CellState) {
        self.mode = mode;
    }

    pub fn show_grid(&self) -> bool {
        self.config.display.show_grid
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.config.display.show_grid = show;
    }

    /// Paint the current mode at `(x, y)`. Returns whether a cell was painted.
    pub fn paint(&mut self, x: usize, y: usize) -> bool {
        self.paint_state(x, y, self.mode)
    }

    pub fn paint_state(&mut self, x: usize, y: usize, state: CellState) -> bool {
        if self.is_running() && !self.config.paint_while_running {
            return false;
        }
        let painted = self.board.paint(x, y, state);
        if painted {
            trace!(x, y, state = state.name(), "Cell painted");
        }
        painted
    }

    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        self.reset();
        patterns::apply_pattern(&mut self.board, pattern);
    }

    pub fn randomize(&mut self, density: f64) {
        self.reset();
        patterns::apply_random_pattern(&mut self.board, &mut self.rng, density);
    }
}
