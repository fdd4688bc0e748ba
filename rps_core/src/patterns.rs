// patterns.rs - Seed patterns for the board

use rand::Rng;
use tracing::info;

use crate::board::Board;
use crate::cell::CellState::{self, Paper, Rock, Scissors};

/// A named seed. Offsets are `(dx, dy)` from the board centre.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize, CellState)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Triad",
        cells: &[(-4, -3, Rock), (4, -3, Paper), (0, 4, Scissors)],
    },
    Pattern {
        name: "Duel",
        cells: &[(-2, 0, Rock), (2, 0, Paper)],
    },
    Pattern {
        name: "Pinwheel",
        cells: &[
            // Rock arm
            (-1, -1, Rock), (-2, -1, Rock), (-3, -1, Rock),
            // Paper arm
            (1, -1, Paper), (1, -2, Paper), (1, -3, Paper),
            // Scissors arm
            (0, 1, Scissors), (0, 2, Scissors), (0, 3, Scissors),
        ],
    },
    Pattern {
        name: "Ring",
        cells: &[
            (0, -5, Rock), (3, -4, Paper), (5, 0, Scissors), (3, 4, Rock),
            (0, 5, Paper), (-3, 4, Scissors), (-5, 0, Rock), (-3, -4, Paper),
        ],
    },
];

/// Clear the board, then paint the pattern around its centre.
/// Cells falling outside the board are dropped.
pub fn apply_pattern(board: &mut Board, pattern: &Pattern) {
    board.reset();

    let cx = (board.cols() / 2) as isize;
    let cy = (board.rows() / 2) as isize;
    let mut placed = 0;
    for &(dx, dy, state) in pattern.cells {
        let (x, y) = (cx + dx, cy + dy);
        if x >= 0 && y >= 0 && board.paint(x as usize, y as usize, state) {
            placed += 1;
        }
    }
    info!(pattern = pattern.name, placed, "Pattern applied");
}

/// Clear the board, then paint each cell with probability `density`
/// using a uniformly chosen playable state.
pub fn apply_random_pattern<R: Rng + ?Sized>(board: &mut Board, rng: &mut R, density: f64) {
    board.reset();

    let density = density.clamp(0.0, 1.0);
    for y in 0..board.rows() {
        for x in 0..board.cols() {
            if rng.random_bool(density) {
                let state = CellState::PLAYABLE[rng.random_range(0..CellState::PLAYABLE.len())];
                board.paint(x, y, state);
            }
        }
    }
    info!(density, occupied = board.population().occupied(), "Random pattern applied");
}
