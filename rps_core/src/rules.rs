// rules.rs - Cyclic-dominance comparison between two cell states

use std::cmp::Ordering;

use crate::cell::{CellState, GENERATION_CAP};

/// Compare `c1` against `c2`.
///
/// `Greater` when `c1` beats `c2`, `Equal` on a draw, `Less` when `c2` beats
/// `c1`. Two blanks compare as `Less`, not `Equal`.
pub fn compare(c1: CellState, c2: CellState) -> Ordering {
    use CellState::*;

    if c1 == Blank {
        return Ordering::Less;
    }
    if c2 == Blank {
        return Ordering::Greater;
    }
    if c1 == c2 {
        return Ordering::Equal;
    }
    match (c1, c2) {
        (Rock, Scissors) | (Scissors, Paper) | (Paper, Rock) => Ordering::Greater,
        _ => Ordering::Less,
    }
}

/// Whether a neighbor in `source` state at `source_generation` takes over a
/// cell currently in `target` state.
pub fn can_spread(target: CellState, source: CellState, source_generation: u32) -> bool {
    compare(target, source) == Ordering::Less && source_generation < GENERATION_CAP
}
