use rand::SeedableRng;
use rand::rngs::SmallRng;

use rps_core::cell::GENERATION_CAP;
use rps_core::patterns::{self, PATTERNS};
use rps_core::{Board, CellState, SimConfig, Simulation};

fn assert_board_invariants(board: &Board) {
    assert_eq!(board.len(), board.rows() * board.cols());
    for (y, row) in board.iter_rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            assert_eq!((cell.x(), cell.y()), (x, y));
            assert!(cell.generation <= GENERATION_CAP, "generation {} at ({x},{y})", cell.generation);
        }
    }
}

#[test]
fn long_random_run_keeps_invariants() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut board = Board::new(24, 31);
    patterns::apply_random_pattern(&mut board, &mut rng, 0.2);

    for _ in 0..300 {
        let before = board.population();
        let report = board.step(&mut rng);
        let after = board.population();

        assert_eq!(after.blank + after.occupied(), board.len());
        assert_eq!(after.occupied(), before.occupied() + report.spawned);
        assert_board_invariants(&board);
    }
}

#[test]
fn lone_species_never_shrinks() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut board = Board::new(15, 15);
    board.paint(7, 7, CellState::Paper);

    let mut previous = 1;
    for _ in 0..40 {
        board.step(&mut rng);
        let pop = board.population();
        assert_eq!(pop.rock + pop.scissors, 0);
        assert!(pop.paper >= previous);
        previous = pop.paper;
    }
}

#[test]
fn spread_stops_at_generation_cap() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut board = Board::new(41, 41);
    board.paint(20, 20, CellState::Rock);

    for _ in 0..500 {
        board.step(&mut rng);
    }
    // Each hop from the painted seed adds one generation, so nothing gets
    // further than GENERATION_CAP cells from it.
    let reach = GENERATION_CAP as usize;
    for cell in board.iter().filter(|c| c.state == CellState::Rock) {
        assert!(cell.x().abs_diff(20) <= reach && cell.y().abs_diff(20) <= reach);
    }
}

#[test]
fn patterns_run_through_the_simulation() {
    let mut config = SimConfig::default();
    config.grid.rows = 30;
    config.grid.cols = 30;
    config.seed = Some(3);
    let mut sim = Simulation::new(config);

    for pattern in PATTERNS {
        sim.apply_pattern(pattern);
        assert_eq!(sim.tick_count(), 0);
        assert_eq!(sim.board().population().occupied(), pattern.cells.len());
        for _ in 0..10 {
            sim.step();
        }
        assert!(!sim.is_running());
        assert_board_invariants(sim.board());
    }
}
