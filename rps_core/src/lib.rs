//! Rock/paper/scissors cellular automaton.
//!
//! Every tick, each cell compares itself against one random Moore neighbor.
//! If the neighbor's state beats it (and the neighbor has not reached the
//! generation cap) the cell takes the neighbor's state.
//!
//! - [`cell`] -- cell record and the four states.
//! - [`rules`] -- cyclic-dominance comparison.
//! - [`board`] -- the grid, neighbor sampling and the evolution step.
//! - [`patterns`] -- seed patterns.
//! - [`viewport`] -- canvas geometry for drawing and pointer input.
//! - [`sim`] -- run/pause state, tick timer and user actions.
//! - [`config`] -- configuration loaded from `rps-config.yaml`.

pub mod board;
pub mod cell;
pub mod config;
pub mod patterns;
pub mod rules;
pub mod sim;
pub mod viewport;

pub use board::{Board, Population, StepReport};
pub use cell::{Cell, CellState};
pub use config::{ConfigError, SimConfig};
pub use sim::{Simulation, Status};
pub use viewport::Viewport;
