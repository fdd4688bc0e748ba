// cell.rs - Cell record and the four cell states

/// Generation given to every cell when a board is built or reset.
pub const INITIAL_GENERATION: u32 = 1;

/// Generation given to a cell painted directly by the user.
pub const PAINTED_GENERATION: u32 = 0;

/// A neighbor at this generation (or above) can no longer spread.
pub const GENERATION_CAP: u32 = 9;

/// State held by a single cell.
///
/// The three playable states form a cycle: Rock beats Scissors, Scissors
/// beats Paper, Paper beats Rock. `Blank` loses to all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Blank,
    Rock,
    Paper,
    Scissors,
}

impl CellState {
    /// The states a user can paint besides erasing.
    pub const PLAYABLE: [CellState; 3] = [CellState::Rock, CellState::Paper, CellState::Scissors];

    pub fn is_blank(self) -> bool {
        self == CellState::Blank
    }

    pub fn name(self) -> &'static str {
        match self {
            CellState::Blank    => "Blank",
            CellState::Rock     => "Rock",
            CellState::Paper    => "Paper",
            CellState::Scissors => "Scissors",
        }
    }
}

/// One grid position. Coordinates never change after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    pub state: CellState,
    pub generation: u32,
}

impl Cell {
    /// Fresh blank cell at `(x, y)`.
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            state: CellState::Blank,
            generation: INITIAL_GENERATION,
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Overwrite the cell as a direct user action.
    pub fn paint(&mut self, state: CellState) {
        self.state = state;
        self.generation = PAINTED_GENERATION;
    }
}
