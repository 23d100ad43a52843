use std::fmt;

use crate::identifiers::PlayerId;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    /// Player 1 plays X, player 2 plays O.
    pub fn for_player(player: PlayerId) -> Self {
        if player == PlayerId::ONE { Mark::X } else { Mark::O }
    }

    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Mark::X => Some(PlayerId::ONE),
            Mark::O => Some(PlayerId::TWO),
            Mark::Empty => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn is_on_board(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Every cell in row-major order.
pub const ALL_POSITIONS: [Position; CELL_COUNT] = [
    Position::new(0, 0),
    Position::new(0, 1),
    Position::new(0, 2),
    Position::new(1, 0),
    Position::new(1, 1),
    Position::new(1, 2),
    Position::new(2, 0),
    Position::new(2, 1),
    Position::new(2, 2),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(PlayerId),
    Tie,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [Position; BOARD_SIZE],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [Position; BOARD_SIZE]) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> Position {
        self.cells[0]
    }

    pub fn end(&self) -> Position {
        self.cells[BOARD_SIZE - 1]
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains(&position)
    }
}
