use crate::error::{GameError, IllegalMoveReason, Result};
use crate::identifiers::PlayerId;
use crate::log;
use super::types::{ALL_POSITIONS, BOARD_SIZE, CELL_COUNT, Mark, Outcome, Position};
use super::win_detector::{check_win, check_win_with_line};

/// 3x3 grid of marks. `Copy`, so the search can take a private simulation board for free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a snapshot of cell states, e.g. one kept by a presentation layer.
    pub fn from_cells(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    /// Panics on an off-board position; callers pass constant or validated positions.
    pub(crate) fn cell(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    pub fn place(&mut self, pos: Position, player: PlayerId) -> Result<()> {
        if !pos.is_on_board() {
            return Err(illegal(pos, IllegalMoveReason::OutOfBounds));
        }
        if self.is_terminal() {
            return Err(illegal(pos, IllegalMoveReason::GameOver));
        }
        if self.cell(pos) != Mark::Empty {
            return Err(illegal(pos, IllegalMoveReason::Occupied));
        }

        self.set(pos, Mark::for_player(player));
        Ok(())
    }

    /// Outcome after `last_mover` placed the `move_count`-th mark.
    ///
    /// A completed line is normally the mover's own. If the line's mark belongs to the other
    /// player (only possible when called off the normal turn sequence) the win goes to the
    /// line's owner, not the mover.
    pub fn evaluate(&self, last_mover: PlayerId, move_count: usize) -> Outcome {
        if let Some(line) = check_win_with_line(self) {
            return match line.mark.owner() {
                Some(owner) if owner == last_mover => Outcome::Win(last_mover),
                Some(owner) => {
                    log!(
                        "Line {} -> {} belongs to player {}, not to last mover {}",
                        line.start(),
                        line.end(),
                        owner,
                        last_mover
                    );
                    Outcome::Win(owner)
                }
                None => Outcome::Win(last_mover),
            };
        }

        if move_count >= CELL_COUNT {
            Outcome::Tie
        } else {
            Outcome::InProgress
        }
    }

    pub fn available_cells(&self) -> Vec<Position> {
        ALL_POSITIONS
            .into_iter()
            .filter(|&pos| self.cell(pos) == Mark::Empty)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&mark| mark != Mark::Empty)
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == CELL_COUNT
    }

    pub fn is_terminal(&self) -> bool {
        self.is_full() || check_win(self).is_some()
    }

    /// Test helper: rows of `X`, `O` and `.`.
    #[cfg(test)]
    pub(crate) fn parse(rows: [&str; BOARD_SIZE]) -> Self {
        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(BOARD_SIZE).enumerate() {
                cells[row][col] = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => Mark::Empty,
                };
            }
        }
        Self::from_cells(cells)
    }
}

fn illegal(position: Position, reason: IllegalMoveReason) -> GameError {
    GameError::IllegalMove { position, reason }
}
