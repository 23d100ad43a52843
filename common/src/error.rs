use std::fmt;
use thiserror::Error;

use crate::games::tictactoe::Position;
use crate::identifiers::{PlayerId, PlayerRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    OutOfBounds,
    Occupied,
    GameOver,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::OutOfBounds => write!(f, "position out of bounds"),
            IllegalMoveReason::Occupied => write!(f, "cell is already marked"),
            IllegalMoveReason::GameOver => write!(f, "game is already over"),
        }
    }
}

/// Precondition violations reported to the immediate caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("Illegal move at {position}: {reason}")]
    IllegalMove {
        position: Position,
        reason: IllegalMoveReason,
    },

    #[error("No legal move available")]
    NoLegalMove,

    #[error("Not player {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("Expected {expected} to move, but it is {actual}'s turn")]
    WrongRole {
        expected: PlayerRole,
        actual: PlayerRole,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
