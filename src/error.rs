//! Error types for the noughts crate

use std::fmt;

use thiserror::Error;

/// Why a move was rejected by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The index is outside 0..=8
    OutOfBounds,
    /// The target cell already holds a mark
    Occupied,
    /// The game has reached a terminal status
    GameOver,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            MoveRejection::OutOfBounds => "position is out of bounds (must be 0-8)",
            MoveRejection::Occupied => "cell is already occupied",
            MoveRejection::GameOver => "game is already over",
        };
        f.write_str(reason)
    }
}

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move at position {position}: {reason}")]
    InvalidMove {
        position: usize,
        reason: MoveRejection,
    },

    #[error("board string must have {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },
}

impl Error {
    /// True for the recoverable move-rejection error; the caller is expected
    /// to drop the input and leave the state as it was.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Error::InvalidMove { .. })
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
