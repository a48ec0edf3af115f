//! Error types for the oxo crate

use thiserror::Error;

use crate::state::Player;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action: position {position} is not a legal move in this state")]
    InvalidAction { position: usize },

    #[error("no actions available in this state")]
    NoAvailableActions,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
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

    #[error("invalid piece counts: X={x_count}, O={o_count} (counts must differ by at most 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("piece counts (X={x_count}, O={o_count}) are inconsistent with {to_move} to move in '{context}'")]
    InconsistentTurn {
        x_count: usize,
        o_count: usize,
        to_move: Player,
        context: String,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
