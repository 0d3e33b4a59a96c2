//! Error types for the engine and the search.
//!
//! Rejected moves are not errors: `Board::play` reports them with `false`.
//! Everything here is a broken precondition that the caller must not retry.

use thiserror::Error;

use super::Coord;

/// Fatal engine and search errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HexError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("undo called with an empty move history")]
    UndoUnderflow,

    #[error("cell {coord} is already owned by a player")]
    CellAlreadyOwned { coord: Coord },

    #[error("cell {coord} is not owned by any player")]
    CellUnowned { coord: Coord },

    #[error("coordinate {coord} is outside the board")]
    OutOfBounds { coord: Coord },

    #[error("no free cells left but the game is not over")]
    NoFreeCells,

    #[error("game already over")]
    GameOver,

    #[error("search tree move {coord} was rejected by the board")]
    IllegalTreeMove { coord: Coord },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HexError>;
