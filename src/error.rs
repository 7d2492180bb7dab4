//! Error types returned by the board, the game tracker and the AI player.

use thiserror::Error;

/// A move that cannot be played on the current board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Illegal move: ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("Illegal move: ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("Illegal move: the game is already over")]
    GameOver,
}

/// Failure to parse a move from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("expected two coordinates \"row col\", got {0:?}")]
    Arity(String),

    #[error("invalid coordinate {0:?}")]
    Coordinate(String),
}

/// Errors raised when asking the AI for a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("No legal moves available")]
    NoLegalMoves,
}
