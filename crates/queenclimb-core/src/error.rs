//! Error types for queenclimb

use thiserror::Error;

/// Main error type for queenclimb operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueensError {
    /// Board size must be a positive integer
    #[error("Invalid board size: {0}")]
    InvalidBoardSize(usize),

    /// A queen was placed outside the board
    #[error("Queen at ({row}, {column}) lies outside a {size}x{size} board")]
    InvalidPosition {
        row: usize,
        column: usize,
        size: usize,
    },

    /// A queen move whose origin is empty or whose destination is taken
    #[error("Illegal move ({from_row}, {from_col}) -> ({to_row}, {to_col})")]
    IllegalMove {
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    },

    /// Restart driver was stopped by its termination before reaching a goal state
    #[error(
        "Restart limit reached after {restarts} restarts ({total_steps} steps), best objective {best_objective}"
    )]
    RestartLimitReached {
        restarts: u64,
        total_steps: u64,
        best_objective: u64,
    },
}

/// Result type alias for queenclimb operations
pub type Result<T> = std::result::Result<T, QueensError>;
