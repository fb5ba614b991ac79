//! Error types for board operations.

use thiserror::Error;

/// Error type for rejected moves.
///
/// Move input comes from an untrusted network peer, so a rejected move is
/// an expected outcome, not a fault: the caller keeps the board unchanged
/// and the session continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Move coordinates fall outside the 3x3 grid.
    #[error("move out of range: row {row}, col {col}")]
    OutOfRange {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// Target cell already holds a mark.
    #[error("cell occupied: row {row}, col {col}")]
    CellOccupied {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },
}

/// Result type alias for board operations.
pub type Result<T> = std::result::Result<T, GameError>;
