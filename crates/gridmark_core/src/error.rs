//! Error types for board construction and moves.

use serde::{Deserialize, Serialize};

/// Reasons a move is declined.
///
/// Every variant is recoverable: the board and the controller are left
/// exactly as they were, and the caller is expected to ask for another move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display, derive_more::Error,
)]
pub enum MoveError {
    /// The coordinates fall outside `[0, dimension)`.
    #[display("({row}, {col}) is outside the {dimension}x{dimension} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board dimension at the time of the request.
        dimension: usize,
    },

    /// The target cell already holds a token.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game has ended; only a reset is accepted.
    #[display("Game is already over")]
    GameOver,
}

/// Errors raised while constructing a board or a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SetupError {
    /// A board needs at least one row and one column.
    #[display("Board dimension must be at least 1")]
    ZeroDimension,

    /// The board would need more cells than can be addressed or allocated.
    #[display("Board dimension {dimension} is too large")]
    DimensionTooLarge {
        /// Requested dimension.
        dimension: usize,
    },
}
