//! Draw detection.

use super::win::winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if every cell on the board is occupied.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

/// A full board with no winning run.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
