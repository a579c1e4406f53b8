//! Core domain types: tokens, cells and the board.

use crate::error::{MoveError, SetupError};
use crate::rules;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

/// Side length of the classic board.
pub(crate) const DEFAULT_DIMENSION: usize = 3;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Token {
    /// Placed by the first player.
    O,
    /// Placed by the second player.
    X,
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No token yet.
    #[default]
    Empty,
    /// Holds a player's token.
    Occupied(Token),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the token in this cell, if any.
    pub fn token(self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(token) => Some(token),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => f.write_str("."),
            Cell::Occupied(token) => write!(f, "{token}"),
        }
    }
}

/// An n×n grid of cells in row-major order.
///
/// All coordinate access is bounds-checked and reports
/// [`MoveError::OutOfBounds`] instead of clamping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with `dimension` rows and columns.
    ///
    /// Fails for a zero dimension, and for one whose cell count overflows
    /// `usize` or cannot be allocated.
    #[instrument]
    pub fn new(dimension: usize) -> Result<Self, SetupError> {
        if dimension == 0 {
            return Err(SetupError::ZeroDimension);
        }
        let len = dimension
            .checked_mul(dimension)
            .ok_or(SetupError::DimensionTooLarge { dimension })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| SetupError::DimensionTooLarge { dimension })?;
        cells.resize(len, Cell::Empty);

        Ok(Self { dimension, cells })
    }

    /// Number of rows (and columns).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, MoveError> {
        if row >= self.dimension || col >= self.dimension {
            return Err(MoveError::OutOfBounds {
                row,
                col,
                dimension: self.dimension,
            });
        }
        Ok(row * self.dimension + col)
    }

    /// Gets the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Places `token` at `(row, col)`.
    ///
    /// Fails without touching the board if the coordinates are out of range
    /// or the cell is already occupied.
    #[instrument(skip(self), fields(dimension = self.dimension))]
    pub fn drop_token(&mut self, row: usize, col: usize, token: Token) -> Result<(), MoveError> {
        let idx = self.index(row, col)?;
        if !self.cells[idx].is_empty() {
            return Err(MoveError::CellOccupied { row, col });
        }
        self.cells[idx] = Cell::Occupied(token);
        debug!(row, col, %token, "Token placed");
        Ok(())
    }

    /// Checks whether `token` has a run of `dimension` cells in any direction.
    pub fn check_win(&self, token: Token) -> bool {
        rules::check_win(self, token)
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Resets every cell to empty.
    #[instrument(skip(self), fields(dimension = self.dimension))]
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Number of cells holding `token`.
    pub fn count(&self, token: Token) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.token() == Some(token))
            .count()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.dimension)
    }

    /// Copies the board into a renderer-friendly matrix.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            dimension: self.dimension,
            rows: self.rows().map(<[Cell]>::to_vec).collect(),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = vec!["---"; self.dimension].join("+");
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "{separator}")?;
            }
            let line: Vec<String> = row.iter().map(|cell| format!(" {cell} ")).collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

impl Default for Board {
    /// An empty 3×3 board.
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            cells: vec![Cell::Empty; DEFAULT_DIMENSION * DEFAULT_DIMENSION],
        }
    }
}

/// Read-only copy of the board handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Number of rows (and columns).
    dimension: usize,
    /// Cells, one inner vector per row.
    rows: Vec<Vec<Cell>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_token() {
        assert_eq!(Cell::Occupied(Token::X).token(), Some(Token::X));
        assert_eq!(Cell::Empty.token(), None);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(Board::new(0), Err(SetupError::ZeroDimension));
    }

    #[test]
    fn test_overflowing_dimension_rejected() {
        assert_eq!(
            Board::new(usize::MAX),
            Err(SetupError::DimensionTooLarge {
                dimension: usize::MAX
            })
        );
        assert_eq!(
            Board::new(1 << (usize::BITS / 2)),
            Err(SetupError::DimensionTooLarge {
                dimension: 1 << (usize::BITS / 2)
            })
        );
    }

    #[test]
    fn test_default_board_is_classic() {
        let board = Board::default();
        assert_eq!(board, Board::new(3).unwrap());
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.cells().len(), 16);
        assert!(board.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new(3).unwrap();
        assert_eq!(
            board.get(3, 0),
            Err(MoveError::OutOfBounds {
                row: 3,
                col: 0,
                dimension: 3
            })
        );
        assert!(board.get(0, 3).is_err());
        assert_eq!(board.get(2, 2), Ok(Cell::Empty));
    }

    #[test]
    fn test_drop_token_occupied() {
        let mut board = Board::new(3).unwrap();
        board.drop_token(1, 1, Token::O).unwrap();
        assert_eq!(
            board.drop_token(1, 1, Token::X),
            Err(MoveError::CellOccupied { row: 1, col: 1 })
        );
        assert_eq!(board.get(1, 1), Ok(Cell::Occupied(Token::O)));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut board = Board::new(3).unwrap();
        board.drop_token(0, 0, Token::X).unwrap();
        board.clear();
        let once = board.clone();
        board.clear();
        assert_eq!(board, once);
        assert_eq!(board.count(Token::X), 0);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2).unwrap();
        board.drop_token(0, 1, Token::X).unwrap();
        board.drop_token(1, 0, Token::O).unwrap();
        assert_eq!(board.to_string(), " . | X \n---+---\n O | . ");
    }

    #[test]
    fn test_snapshot_rows() {
        let mut board = Board::new(2).unwrap();
        board.drop_token(1, 1, Token::O).unwrap();
        let snapshot = board.snapshot();
        assert_eq!(*snapshot.dimension(), 2);
        assert_eq!(
            snapshot.rows(),
            &vec![
                vec![Cell::Empty, Cell::Empty],
                vec![Cell::Empty, Cell::Occupied(Token::O)],
            ]
        );
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut board = Board::new(2).unwrap();
        board.drop_token(0, 0, Token::X).unwrap();
        let json = serde_json::to_value(board.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dimension": 2,
                "rows": [[{ "Occupied": "X" }, "Empty"], ["Empty", "Empty"]]
            })
        );
    }
}
