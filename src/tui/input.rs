//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Highlighted cell, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Row.
    pub row: usize,
    /// Column.
    pub col: usize,
}

impl Cursor {
    /// Creates a cursor at `(row, col)`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Moves the cursor with arrow keys or `hjkl`, stopping at the board edge.
pub fn move_cursor(cursor: Cursor, key: KeyCode, dimension: usize) -> Cursor {
    let last = dimension.saturating_sub(1);
    let Cursor { row, col } = cursor;

    match key {
        KeyCode::Up | KeyCode::Char('k') => Cursor::new(row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => Cursor::new((row + 1).min(last), col),
        KeyCode::Left | KeyCode::Char('h') => Cursor::new(row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Cursor::new(row, (col + 1).min(last)),
        _ => cursor,
    }
}

/// Maps `1`..=`9` to a cell, row-major, on boards up to 3×3.
pub fn digit_to_cursor(c: char, dimension: usize) -> Option<Cursor> {
    if dimension > 3 {
        return None;
    }
    let index = c.to_digit(10)?.checked_sub(1)? as usize;
    (index < dimension * dimension).then(|| Cursor::new(index / dimension, index % dimension))
}
