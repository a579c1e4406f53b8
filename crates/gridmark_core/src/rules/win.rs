//! Win detection by directional search.
//!
//! From every cell holding the token, walk each of the eight compass
//! directions and count consecutive matching cells. A run as long as the
//! board dimension wins. Runs are rediscovered from several start cells;
//! boards are small enough that this does not matter.

use crate::types::{Board, Cell, Token};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// One of the eight compass directions a run can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// Up.
    North,
    /// Up and right.
    NorthEast,
    /// Right.
    East,
    /// Down and right.
    SouthEast,
    /// Down.
    South,
    /// Down and left.
    SouthWest,
    /// Left.
    West,
    /// Up and left.
    NorthWest,
}

impl Direction {
    /// Row and column step for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Steps once from `(row, col)`, or `None` when the step leaves `usize`.
    fn step(self, row: usize, col: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        row.checked_add_signed(dr).zip(col.checked_add_signed(dc))
    }
}

/// Counts consecutive cells holding `token`, starting at `(row, col)` and
/// moving in `direction`.
///
/// The walk stops at the board edge, at a non-matching cell, or once the
/// count reaches the board dimension.
pub fn run_length(board: &Board, token: Token, row: usize, col: usize, direction: Direction) -> usize {
    let target = Cell::Occupied(token);
    let mut count = 0;
    let mut position = Some((row, col));

    while count < board.dimension() {
        match position {
            Some((r, c)) if board.get(r, c) == Ok(target) => {
                count += 1;
                position = direction.step(r, c);
            }
            _ => break,
        }
    }

    count
}

/// Checks whether `token` has a run of `dimension` cells anywhere on the board.
#[instrument(skip(board), fields(dimension = board.dimension()))]
pub fn check_win(board: &Board, token: Token) -> bool {
    let n = board.dimension();
    let target = Cell::Occupied(token);

    for row in 0..n {
        for col in 0..n {
            if board.get(row, col) != Ok(target) {
                continue;
            }
            for direction in Direction::iter() {
                if run_length(board, token, row, col, direction) >= n {
                    trace!(row, col, ?direction, "Winning run found");
                    return true;
                }
            }
        }
    }

    false
}

/// Returns the token with a winning run, if any.
pub fn winner(board: &Board) -> Option<Token> {
    Token::iter().find(|token| check_win(board, *token))
}
