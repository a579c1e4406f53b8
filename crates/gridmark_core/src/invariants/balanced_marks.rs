//! Balanced marks invariant: the first player is never behind and never
//! more than one token ahead.

use super::Invariant;
use crate::{Board, GameController, Token};

/// Invariant: `count(O) - count(X)` is 0 or 1.
///
/// The first player places `O` and moves first, and players alternate.
pub struct BalancedMarksInvariant;

impl Invariant<Board> for BalancedMarksInvariant {
    fn holds(board: &Board) -> bool {
        let first = board.count(Token::O);
        let second = board.count(Token::X);
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "First player's token count equals or exceeds the second's by one"
    }
}

impl Invariant<GameController> for BalancedMarksInvariant {
    fn holds(game: &GameController) -> bool {
        <Self as Invariant<Board>>::holds(game.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}
