//! Single winner invariant: both tokens never hold a winning run at once.

use super::Invariant;
use crate::rules::check_win;
use crate::{Board, GameController, Token};

/// Invariant: at most one token has a run of `dimension` cells.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(check_win(board, Token::O) && check_win(board, Token::X))
    }

    fn description() -> &'static str {
        "At most one token has a winning run"
    }
}

impl Invariant<GameController> for SingleWinnerInvariant {
    fn holds(game: &GameController) -> bool {
        <Self as Invariant<Board>>::holds(game.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_winning_rows_violate() {
        let mut board = Board::new(2).unwrap();
        board.drop_token(0, 0, Token::O).unwrap();
        board.drop_token(0, 1, Token::O).unwrap();
        board.drop_token(1, 0, Token::X).unwrap();
        board.drop_token(1, 1, Token::X).unwrap();
        assert!(!<SingleWinnerInvariant as Invariant<Board>>::holds(&board));
    }

    #[test]
    fn test_one_winner_holds() {
        let mut board = Board::new(2).unwrap();
        board.drop_token(0, 0, Token::O).unwrap();
        board.drop_token(0, 1, Token::O).unwrap();
        board.drop_token(1, 0, Token::X).unwrap();
        assert!(<SingleWinnerInvariant as Invariant<Board>>::holds(&board));
    }
}
