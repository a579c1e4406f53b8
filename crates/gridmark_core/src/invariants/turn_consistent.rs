//! Turn consistency invariant: the active player matches the token counts.

use super::Invariant;
use crate::{GameController, GameState, Outcome, Token};

/// Invariant: the active player agrees with the board.
///
/// While the game is ongoing, the first player (`O`) is active exactly when
/// both tokens have been placed equally often. Once the game is over the
/// active player is whoever moved last, and a win belongs to that player.
pub struct TurnConsistentInvariant;

impl Invariant<GameController> for TurnConsistentInvariant {
    fn holds(game: &GameController) -> bool {
        let board = game.board();
        let balanced = board.count(Token::O) == board.count(Token::X);
        let active = game.active_player().token();

        match game.game_state() {
            GameState::Ongoing => (active == Token::O) == balanced,
            GameState::Over(Outcome::Winner(winner)) => {
                active == winner && (active == Token::X) == balanced
            }
            GameState::Over(Outcome::Draw) => (active == Token::X) == balanced,
        }
    }

    fn description() -> &'static str {
        "Active player matches the number of tokens placed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        let game = GameController::default();
        assert!(TurnConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_each_move_and_win() {
        let mut game = GameController::default();
        for (row, col) in [(0, 0), (2, 0), (1, 1), (2, 1), (2, 2)] {
            game.play_round(row, col).unwrap();
            assert!(TurnConsistentInvariant::holds(&game));
        }
        assert_eq!(game.game_state(), GameState::Over(Outcome::Winner(Token::O)));
    }

    #[test]
    fn test_holds_after_draw() {
        let mut game = GameController::default();
        // O X O / O X X / X O O
        for (row, col) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (1, 2),
            (2, 2),
        ] {
            game.play_round(row, col).unwrap();
        }
        assert_eq!(game.game_state(), GameState::Over(Outcome::Draw));
        assert!(TurnConsistentInvariant::holds(&game));
    }
}
