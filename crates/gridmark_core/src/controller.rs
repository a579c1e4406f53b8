//! Turn management and the game state machine.

use crate::error::{MoveError, SetupError};
use crate::events::{GameEvent, GameObserver};
use crate::invariants::{CoreInvariants, InvariantSet};
use crate::player::Player;
use crate::rules;
use crate::types::{Board, BoardSnapshot, Cell, Token};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The token completed a run.
    Winner(Token),
    /// The board filled up with no run.
    Draw,
}

impl Outcome {
    /// Returns the winning token if there is one.
    pub fn winner(&self) -> Option<Token> {
        match self {
            Outcome::Winner(token) => Some(*token),
            Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(token) => write!(f, "{token} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameState {
    /// Moves are accepted.
    #[default]
    Ongoing,
    /// Only [`GameController::reset`] leaves this state.
    Over(Outcome),
}

impl GameState {
    /// Checks if the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, GameState::Over(_))
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on with the other player.
    Continue {
        /// Token expected next.
        next: Token,
    },
    /// The move completed a run. The winner stays the active player.
    Won {
        /// Player who made the winning move.
        winner: Player,
    },
    /// The move filled the board without a run.
    Draw,
}

/// Owns the board and both players, and drives the
/// move → win check → draw check → turn switch cycle.
pub struct GameController {
    board: Board,
    players: [Player; 2],
    active: usize,
    state: GameState,
    observer: Option<Box<dyn GameObserver>>,
}

impl GameController {
    /// Creates a game on an empty `dimension`×`dimension` board.
    ///
    /// The first player places [`Token::O`] and moves first; the second
    /// player places [`Token::X`].
    #[instrument(skip(player_one, player_two))]
    pub fn new(
        player_one: impl Into<String>,
        player_two: impl Into<String>,
        dimension: usize,
    ) -> Result<Self, SetupError> {
        let board = Board::new(dimension)?;
        Ok(Self::with_board(player_one.into(), player_two.into(), board))
    }

    fn with_board(player_one: String, player_two: String, board: Board) -> Self {
        Self {
            board,
            players: [
                Player::new(player_one, Token::O),
                Player::new(player_two, Token::X),
            ],
            active: 0,
            state: GameState::Ongoing,
            observer: None,
        }
    }

    /// Attaches an observer that is told about every move, rejection,
    /// game end and reset.
    pub fn with_observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the board for rendering.
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Gets the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        self.board.get(row, col)
    }

    /// Number of rows (and columns).
    pub fn dimension(&self) -> usize {
        self.board.dimension()
    }

    /// Both players, first mover first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player whose move is expected, or the winner once the game is won.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// Current phase.
    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// Plays the active player's token at `(row, col)`.
    ///
    /// A rejected move changes nothing: the board, the active player and the
    /// game state stay as they were and no win check runs.
    #[instrument(skip(self), fields(token = %self.active_player().token()))]
    pub fn play_round(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        if self.state.is_over() {
            return Err(self.reject(row, col, MoveError::GameOver));
        }

        let token = self.active_player().token();
        if let Err(error) = self.board.drop_token(row, col, token) {
            return Err(self.reject(row, col, error));
        }
        self.emit(GameEvent::MoveAccepted { token, row, col });

        let outcome = if self.board.check_win(token) {
            self.finish(Outcome::Winner(token));
            MoveOutcome::Won {
                winner: self.active_player().clone(),
            }
        } else if rules::is_draw(&self.board) {
            self.finish(Outcome::Draw);
            MoveOutcome::Draw
        } else {
            self.active = 1 - self.active;
            debug!(next = %self.active_player().token(), "Turn passed");
            MoveOutcome::Continue {
                next: self.active_player().token(),
            }
        };

        debug_assert!(
            CoreInvariants::check_all(&*self).is_ok(),
            "game invariants violated after move at ({row}, {col})"
        );

        Ok(outcome)
    }

    /// Clears the board, makes the first player active and resumes play.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = 0;
        self.state = GameState::Ongoing;
        info!("Game reset");
        self.emit(GameEvent::Reset);
    }

    fn finish(&mut self, outcome: Outcome) {
        self.state = GameState::Over(outcome);
        info!(%outcome, player = %self.active_player(), "Game over");
        self.emit(GameEvent::GameOver { outcome });
    }

    fn reject(&mut self, row: usize, col: usize, reason: MoveError) -> MoveError {
        debug!(row, col, %reason, "Move rejected");
        self.emit(GameEvent::MoveRejected { row, col, reason });
        reason
    }

    fn emit(&mut self, event: GameEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event);
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::with_board(
            "Player 1".to_string(),
            "Player 2".to_string(),
            Board::default(),
        )
    }
}

impl fmt::Debug for GameController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameController")
            .field("board", &self.board)
            .field("players", &self.players)
            .field("active", &self.active)
            .field("state", &self.state)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_default_matches_source_defaults() {
        let game = GameController::default();
        assert_eq!(game.dimension(), 3);
        assert_eq!(game.players()[0].name(), "Player 1");
        assert_eq!(game.players()[1].name(), "Player 2");
        assert_eq!(game.active_player().token(), Token::O);
        assert_eq!(game.game_state(), GameState::Ongoing);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = GameController::default();
        assert_eq!(
            game.play_round(0, 0),
            Ok(MoveOutcome::Continue { next: Token::X })
        );
        assert_eq!(
            game.play_round(1, 1),
            Ok(MoveOutcome::Continue { next: Token::O })
        );
        assert_eq!(game.cell(1, 1), Ok(Cell::Occupied(Token::X)));
    }

    #[test]
    fn test_observer_sees_events_in_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut game = GameController::new("A", "B", 1)
            .unwrap()
            .with_observer(move |event: &GameEvent| sink.borrow_mut().push(event.clone()));

        game.play_round(0, 0).unwrap();
        let _ = game.play_round(0, 0);
        game.reset();

        assert_eq!(
            *events.borrow(),
            vec![
                GameEvent::MoveAccepted {
                    token: Token::O,
                    row: 0,
                    col: 0
                },
                GameEvent::GameOver {
                    outcome: Outcome::Winner(Token::O)
                },
                GameEvent::MoveRejected {
                    row: 0,
                    col: 0,
                    reason: MoveError::GameOver
                },
                GameEvent::Reset,
            ]
        );
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::Winner(Token::X).winner(), Some(Token::X));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::Winner(Token::O).to_string(), "O wins");
    }

    #[test]
    fn test_oversized_board_is_setup_error() {
        let err = GameController::new("A", "B", usize::MAX).unwrap_err();
        assert_eq!(
            err,
            SetupError::DimensionTooLarge {
                dimension: usize::MAX
            }
        );
        assert!(GameController::new("A", "B", 1 << (usize::BITS / 2)).is_err());
    }
}
