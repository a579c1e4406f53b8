//! Pure game logic for gridmark, a two-player connection game on an n×n board.
//!
//! A player wins by filling a full straight line of `n` cells (a row, a
//! column or either diagonal) with their token. Nothing in this crate
//! performs I/O; renderers read state through [`GameController`] and feed
//! cell selections back through [`GameController::play_round`].
//!
//! # Example
//!
//! ```
//! use gridmark_core::{GameController, GameState, MoveOutcome, Outcome, Token};
//!
//! let mut game = GameController::new("Ada", "Grace", 3)?;
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
//!     game.play_round(row, col)?;
//! }
//! let outcome = game.play_round(0, 2)?;
//! assert!(matches!(outcome, MoveOutcome::Won { .. }));
//! assert_eq!(game.game_state(), GameState::Over(Outcome::Winner(Token::O)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
mod events;
pub mod invariants;
mod player;
pub mod rules;
mod types;

pub use controller::{GameController, GameState, MoveOutcome, Outcome};
pub use error::{MoveError, SetupError};
pub use events::{GameEvent, GameObserver};
pub use player::Player;
pub use rules::Direction;
pub use types::{Board, BoardSnapshot, Cell, Token};
