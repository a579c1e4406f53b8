//! Optional observer hook for game events.
//!
//! A controller without an observer behaves exactly like one with an
//! observer; events only report what already happened.

use crate::controller::Outcome;
use crate::error::MoveError;
use crate::types::Token;
use serde::{Deserialize, Serialize};

/// Something that happened to a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A token was placed.
    MoveAccepted {
        /// Token that was placed.
        token: Token,
        /// Row of the move.
        row: usize,
        /// Column of the move.
        col: usize,
    },
    /// A move was declined; nothing changed.
    MoveRejected {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Why the move was declined.
        reason: MoveError,
    },
    /// The game reached a terminal state.
    GameOver {
        /// How it ended.
        outcome: Outcome,
    },
    /// The board was cleared and the first player is active again.
    Reset,
}

/// Receives [`GameEvent`]s from a [`GameController`](crate::GameController).
pub trait GameObserver {
    /// Called after the event has been applied.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        (*self)(event)
    }
}
