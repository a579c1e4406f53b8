//! Application state and logic.

use super::input::{Cursor, digit_to_cursor, move_cursor};
use crate::status::status_line;
use crossterm::event::KeyCode;
use gridmark_core::{GameController, GameEvent, MoveOutcome, Token};
use std::collections::VecDeque;
use std::sync::mpsc;
use tracing::debug;

const LOG_CAPACITY: usize = 64;

/// Main application state.
pub struct App {
    game: GameController,
    cursor: Cursor,
    notice: Option<String>,
    log: VecDeque<String>,
    events: mpsc::Receiver<GameEvent>,
    should_quit: bool,
}

impl App {
    /// Creates the application around a fresh game.
    pub fn new(game: GameController) -> Self {
        let (tx, events) = mpsc::channel();
        let game = game.with_observer(move |event: &GameEvent| {
            let _ = tx.send(event.clone());
        });
        let center = game.dimension() / 2;

        Self {
            game,
            cursor: Cursor::new(center, center),
            notice: None,
            log: VecDeque::new(),
            events,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Gets the highlighted cell.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Turn or result banner.
    pub fn status(&self) -> String {
        status_line(&self.game)
    }

    /// Why the last key did nothing, if it did nothing.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Recent game events, newest last.
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    /// Checks if the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        debug!(?key, "Handling key");
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                match digit_to_cursor(c, self.game.dimension()) {
                    Some(cursor) => {
                        self.cursor = cursor;
                        self.place();
                    }
                    None => self.notice = Some(format!("No cell numbered {c} on this board")),
                }
            }
            other => self.cursor = move_cursor(self.cursor, other, self.game.dimension()),
        }
    }

    /// Moves the cursor to a clicked cell and plays there.
    pub fn click(&mut self, cell: Cursor) {
        debug!(row = cell.row, col = cell.col, "Cell clicked");
        self.cursor = cell;
        self.place();
    }

    /// Places the active player's token under the cursor.
    pub fn place(&mut self) {
        let Cursor { row, col } = self.cursor;
        self.notice = match self.game.play_round(row, col) {
            Ok(MoveOutcome::Continue { .. }) => None,
            Ok(MoveOutcome::Won { .. } | MoveOutcome::Draw) => {
                Some("Press 'r' to play again or 'q' to quit.".to_string())
            }
            Err(e) => Some(e.to_string()),
        };
        self.drain_events();
    }

    /// Clears the board and starts over.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.notice = None;
        self.drain_events();
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            if let Some(line) = self.describe(&event) {
                if self.log.len() == LOG_CAPACITY {
                    self.log.pop_front();
                }
                self.log.push_back(line);
            }
        }
    }

    fn describe(&self, event: &GameEvent) -> Option<String> {
        let name_of = |token: Token| {
            self.game
                .players()
                .iter()
                .find(|p| p.token() == token)
                .map(|p| p.name().to_string())
                .unwrap_or_default()
        };
        match event {
            GameEvent::MoveAccepted { token, row, col } => {
                Some(format!("{} ({token}) -> ({row}, {col})", name_of(*token)))
            }
            GameEvent::GameOver { outcome } => Some(match outcome.winner() {
                Some(token) => format!("{} ({token}) wins", name_of(token)),
                None => "Draw".to_string(),
            }),
            GameEvent::Reset => Some("New game".to_string()),
            GameEvent::MoveRejected { .. } => None,
        }
    }
}
