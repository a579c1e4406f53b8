//! Gridmark - generalized tic-tac-toe on an n×n board
//!
//! The game rules live in [`gridmark_core`]; this crate adds the front ends
//! and the configuration around them.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Console**: line-oriented play over any reader/writer
//! - **TUI**: full-screen terminal UI (ratatui + crossterm)
//!
//! # Example
//!
//! ```
//! use gridmark::{GameConfig, console};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut game = GameConfig::default().build_controller()?;
//! let mut output = Vec::new();
//! console::run(&mut game, "1 1\nquit\n".as_bytes(), &mut output)?;
//! assert!(String::from_utf8(output)?.contains("Player 2 (X)'s turn"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod status;
mod tui;

pub mod console;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, ConfigErrorKind, GameConfig};

// Crate-level exports - Front ends
pub use console::{ConsoleCommand, ParseCommandError};
pub use status::status_line;
pub use tui::{App, Cursor, LOG_FILE, digit_to_cursor, move_cursor, run_tui};

// Crate-level exports - Game types
pub use gridmark_core::{
    Board, BoardSnapshot, Cell, GameController, GameEvent, GameObserver, GameState, MoveError,
    MoveOutcome, Outcome, Player, SetupError, Token,
};
