//! Line-oriented front end.
//!
//! Reads one command per line and answers on the writer, so it works over a
//! plain terminal, a pipe or in-memory buffers.

use crate::status::status_line;
use anyhow::Result;
use derive_more::{Display, Error};
use gridmark_core::{GameController, MoveOutcome};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  <row> <col>   place your token (0-based, also accepts row,col)
  show          print the board
  json          print the board as JSON
  reset         clear the board and start over
  help          show this help
  quit          leave the game";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place the active player's token.
    Place {
        /// Row, 0-based.
        row: usize,
        /// Column, 0-based.
        col: usize,
    },
    /// Clear the board.
    Reset,
    /// Print the board and status.
    Show,
    /// Print the board snapshot as JSON.
    Json,
    /// Print the command list.
    Help,
    /// Stop reading input.
    Quit,
}

/// An input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input '{input}': {reason}")]
pub struct ParseCommandError {
    /// The offending line, trimmed.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl ParseCommandError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

impl FromStr for ConsoleCommand {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        match input.to_ascii_lowercase().as_str() {
            "reset" | "r" => return Ok(Self::Reset),
            "show" | "s" => return Ok(Self::Show),
            "json" => return Ok(Self::Json),
            "help" | "h" | "?" => return Ok(Self::Help),
            "quit" | "q" | "exit" => return Ok(Self::Quit),
            _ => {}
        }

        let parts: Vec<&str> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => {
                let row = row
                    .parse()
                    .map_err(|_| ParseCommandError::new(input, "row must be a non-negative integer"))?;
                let col = col.parse().map_err(|_| {
                    ParseCommandError::new(input, "column must be a non-negative integer")
                })?;
                Ok(Self::Place { row, col })
            }
            [] => Err(ParseCommandError::new(input, "empty command")),
            _ => Err(ParseCommandError::new(input, "expected '<row> <col>' or a command")),
        }
    }
}

/// Runs the console game until `quit` or end of input.
#[instrument(skip_all, fields(dimension = game.dimension()))]
pub fn run<R: BufRead, W: Write>(game: &mut GameController, input: R, mut output: W) -> Result<()> {
    info!("Starting console session");
    let [first, second] = game.players();
    writeln!(
        output,
        "{n}x{n} board. {first} vs {second}. Type 'help' for commands.",
        n = game.dimension()
    )?;
    print_board(game, &mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<ConsoleCommand>() {
            Ok(ConsoleCommand::Quit) => break,
            Ok(command) => execute(game, command, &mut output)?,
            Err(e) => {
                debug!(error = %e, "Unparseable input");
                writeln!(output, "{}. Type 'help' for commands.", e)?;
            }
        }
        output.flush()?;
    }

    info!("Console session ended");
    Ok(())
}

/// Applies one command and writes its result.
#[instrument(skip(game, output))]
pub fn execute<W: Write>(game: &mut GameController, command: ConsoleCommand, output: &mut W) -> Result<()> {
    match command {
        ConsoleCommand::Place { row, col } => match game.play_round(row, col) {
            Ok(MoveOutcome::Continue { .. }) => print_board(game, output)?,
            Ok(MoveOutcome::Won { winner }) => {
                writeln!(output, "{}", game.board())?;
                writeln!(output, "{winner} wins! Type 'reset' to play again.")?;
            }
            Ok(MoveOutcome::Draw) => {
                writeln!(output, "{}", game.board())?;
                writeln!(output, "Draw! Type 'reset' to play again.")?;
            }
            Err(e) => writeln!(output, "Move rejected: {e}")?,
        },
        ConsoleCommand::Reset => {
            game.reset();
            writeln!(output, "Board cleared.")?;
            print_board(game, output)?;
        }
        ConsoleCommand::Show => print_board(game, output)?,
        ConsoleCommand::Json => {
            writeln!(output, "{}", serde_json::to_string(&game.board_snapshot())?)?;
        }
        ConsoleCommand::Help => writeln!(output, "{HELP}")?,
        ConsoleCommand::Quit => {}
    }
    Ok(())
}

fn print_board<W: Write>(game: &GameController, output: &mut W) -> Result<()> {
    writeln!(output, "{}", game.board())?;
    writeln!(output, "{}", status_line(game))?;
    Ok(())
}
