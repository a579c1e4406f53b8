//! Gridmark - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use gridmark::{Cli, Command, LOG_FILE, console, run_tui};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Tui => init_file_tracing()?,
        Command::Console => init_stderr_tracing(),
    }

    let config = cli.game_config().context("Invalid game configuration")?;
    info!(?config, command = ?cli.command, "Starting gridmark");
    let mut game = config.build_controller()?;

    match cli.command {
        Command::Tui => run_tui(game),
        Command::Console => console::run(&mut game, io::stdin().lock(), io::stdout().lock()),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Logs to a file so the TUI owns the terminal.
fn init_file_tracing() -> Result<()> {
    let log_file = std::fs::File::create(LOG_FILE)
        .with_context(|| format!("Failed to create log file {LOG_FILE}"))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .try_init();
}
