//! Command-line interface for gridmark.

use crate::config::{ConfigError, GameConfig};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::instrument;

/// Gridmark - tic-tac-toe on an n×n board
#[derive(Parser, Debug)]
#[command(name = "gridmark")]
#[command(about = "Two-player connection game on an n×n board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Board dimension (overrides the config file)
    #[arg(short = 'n', long, global = true)]
    pub dimension: Option<usize>,

    /// Name of the first player, who places O (overrides the config file)
    #[arg(long, global = true)]
    pub player_one: Option<String>,

    /// Name of the second player, who places X (overrides the config file)
    #[arg(long, global = true)]
    pub player_two: Option<String>,

    /// Front end to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Run the full-screen terminal UI
    Tui,

    /// Play over stdin/stdout, one command per line
    Console,
}

impl Cli {
    /// Resolves the game configuration: flags over config file over defaults.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        let config = base.with_overrides(
            self.dimension,
            self.player_one.clone(),
            self.player_two.clone(),
        );
        config.validate()?;
        Ok(config)
    }
}
