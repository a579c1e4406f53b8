//! Game configuration loaded from TOML and command-line flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridmark_core::GameController;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a new game.
///
/// Every key is optional in the file; missing keys take the defaults
/// (`dimension = 3`, `player_one = "Player 1"`, `player_two = "Player 2"`).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Board dimension.
    dimension: usize,

    /// Name of the first player (places O).
    player_one: String,

    /// Name of the second player (places X).
    player_two: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimension: 3,
            player_one: "Player 1".to_string(),
            player_two: "Player 2".to_string(),
        }
    }
}

impl GameConfig {
    /// Largest board the terminal front ends can lay out.
    pub const MAX_DIMENSION: usize = 12;

    /// Loads board size and player names from a TOML file.
    #[instrument(skip(path), fields(config_path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Reading game config");
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(
                ConfigErrorKind::Read,
                format!("cannot read {}: {}", path.display(), e),
            )
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(
                ConfigErrorKind::Parse,
                format!("{} is not a valid game config: {}", path.display(), e),
            )
        })?;

        info!(
            dimension = config.dimension,
            player_one = %config.player_one,
            player_two = %config.player_two,
            "Game config loaded"
        );
        Ok(config)
    }

    /// Replaces the fields that have an override.
    pub fn with_overrides(
        mut self,
        dimension: Option<usize>,
        player_one: Option<String>,
        player_two: Option<String>,
    ) -> Self {
        if let Some(dimension) = dimension {
            self.dimension = dimension;
        }
        if let Some(name) = player_one {
            self.player_one = name;
        }
        if let Some(name) = player_two {
            self.player_two = name;
        }
        self
    }

    /// Checks the dimension range and that both names are non-blank.
    #[instrument(skip(self), fields(dimension = self.dimension))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=Self::MAX_DIMENSION).contains(&self.dimension) {
            return Err(ConfigError::new(
                ConfigErrorKind::Invalid,
                format!(
                    "board dimension must be between 1 and {}, got {}",
                    Self::MAX_DIMENSION,
                    self.dimension
                ),
            ));
        }
        if self.player_one.trim().is_empty() || self.player_two.trim().is_empty() {
            return Err(ConfigError::new(
                ConfigErrorKind::Invalid,
                "player names must not be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Builds a controller from this configuration.
    #[instrument(skip(self))]
    pub fn build_controller(&self) -> Result<GameController, ConfigError> {
        self.validate()?;
        GameController::new(
            self.player_one.trim(),
            self.player_two.trim(),
            self.dimension,
        )
        .map_err(|e| ConfigError::new(ConfigErrorKind::Invalid, e.to_string()))
    }
}

/// What went wrong while building a [`GameConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// The config file could not be read.
    #[display("unreadable config")]
    Read,
    /// The config file is not valid TOML or has unknown keys.
    #[display("malformed config")]
    Parse,
    /// A value is outside what a game accepts.
    #[display("invalid game settings")]
    Invalid,
}

/// Game configuration error, tagged with where it was raised.
#[derive(Debug, Clone, Display, Error)]
#[display("{kind}: {message} (raised at {file}:{line})")]
pub struct ConfigError {
    /// Category of the failure.
    pub kind: ConfigErrorKind,
    /// Details for the user.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a configuration error at the caller's location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind, message: String) -> Self {
        let loc = std::panic::Location::caller();
        debug!(%kind, %message, "Rejecting game config");
        Self {
            kind,
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
