//! Host configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Presentation settings for the terminal host.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HostConfig {
    /// Appended to the player's mark while a game is running.
    #[serde(default = "default_turn_suffix")]
    turn_suffix: String,

    /// Appended to the winner's mark.
    #[serde(default = "default_winner_suffix")]
    winner_suffix: String,

    /// Shown when the game is drawn.
    #[serde(default = "default_draw_message")]
    draw_message: String,

    /// Show keypad numbers in empty cells.
    #[serde(default = "default_show_hints")]
    show_hints: bool,

    /// Tracing filter used when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_turn_suffix() -> String {
    "'s turn".to_string()
}

fn default_winner_suffix() -> String {
    " wins".to_string()
}

fn default_draw_message() -> String {
    "Draw".to_string()
}

fn default_show_hints() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            turn_suffix: default_turn_suffix(),
            winner_suffix: default_winner_suffix(),
            draw_message: default_draw_message(),
            show_hints: default_show_hints(),
            log_filter: default_log_filter(),
        }
    }
}

impl HostConfig {
    /// Loads configuration from a TOML file. Absent keys take defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads from `path` when given, otherwise returns defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
