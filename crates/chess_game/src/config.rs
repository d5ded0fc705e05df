//! Game settings loaded from a TOML file

use chess_core::{BoardState, ChessError, START_PLACEMENT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("bad start position: {0}")]
    Position(#[from] ChessError),
}

/// Settings for a game session. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Placement string the game starts from
    pub start_position: String,
    /// List the highlighted squares after a selection
    pub show_hints: bool,
    /// Draw the board with Black at the bottom
    pub flip_board: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            start_position: START_PLACEMENT.to_string(),
            show_hints: true,
            flip_board: false,
        }
    }
}

impl GameConfig {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Board described by `start_position`
    pub fn start_board(&self) -> Result<BoardState, ConfigError> {
        Ok(BoardState::from_placement(&self.start_position)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
