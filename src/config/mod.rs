//! Configuration loading and management

mod apps;
mod commands;
mod defaults;
mod io;
mod settings;

pub use apps::{AppTable, AppTables, AppTarget};
pub use commands::{
    CommandSettings, RuleConfig, EXIT_PATTERN, HELP_PATTERN, OPEN_APP_PATTERN,
    PLAY_MEDIA_PATTERN, SEARCH_FILES_PATTERN,
};
pub use defaults::DEFAULT_CONFIG;
pub use settings::{MediaSettings, Messages, VoiceSettings};

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main configuration structure.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Speech recognition settings
    #[serde(default)]
    pub voice: VoiceSettings,

    /// Command rules (priority order)
    #[serde(default)]
    pub commands: CommandSettings,

    /// Application tables per platform
    #[serde(default)]
    pub apps: AppTables,

    /// Media search settings
    #[serde(default)]
    pub media: MediaSettings,

    /// User-facing status strings
    #[serde(default)]
    pub messages: Messages,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
