//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::{Config, DEFAULT_CONFIG};

impl Config {
    /// Get the global config directory path (~/.habla/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".habla")
    }

    /// Get the global config file path (~/.habla/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Command history database next to the config file in use.
    ///
    /// `~/.habla/history.db` unless an explicit config path was given.
    pub fn history_db_path(config_path: Option<&Path>) -> PathBuf {
        match config_path.and_then(Path::parent) {
            Some(dir) => dir.join("history.db"),
            None => Self::global_config_dir().join("history.db"),
        }
    }

    /// Get the scratch file used for microphone captures
    pub fn recording_path() -> PathBuf {
        Self::global_config_dir().join("recording.flac")
    }

    /// Load global configuration from ~/.habla/config.toml.
    /// If no config exists, auto-creates one with defaults.
    pub fn load() -> Result<Self> {
        Self::load_or_init(&Self::global_config_path())
    }

    /// Load `path`, writing the commented default there first if it is missing
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            Self::write_default(path)?;
            eprintln!("Created {}", path.display());
        }

        Self::from_file(path)
    }

    /// Load from an explicit path, or the global config when none is given
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Write the commented default configuration to `path`.
    ///
    /// 1. Exclusive lock prevents concurrent writers
    /// 2. Atomic write (temp file + rename) prevents corruption on crash
    /// 3. Parent directory is created if needed
    pub fn write_default(path: &Path) -> Result<()> {
        write_locked(path, DEFAULT_CONFIG)
    }
}

/// Write `content` to `path` under an exclusive lock, via temp file + rename
fn write_locked(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create config directory: {}", parent.display())
        })?;
    }

    // Lock file is separate from the config so the rename does not drop the lock
    let lock_path = path.with_extension("toml.lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

    lock_file
        .lock_exclusive()
        .with_context(|| "Failed to acquire config lock")?;

    let temp_path = path.with_extension("toml.tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write config content")?;

    temp_file
        .sync_all()
        .with_context(|| "Failed to sync config file")?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename config file: {}", path.display()))?;

    // Lock is released when lock_file is dropped
    Ok(())
}
