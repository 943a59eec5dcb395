//! Init command implementation

use anyhow::{bail, Result};
use std::path::PathBuf;

use habla::config::Config;

/// Write the commented default configuration
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    // Default to global config path
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::write_default(&config_path)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
