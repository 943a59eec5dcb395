//! History command implementation

use anyhow::Result;
use chrono::Local;
use std::path::Path;

use habla::config::Config;
use habla::history::HistoryLog;

/// Show (or clear) the command history kept next to the config file
pub fn history_command(config_path: Option<&Path>, limit: usize, clear: bool) -> Result<()> {
    let history = HistoryLog::open(&Config::history_db_path(config_path))?;

    if clear {
        let removed = history.clear()?;
        println!("Removed {} entries.", removed);
        return Ok(());
    }

    let entries = history.recent(limit)?;
    if entries.is_empty() {
        println!("No commands recorded yet.");
        return Ok(());
    }

    println!("Recent commands ({}):\n", entries.len());

    for entry in entries {
        let marker = if entry.success { "ok" } else { "failed" };
        println!(
            "  {} [{}] {:?} -> {}",
            entry.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"),
            entry.intent,
            entry.utterance,
            marker
        );
        println!("    {}", entry.result_text);
    }

    Ok(())
}
