//! Run command implementation

use anyhow::Result;
use std::path::Path;
use std::sync::mpsc;

use habla::assistant::{Assistant, CycleEnd, CycleEvent};
use habla::config::Config;
use habla::history::HistoryLog;
use habla::recognition::TypedText;

/// Handle one typed command as if it had been spoken
pub fn run_command(config: &Config, config_path: Option<&Path>, text: &str) -> Result<()> {
    let mut assistant = Assistant::from_config(config, Box::new(TypedText::new(text)))?;
    match HistoryLog::open(&Config::history_db_path(config_path)) {
        Ok(history) => assistant = assistant.with_history(history),
        Err(e) => tracing::warn!("[habla:cli] History disabled: {}", e),
    }

    let (tx, rx) = mpsc::channel();
    let end = assistant.run_cycle(&tx);
    drop(tx);

    for event in rx {
        if let CycleEvent::Status(text) = event {
            println!("{}", text);
        }
    }

    if end == CycleEnd::Exit {
        println!("Bye.");
    }

    Ok(())
}
