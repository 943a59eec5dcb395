//! Listen command implementation

use anyhow::Result;
use std::io::BufRead;
use std::path::Path;

use habla::assistant::{Assistant, AssistantHandle, CycleEnd, CycleEvent};
use habla::config::Config;
use habla::history::HistoryLog;
use habla::recognition::SpeechRecognizer;

/// Listen for voice commands until the exit command (or a single cycle with `once`)
pub fn listen_command(config: &Config, config_path: Option<&Path>, once: bool) -> Result<()> {
    let recognizer = SpeechRecognizer::new(&config.voice, Config::recording_path());
    let mut assistant = Assistant::from_config(config, Box::new(recognizer))?;
    match HistoryLog::open(&Config::history_db_path(config_path)) {
        Ok(history) => assistant = assistant.with_history(history),
        Err(e) => tracing::warn!("[habla:cli] History disabled: {}", e),
    }

    for line in &config.messages.welcome {
        println!("{}", line);
    }
    println!();

    let handle = AssistantHandle::new(assistant);
    let mut stdin = std::io::stdin().lock();
    handle.start_cycle();

    // The handle keeps a sender alive, so this only ends through `break`
    while let Ok(event) = handle.events().recv() {
        match event {
            CycleEvent::ListeningStarted => println!("{}", config.messages.listening),
            CycleEvent::Heard(text) => println!("> {}", text),
            CycleEvent::Status(text) => println!("{}", text),
            CycleEvent::Finished(end) => {
                tracing::debug!("[habla:cli] Cycle finished: {:?}", end);
                if once || end == CycleEnd::Exit {
                    break;
                }

                if !end.relisten() {
                    if end == CycleEnd::Failed {
                        println!("Press Enter to try again.");
                    }
                    // Enter re-arms the assistant; EOF quits
                    let mut line = String::new();
                    if stdin.read_line(&mut line)? == 0 {
                        break;
                    }
                }

                handle.start_cycle();
            }
        }
    }

    Ok(())
}
