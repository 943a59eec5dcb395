//! Shared fakes for integration tests
#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};

use habla::assistant::Assistant;
use habla::config::{AppTable, Config};
use habla::dispatch::Dispatcher;
use habla::launcher::{launcher_for, Platform, Spawner};
use habla::matcher::IntentMatcher;
use habla::media::MediaSearch;
use habla::recognition::{RecognitionError, Recognizer};
use habla::Utterance;

/// Records every spawn; programs in `missing` fail like a missing executable
#[derive(Default)]
pub struct RecordingSpawner {
    pub calls: Mutex<Vec<(String, Vec<String>)>>,
    pub missing: HashSet<String>,
}

impl RecordingSpawner {
    pub fn missing(programs: &[&str]) -> Self {
        Self {
            missing: programs.iter().map(|p| p.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(program, _)| program.clone())
            .collect()
    }

    pub fn last_args(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|(_, args)| args.clone())
            .unwrap_or_default()
    }
}

impl Spawner for RecordingSpawner {
    fn spawn(&self, program: &str, args: &[&str]) -> std::io::Result<()> {
        self.calls.lock().unwrap().push((
            program.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
        ));
        if self.missing.contains(program) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} not found", program),
            ));
        }
        Ok(())
    }
}

/// Media search with a canned answer
pub struct FakeSearch {
    pub direct: Option<String>,
}

impl MediaSearch for FakeSearch {
    fn search(&self, _query: &str) -> Option<String> {
        self.direct.clone()
    }

    fn results_url(&self, query: &str) -> String {
        format!("https://media.test/results?q={}", query.replace(' ', "+"))
    }
}

/// Hears the queued phrases in order, then nothing
#[derive(Default)]
pub struct ScriptedRecognizer {
    phrases: Mutex<VecDeque<String>>,
}

impl ScriptedRecognizer {
    pub fn new(phrases: &[&str]) -> Self {
        Self {
            phrases: Mutex::new(phrases.iter().map(|p| p.to_string()).collect()),
        }
    }
}

impl Recognizer for ScriptedRecognizer {
    fn listen(&self) -> Result<Utterance, RecognitionError> {
        let phrase = self.phrases.lock().unwrap().pop_front().unwrap_or_default();
        Ok(Utterance::new(phrase))
    }
}

/// Assistant wired to the real launcher for `platform`, over fake process and network seams
pub fn assistant(
    platform: Platform,
    apps: AppTable,
    spawner: Arc<RecordingSpawner>,
    search: FakeSearch,
    recognizer: ScriptedRecognizer,
) -> Assistant {
    let config = Config::default();
    let launcher = launcher_for(platform, apps, spawner);
    let dispatcher = Dispatcher::new(launcher, Box::new(search), config.messages.clone());
    let matcher = IntentMatcher::from_settings(&config.commands).unwrap();
    Assistant::new(matcher, dispatcher, Box::new(recognizer))
}
