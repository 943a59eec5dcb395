//! Listen-dispatch orchestration
//!
//! One cycle: ask the recognizer for an utterance, classify it, dispatch it,
//! and report progress as [`CycleEvent`]s. [`AssistantHandle`] runs cycles on
//! a background thread and refuses to start a second one while the first is
//! still active.

mod handle;

pub use handle::AssistantHandle;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::Sender;
use std::sync::Arc;

use crate::config::{Config, Messages};
use crate::dispatch::{Dispatched, Dispatcher};
use crate::domain::{ActionResult, Session, Utterance};
use crate::history::HistoryLog;
use crate::launcher::{launcher_for, Platform, SystemSpawner};
use crate::matcher::{IntentMatcher, MatcherError};
use crate::media::YouTubeSearch;
use crate::recognition::Recognizer;

/// Progress of a listen cycle, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleEvent {
    ListeningStarted,
    /// Normalized transcript of what was heard
    Heard(String),
    /// Free-text status for the user
    Status(String),
    Finished(CycleEnd),
}

/// How a listen cycle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEnd {
    /// No speech, or speech that could not be transcribed
    NothingHeard,
    /// A non-terminal command ran (help, unknown, search files)
    Continue,
    /// A terminal action ran; the user has to re-arm the assistant
    Stopped,
    /// The exit command was given
    Exit,
    /// Recognition failed or the cycle panicked
    Failed,
}

impl CycleEnd {
    /// Whether the caller may start the next cycle without user input
    pub fn relisten(&self) -> bool {
        matches!(self, CycleEnd::NothingHeard | CycleEnd::Continue)
    }
}

/// Matcher, dispatcher and recognizer plus the session they share
pub struct Assistant {
    matcher: IntentMatcher,
    dispatcher: Dispatcher,
    recognizer: Box<dyn Recognizer>,
    history: Option<HistoryLog>,
    session: Session,
}

impl Assistant {
    pub fn new(
        matcher: IntentMatcher,
        dispatcher: Dispatcher,
        recognizer: Box<dyn Recognizer>,
    ) -> Self {
        Self {
            matcher,
            dispatcher,
            recognizer,
            history: None,
            session: Session::new(),
        }
    }

    /// Wire up the real collaborators for the current platform
    pub fn from_config(
        config: &Config,
        recognizer: Box<dyn Recognizer>,
    ) -> Result<Self, MatcherError> {
        let matcher = IntentMatcher::from_settings(&config.commands)?;

        let platform = Platform::detect();
        tracing::debug!("[habla:assistant] Platform: {}", platform);
        let launcher = launcher_for(
            platform,
            config.apps.for_platform(platform),
            Arc::new(SystemSpawner),
        );
        let media = Box::new(YouTubeSearch::new(config.media.clone()));
        let dispatcher = Dispatcher::new(launcher, media, config.messages.clone());

        Ok(Self::new(matcher, dispatcher, recognizer))
    }

    /// Store every handled utterance in `history`
    pub fn with_history(mut self, history: HistoryLog) -> Self {
        self.history = Some(history);
        self
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn messages(&self) -> &Messages {
        self.dispatcher.messages()
    }

    /// Re-arm the session for a new listen cycle
    pub fn begin_cycle(&mut self) {
        self.session.begin_cycle();
    }

    /// Classify and dispatch one utterance.
    ///
    /// Never fails: dispatch errors and panics become a failed result and
    /// leave the session as it was.
    pub fn handle_utterance(&mut self, utterance: &Utterance) -> ActionResult {
        let command = self.matcher.match_utterance(utterance.as_str());
        tracing::debug!(
            "[habla:assistant] {:?} -> {} {:?}",
            utterance.as_str(),
            command.intent,
            command.argument()
        );

        let session = self.session;
        let dispatcher = &self.dispatcher;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| dispatcher.dispatch(session, &command)));

        let result = match outcome {
            Ok(Ok(Dispatched { session, result })) => {
                self.session = session;
                result
            }
            Ok(Err(e)) => {
                tracing::error!("[habla:assistant] Dispatch rejected: {}", e);
                ActionResult::failed(self.messages().internal_error.clone(), e.to_string())
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!("[habla:assistant] Dispatch panicked: {}", message);
                ActionResult::failed(self.messages().internal_error.clone(), message)
            }
        };

        if let Some(history) = &self.history {
            if let Err(e) = history.record(utterance, &command, &result) {
                tracing::warn!("[habla:assistant] Failed to record history: {}", e);
            }
        }

        result
    }

    /// Run one listen cycle, streaming progress to `events`.
    ///
    /// The caller sends the final [`CycleEvent::Finished`] with the returned value.
    pub fn run_cycle(&mut self, events: &Sender<CycleEvent>) -> CycleEnd {
        let _ = events.send(CycleEvent::ListeningStarted);

        let utterance = match self.recognizer.listen() {
            Ok(utterance) => utterance,
            Err(e) => {
                tracing::warn!("[habla:assistant] Recognition failed: {}", e);
                let _ = events.send(CycleEvent::Status(e.to_string()));
                return CycleEnd::Failed;
            }
        };

        if utterance.is_empty() {
            let _ = events.send(CycleEvent::Status(self.messages().no_command.clone()));
            return CycleEnd::NothingHeard;
        }

        let _ = events.send(CycleEvent::Heard(utterance.as_str().to_string()));
        let result = self.handle_utterance(&utterance);

        if result.is_exit() {
            return CycleEnd::Exit;
        }

        let _ = events.send(CycleEvent::Status(result.to_string()));
        if self.session.is_listening() {
            CycleEnd::Continue
        } else {
            let _ = events.send(CycleEvent::Status(self.messages().completed.clone()));
            CycleEnd::Stopped
        }
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
