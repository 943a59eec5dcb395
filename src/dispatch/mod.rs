//! Action Dispatcher - runs the action for a classified command
//!
//! Every collaborator failure (launch, network) is converted into an
//! [`ActionResult`] with `success == false`. The only error `dispatch` returns
//! is a caller bug: an argument-requiring intent without an argument.
//!
//! Session transitions:
//!
//! ```text
//! Listening --(OpenApp | PlayMedia | Exit)--> Stopped --(begin_cycle)--> Listening
//! ```
//!
//! `OpenApp` and `PlayMedia` stop the session even when the launch failed.

use crate::config::Messages;
use crate::domain::{ActionResult, Intent, IntentMatch, Session};
use crate::launcher::Launcher;
use crate::media::{play_media, MediaSearch};

/// Error type for malformed dispatch calls
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("The {0} command needs an argument")]
    MissingArgument(Intent),
}

/// Result of one dispatch: the updated session and the action outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub session: Session,
    pub result: ActionResult,
}

/// Maps intents to actions on the launch and media collaborators
pub struct Dispatcher {
    launcher: Box<dyn Launcher>,
    media: Box<dyn MediaSearch>,
    messages: Messages,
}

impl Dispatcher {
    pub fn new(
        launcher: Box<dyn Launcher>,
        media: Box<dyn MediaSearch>,
        messages: Messages,
    ) -> Self {
        Self {
            launcher,
            media,
            messages,
        }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Execute `command` and return the session as it stands afterwards
    pub fn dispatch(
        &self,
        mut session: Session,
        command: &IntentMatch,
    ) -> Result<Dispatched, DispatchError> {
        let result = match command.intent {
            Intent::OpenApp => self.open_app(required(command)?),
            Intent::PlayMedia => self.play(required(command)?),
            Intent::SearchFiles => {
                required(command)?;
                ActionResult::ok(self.messages.search_files.clone())
            }
            Intent::Help => ActionResult::ok(self.messages.help.clone()),
            Intent::Exit => ActionResult::exit(),
            Intent::Unknown => ActionResult::ok(self.messages.unknown_command.clone())
                .with_success(false),
        };

        // Terminal intents stop the session whatever the action's outcome
        if command.intent.stops_listening() {
            session.stop();
        }

        Ok(Dispatched { session, result })
    }

    fn open_app(&self, app: &str) -> ActionResult {
        let text = self.messages.opening(app);
        match self.launcher.launch(app) {
            Ok(()) => {
                tracing::info!("[habla:dispatch] Launched {}", app);
                ActionResult::ok(text)
            }
            Err(e) => {
                tracing::warn!("[habla:dispatch] Failed to launch {}: {}", app, e);
                ActionResult::failed(text, e.to_string())
            }
        }
    }

    fn play(&self, query: &str) -> ActionResult {
        let text = self.messages.playing(query);
        match play_media(self.media.as_ref(), self.launcher.as_ref(), query) {
            Ok(_) => ActionResult::ok(text),
            Err(e) => {
                tracing::warn!("[habla:dispatch] Failed to play {:?}: {}", query, e);
                ActionResult::failed(text, e.to_string())
            }
        }
    }
}

fn required(command: &IntentMatch) -> Result<&str, DispatchError> {
    command
        .argument()
        .map(str::trim)
        .filter(|arg| !arg.is_empty())
        .ok_or(DispatchError::MissingArgument(command.intent))
}
