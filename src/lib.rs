//! Habla - voice-activated desktop assistant
//!
//! Habla listens for a spoken command, classifies it with an ordered table of
//! patterns and runs the matching action: open an application, play a song,
//! show help or stop.
//!
//! ## Pipeline
//!
//! 1. **Recognition**: a [`recognition::Recognizer`] turns speech into an [`Utterance`]
//! 2. **Matching**: the [`matcher::IntentMatcher`] picks exactly one [`Intent`]
//! 3. **Dispatch**: the [`dispatch::Dispatcher`] runs the action and updates the [`Session`]
//!
//! [`assistant::AssistantHandle`] runs these steps on a background thread and
//! streams progress events to the caller.

pub mod assistant;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod history;
pub mod launcher;
pub mod matcher;
pub mod media;
pub mod recognition;

pub use domain::*;
