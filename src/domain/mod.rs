//! Core domain types for habla

mod action_result;
mod intent;
mod session;
mod utterance;

pub use action_result::{ActionResult, EXIT_MARKER};
pub use intent::{Intent, IntentMatch};
pub use session::Session;
pub use utterance::Utterance;
