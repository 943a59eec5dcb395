//! Settings configuration types

mod media;
mod messages;
mod voice;

pub use media::MediaSettings;
pub use messages::Messages;
pub use voice::VoiceSettings;
