//! Recognition collaborator - microphone capture and speech-to-text
//!
//! [`SpeechRecognizer`] records one phrase with sox (`rec`), using its
//! silence effect to wait for speech and to end the phrase after a pause,
//! then sends the FLAC capture to a speech web API.
//!
//! "Nothing heard" (timeout, silence, unintelligible audio) is not an error:
//! `listen` returns an empty [`Utterance`]. Errors mean the microphone or the
//! recognition service is unavailable.

mod google;
mod recording;

pub use google::{parse_transcript, GoogleSpeech};
pub use recording::{parse_rms_amplitude, speech_threshold_percent, SoxRecorder};

use std::path::PathBuf;

use crate::config::VoiceSettings;
use crate::domain::Utterance;

/// Error type for speech recognition
#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("Microphone unavailable: {0}")]
    MicrophoneUnavailable(String),

    #[error("Recording failed: {0}")]
    Recorder(#[from] std::io::Error),

    #[error("Speech service request failed: {0}")]
    Service(String),

    #[error("Invalid speech service response: {0}")]
    InvalidResponse(String),
}

/// Supplies the next spoken command
pub trait Recognizer: Send {
    /// Block until a phrase was heard or the configured timeout passed
    fn listen(&self) -> Result<Utterance, RecognitionError>;
}

/// Recognizer that "hears" a fixed text, used for typed commands
pub struct TypedText(String);

impl TypedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Recognizer for TypedText {
    fn listen(&self) -> Result<Utterance, RecognitionError> {
        Ok(Utterance::new(&self.0))
    }
}

/// Microphone + speech web API recognizer
pub struct SpeechRecognizer {
    recorder: SoxRecorder,
    service: GoogleSpeech,
    recording_path: PathBuf,
}

impl SpeechRecognizer {
    pub fn new(settings: &VoiceSettings, recording_path: PathBuf) -> Self {
        Self {
            recorder: SoxRecorder::new(settings.clone()),
            service: GoogleSpeech::new(settings),
            recording_path,
        }
    }
}

impl Recognizer for SpeechRecognizer {
    fn listen(&self) -> Result<Utterance, RecognitionError> {
        self.recorder.check_available()?;

        if let Some(parent) = self.recording_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let threshold = self.recorder.calibrate();
        let Some(audio_path) = self.recorder.record_phrase(&self.recording_path, threshold)? else {
            tracing::debug!("[habla:voice] Timed out waiting for speech");
            return Ok(Utterance::empty());
        };

        let audio = std::fs::read(&audio_path);
        let _ = std::fs::remove_file(&audio_path);
        let text = self.service.transcribe(audio?)?;

        if text.is_empty() {
            tracing::debug!("[habla:voice] Audio could not be understood");
        } else {
            tracing::info!("[habla:voice] Heard: {}", text);
        }
        Ok(Utterance::new(text))
    }
}
