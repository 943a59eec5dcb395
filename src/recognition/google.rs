//! Speech web API client.
//!
//! The service answers with one JSON object per line; the first lines are
//! usually `{"result":[]}` placeholders.

use std::time::Duration;

use serde::Deserialize;

use super::RecognitionError;
use crate::config::VoiceSettings;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Deserialize)]
struct RecognitionResponse {
    #[serde(default)]
    result: Vec<RecognitionResult>,
}

#[derive(Debug, Deserialize)]
struct RecognitionResult {
    #[serde(default)]
    alternative: Vec<Alternative>,
}

#[derive(Debug, Deserialize)]
struct Alternative {
    #[serde(default)]
    transcript: String,
    confidence: Option<f64>,
}

/// Transcribes FLAC captures through the speech web API
pub struct GoogleSpeech {
    agent: ureq::Agent,
    url: String,
    api_key: String,
    language: String,
    sample_rate: u32,
}

impl GoogleSpeech {
    pub fn new(settings: &VoiceSettings) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self {
            agent,
            url: settings.recognition_url.clone(),
            api_key: settings.api_key.clone(),
            language: settings.language.clone(),
            sample_rate: settings.sample_rate,
        }
    }

    /// Send one FLAC capture and return its transcript ("" when not understood)
    pub fn transcribe(&self, audio: Vec<u8>) -> Result<String, RecognitionError> {
        let response = self
            .agent
            .post(&self.url)
            .query("client", "chromium")
            .query("lang", &self.language)
            .query("key", &self.api_key)
            .query("pFilter", "0")
            .set("Content-Type", &format!("audio/x-flac; rate={}", self.sample_rate))
            .send_bytes(&audio)
            .map_err(|e| match e {
                ureq::Error::Status(code, resp) => {
                    let body = resp.into_string().unwrap_or_default();
                    RecognitionError::Service(format!("HTTP {}: {}", code, body.trim()))
                }
                other => RecognitionError::Service(other.to_string()),
            })?;

        let body = response
            .into_string()
            .map_err(|e| RecognitionError::InvalidResponse(e.to_string()))?;
        parse_transcript(&body)
    }
}

/// Pick the transcript out of a recognition response body.
///
/// Uses the first non-empty result; within it, the alternative carrying a
/// confidence score wins, otherwise the first one.
pub fn parse_transcript(body: &str) -> Result<String, RecognitionError> {
    for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let response: RecognitionResponse = serde_json::from_str(line)
            .map_err(|e| RecognitionError::InvalidResponse(e.to_string()))?;

        let Some(result) = response.result.into_iter().find(|r| !r.alternative.is_empty()) else {
            continue;
        };

        let mut alternatives = result.alternative;
        let index = alternatives
            .iter()
            .position(|a| a.confidence.is_some())
            .unwrap_or(0);
        return Ok(alternatives.swap_remove(index).transcript.trim().to_string());
    }

    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transcript_skips_empty_results() {
        let body = concat!(
            "{\"result\":[]}\n",
            "{\"result\":[{\"alternative\":[{\"transcript\":\"abre notepad\",\"confidence\":0.93},",
            "{\"transcript\":\"abre note pad\"}],\"final\":true}],\"result_index\":0}\n"
        );
        assert_eq!(parse_transcript(body).unwrap(), "abre notepad");
    }

    #[test]
    fn test_parse_transcript_prefers_scored_alternative() {
        let body = "{\"result\":[{\"alternative\":[{\"transcript\":\"pon musica\"},\
                    {\"transcript\":\"pon música\",\"confidence\":0.8}]}]}";
        assert_eq!(parse_transcript(body).unwrap(), "pon música");
    }

    #[test]
    fn test_parse_transcript_nothing_understood() {
        assert_eq!(parse_transcript("{\"result\":[]}\n").unwrap(), "");
        assert_eq!(parse_transcript("").unwrap(), "");
    }

    #[test]
    fn test_parse_transcript_rejects_garbage() {
        let err = parse_transcript("<html>quota exceeded</html>").unwrap_err();
        assert!(matches!(err, RecognitionError::InvalidResponse(_)));
    }

    #[test]
    fn test_transcribe_unreachable_service() {
        let settings = VoiceSettings {
            recognition_url: "http://127.0.0.1:9/recognize".to_string(),
            ..VoiceSettings::default()
        };
        let err = GoogleSpeech::new(&settings)
            .transcribe(vec![0u8; 16])
            .unwrap_err();
        assert!(matches!(err, RecognitionError::Service(_)));
    }
}
