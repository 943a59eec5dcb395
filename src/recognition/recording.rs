//! Phrase capture with sox.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use regex::Regex;

use super::RecognitionError;
use crate::config::VoiceSettings;

/// Captures smaller than this hold no speech (FLAC header only)
const MIN_AUDIO_BYTES: u64 = 1024;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Encoded audio reaches the file in blocks, so speech shows up this much late
const ENCODER_LAG: Duration = Duration::from_secs(1);

/// How long sox gets to finalize a file after SIGTERM
const STOP_GRACE: Duration = Duration::from_millis(500);

/// Extra time a calibration capture may take beyond its sample length
const CALIBRATION_GRACE: Duration = Duration::from_secs(2);

/// RMS values scale the ambient level up before it becomes the speech threshold
const AMBIENT_RATIO: f32 = 1.5;

static RMS_AMPLITUDE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"RMS\s+amplitude:\s+([0-9]*\.?[0-9]+)").expect("rms pattern is valid")
});

/// Records phrases from the default microphone through `rec`
pub struct SoxRecorder {
    settings: VoiceSettings,
}

impl SoxRecorder {
    pub fn new(settings: VoiceSettings) -> Self {
        Self { settings }
    }

    /// Check that sox's `rec` is installed
    pub fn check_available(&self) -> Result<(), RecognitionError> {
        #[cfg(target_os = "windows")]
        let lookup = Command::new("where").arg("rec").output();
        #[cfg(not(target_os = "windows"))]
        let lookup = Command::new("which").arg("rec").output();

        match lookup {
            Ok(output) if output.status.success() => Ok(()),
            _ => Err(RecognitionError::MicrophoneUnavailable(
                "sox not found. Install it with: brew install sox / apt install sox".to_string(),
            )),
        }
    }

    /// Measure ambient noise and return the silence threshold in percent.
    ///
    /// Falls back to the configured energy threshold when sampling fails or
    /// the device does not deliver audio in time.
    pub fn calibrate(&self) -> f32 {
        let configured = speech_threshold_percent(self.settings.energy_threshold, None);
        if self.settings.ambient_noise_duration <= 0.0 {
            return configured;
        }

        let spawned = Command::new("rec")
            .args([
                "-r",
                &self.settings.sample_rate.to_string(),
                "-c",
                "1",
                "-n",
                "trim",
                "0",
                &format!("{}", self.settings.ambient_noise_duration),
                "stat",
            ])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                tracing::warn!("[habla:voice] Ambient noise calibration failed: {}", e);
                return configured;
            }
        };

        let limit = secs(self.settings.ambient_noise_duration).saturating_add(CALIBRATION_GRACE);
        match wait_with_deadline(&mut child, limit) {
            Ok(Some(_)) => {
                let mut stderr = String::new();
                if let Some(mut pipe) = child.stderr.take() {
                    let _ = pipe.read_to_string(&mut stderr);
                }
                let ambient = parse_rms_amplitude(&stderr);
                let threshold = speech_threshold_percent(self.settings.energy_threshold, ambient);
                tracing::debug!(
                    "[habla:voice] Ambient RMS {:?}, speech threshold {:.2}%",
                    ambient,
                    threshold
                );
                threshold
            }
            Ok(None) => {
                tracing::warn!(
                    "[habla:voice] Ambient noise calibration timed out after {:.1}s",
                    limit.as_secs_f32()
                );
                configured
            }
            Err(e) => {
                tracing::warn!("[habla:voice] Ambient noise calibration failed: {}", e);
                configured
            }
        }
    }

    /// Arguments for `rec` capturing one phrase into `path`
    pub fn phrase_args(&self, path: &Path, threshold_percent: f32) -> Vec<String> {
        let threshold = format!("{:.2}%", threshold_percent);
        vec![
            "-q".to_string(),
            "-r".to_string(),
            self.settings.sample_rate.to_string(),
            "-c".to_string(),
            "1".to_string(),
            "-b".to_string(),
            "16".to_string(),
            path.display().to_string(),
            // Wait for sound above the threshold...
            "silence".to_string(),
            "1".to_string(),
            "0.1".to_string(),
            threshold.clone(),
            // ...and stop after a pause
            "1".to_string(),
            format!("{}", self.settings.pause_threshold),
            threshold,
            "trim".to_string(),
            "0".to_string(),
            format!("{}", self.settings.phrase_time_limit),
        ]
    }

    /// Time limits for one phrase capture
    pub fn limits(&self) -> CaptureLimits {
        CaptureLimits::from_settings(&self.settings)
    }

    /// Record one phrase. `None` when no speech started before the timeout.
    pub fn record_phrase(
        &self,
        path: &Path,
        threshold_percent: f32,
    ) -> Result<Option<PathBuf>, RecognitionError> {
        let _ = std::fs::remove_file(path);

        let mut child = Command::new("rec")
            .args(self.phrase_args(path, threshold_percent))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                RecognitionError::MicrophoneUnavailable(format!("Failed to start recording: {}", e))
            })?;

        let started = Instant::now();
        let limits = self.limits();
        let mut speech_at = None;

        loop {
            match child.try_wait()? {
                Some(status) if status.success() => break,
                Some(_) => {
                    let mut stderr = String::new();
                    if let Some(mut pipe) = child.stderr.take() {
                        let _ = pipe.read_to_string(&mut stderr);
                    }
                    return Err(RecognitionError::MicrophoneUnavailable(stderr.trim().to_string()));
                }
                None => {
                    let elapsed = started.elapsed();
                    if speech_at.is_none() && captured_bytes(path) >= MIN_AUDIO_BYTES {
                        tracing::debug!(
                            "[habla:voice] Speech started after {:.1}s",
                            elapsed.as_secs_f32()
                        );
                        speech_at = Some(elapsed);
                    }

                    if limits.expired(elapsed, speech_at) {
                        stop_recording_process(child);
                        if speech_at.is_none() {
                            let _ = std::fs::remove_file(path);
                            return Ok(None);
                        }
                        // Keep what was said before the cutoff
                        break;
                    }

                    thread::sleep(POLL_INTERVAL);
                }
            }
        }

        if captured_bytes(path) < MIN_AUDIO_BYTES {
            let _ = std::fs::remove_file(path);
            return Ok(None);
        }
        Ok(Some(path.to_path_buf()))
    }
}

/// Time limits of one phrase capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureLimits {
    /// Longest wait for speech to start
    pub onset: Duration,
    /// Longest capture once speech has started
    pub phrase: Duration,
}

impl CaptureLimits {
    pub fn from_settings(settings: &VoiceSettings) -> Self {
        Self {
            onset: secs(settings.timeout).saturating_add(ENCODER_LAG),
            phrase: secs(settings.phrase_time_limit + settings.pause_threshold)
                .saturating_add(ENCODER_LAG),
        }
    }

    /// Whether a capture running for `elapsed` is over time.
    ///
    /// `speech_at` is when audio first reached the capture file.
    pub fn expired(&self, elapsed: Duration, speech_at: Option<Duration>) -> bool {
        match speech_at {
            None => elapsed >= self.onset,
            Some(onset) => elapsed >= onset.saturating_add(self.phrase),
        }
    }
}

fn secs(value: f32) -> Duration {
    Duration::try_from_secs_f32(value.max(0.0)).unwrap_or(Duration::MAX)
}

fn captured_bytes(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

/// Wait for `child` to exit, killing it once `limit` has passed.
///
/// `None` means the process was killed.
fn wait_with_deadline(child: &mut Child, limit: Duration) -> std::io::Result<Option<ExitStatus>> {
    let started = Instant::now();
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if started.elapsed() >= limit {
            let _ = child.kill();
            let _ = child.wait();
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

/// Stop a recording process gracefully
///
/// SIGTERM first so sox can finalize the file, then kill.
fn stop_recording_process(mut process: Child) {
    #[cfg(unix)]
    {
        let _ = Command::new("kill")
            .args(["-TERM", &process.id().to_string()])
            .output();
        if let Ok(Some(_)) = wait_with_deadline(&mut process, STOP_GRACE) {
            return;
        }
    }
    let _ = process.kill();
    let _ = process.wait();
}

/// Parse the RMS amplitude (0.0-1.0) from sox `stat` output
pub fn parse_rms_amplitude(stat_output: &str) -> Option<f32> {
    RMS_AMPLITUDE
        .captures(stat_output)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Silence threshold in percent of full scale.
///
/// `energy_threshold` is a 16-bit RMS level; the ambient level, when known,
/// raises the threshold above background noise.
pub fn speech_threshold_percent(energy_threshold: f32, ambient_rms: Option<f32>) -> f32 {
    let configured = energy_threshold / i16::MAX as f32;
    let ambient = ambient_rms.map(|rms| rms * AMBIENT_RATIO).unwrap_or(0.0);
    configured.max(ambient) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAT_OUTPUT: &str = "\
Samples read:              8000
Length (seconds):      0.500000
Maximum amplitude:     0.045166
Minimum amplitude:    -0.041504
RMS     amplitude:     0.012020
Mean    norm:          0.009543
";

    #[test]
    fn test_parse_rms_amplitude() {
        assert_eq!(parse_rms_amplitude(STAT_OUTPUT), Some(0.012020));
        assert_eq!(parse_rms_amplitude("rec WARN alsa: can't encode"), None);
    }

    #[test]
    fn test_threshold_uses_configured_energy_in_quiet_rooms() {
        let quiet = speech_threshold_percent(300.0, Some(0.001));
        assert!((quiet - 300.0 / 32767.0 * 100.0).abs() < 1e-4);
        assert_eq!(quiet, speech_threshold_percent(300.0, None));
    }

    #[test]
    fn test_threshold_rises_with_ambient_noise() {
        let noisy = speech_threshold_percent(300.0, Some(0.02));
        assert!((noisy - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_phrase_args() {
        let recorder = SoxRecorder::new(VoiceSettings::default());
        let args = recorder.phrase_args(Path::new("/tmp/phrase.flac"), 0.9155);

        assert_eq!(args[7], "/tmp/phrase.flac");
        assert_eq!(
            &args[8..],
            &["silence", "1", "0.1", "0.92%", "1", "0.8", "0.92%", "trim", "0", "5"]
        );
    }

    fn limits() -> CaptureLimits {
        CaptureLimits {
            onset: Duration::from_secs(5),
            phrase: Duration::from_millis(6800),
        }
    }

    #[test]
    fn test_limits_from_settings() {
        let limits = SoxRecorder::new(VoiceSettings::default()).limits();
        assert_eq!(limits.onset, Duration::from_secs(6));
        let phrase = limits.phrase.as_secs_f32();
        assert!((phrase - 6.8).abs() < 1e-3);
    }

    #[test]
    fn test_silence_times_out_at_onset_limit() {
        let limits = limits();
        assert!(!limits.expired(Duration::from_millis(4900), None));
        assert!(limits.expired(Duration::from_secs(5), None));
    }

    #[test]
    fn test_late_speech_gets_full_phrase_budget() {
        let limits = limits();
        let speech_at = Some(Duration::from_millis(4900));

        // Well past timeout + phrase limit measured from the start
        assert!(!limits.expired(Duration::from_millis(11000), speech_at));
        assert!(!limits.expired(Duration::from_millis(11600), speech_at));
        assert!(limits.expired(Duration::from_millis(11700), speech_at));
    }

    #[test]
    fn test_unbounded_settings_do_not_overflow() {
        let settings = VoiceSettings {
            timeout: f32::INFINITY,
            ..VoiceSettings::default()
        };
        let limits = CaptureLimits::from_settings(&settings);
        assert_eq!(limits.onset, Duration::MAX);
        assert!(!limits.expired(Duration::from_secs(3600), None));
    }

    #[cfg(unix)]
    #[test]
    fn test_wait_with_deadline_kills_stalled_process() {
        let mut child = Command::new("sleep").arg("5").spawn().unwrap();
        let started = Instant::now();

        let status = wait_with_deadline(&mut child, Duration::from_millis(200)).unwrap();

        assert!(status.is_none());
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn test_wait_with_deadline_returns_exit_status() {
        let mut child = Command::new("true").spawn().unwrap();
        let status = wait_with_deadline(&mut child, Duration::from_secs(5)).unwrap();
        assert!(status.is_some_and(|s| s.success()));
    }
}
