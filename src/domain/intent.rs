use serde::{Deserialize, Serialize};

/// The classified command category of an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Launch an application ("abrir calculadora")
    OpenApp,
    /// Search for a song and play the first result ("reproduce ...")
    PlayMedia,
    /// Recognized but not implemented yet
    SearchFiles,
    /// Capability summary
    Help,
    /// Stop the listen loop
    Exit,
    /// Nothing matched
    Unknown,
}

impl Intent {
    /// Intents whose action needs the captured remainder of the utterance
    pub fn requires_argument(&self) -> bool {
        matches!(self, Intent::OpenApp | Intent::PlayMedia | Intent::SearchFiles)
    }

    /// Intents that end the current listen cycle once dispatched
    pub fn stops_listening(&self) -> bool {
        matches!(self, Intent::OpenApp | Intent::PlayMedia | Intent::Exit)
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::OpenApp => write!(f, "open_app"),
            Intent::PlayMedia => write!(f, "play_media"),
            Intent::SearchFiles => write!(f, "search_files"),
            Intent::Help => write!(f, "help"),
            Intent::Exit => write!(f, "exit"),
            Intent::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open_app" => Ok(Intent::OpenApp),
            "play_media" => Ok(Intent::PlayMedia),
            "search_files" => Ok(Intent::SearchFiles),
            "help" => Ok(Intent::Help),
            "exit" => Ok(Intent::Exit),
            "unknown" => Ok(Intent::Unknown),
            other => Err(format!("unknown intent: {}", other)),
        }
    }
}

/// Result of classifying an utterance: exactly one intent plus its argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentMatch {
    pub intent: Intent,
    /// Trimmed object of the command (app name, song query)
    pub argument: Option<String>,
}

impl IntentMatch {
    pub fn new(intent: Intent, argument: Option<String>) -> Self {
        Self { intent, argument }
    }

    pub fn unknown() -> Self {
        Self {
            intent: Intent::Unknown,
            argument: None,
        }
    }

    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_round_trips_through_display() {
        for intent in [
            Intent::OpenApp,
            Intent::PlayMedia,
            Intent::SearchFiles,
            Intent::Help,
            Intent::Exit,
            Intent::Unknown,
        ] {
            assert_eq!(intent.to_string().parse::<Intent>(), Ok(intent));
        }
    }

    #[test]
    fn test_argument_requirements() {
        assert!(Intent::OpenApp.requires_argument());
        assert!(Intent::PlayMedia.requires_argument());
        assert!(!Intent::Help.requires_argument());
        assert!(!Intent::Exit.requires_argument());
    }

    #[test]
    fn test_only_terminal_actions_stop_listening() {
        assert!(Intent::Exit.stops_listening());
        assert!(!Intent::SearchFiles.stops_listening());
        assert!(!Intent::Unknown.stops_listening());
    }
}
