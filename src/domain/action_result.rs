use serde::{Deserialize, Serialize};

/// Status text returned for the exit command. Callers stop the listen loop on it.
pub const EXIT_MARKER: &str = "exit";

/// Outcome of dispatching one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    /// User-facing status text
    pub text: String,
    /// Whether the underlying action succeeded
    pub success: bool,
    /// Diagnostic message when a collaborator failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default)]
    exit: bool,
}

impl ActionResult {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
            detail: None,
            exit: false,
        }
    }

    pub fn failed(text: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
            detail: Some(detail.into()),
            exit: false,
        }
    }

    /// Sentinel result for the exit command
    pub fn exit() -> Self {
        Self {
            text: EXIT_MARKER.to_string(),
            success: true,
            detail: None,
            exit: true,
        }
    }

    pub fn with_success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

impl std::fmt::Display for ActionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({})", self.text, detail),
            None => write!(f, "{}", self.text),
        }
    }
}
