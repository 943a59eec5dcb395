use regex::Regex;

use super::MatcherError;
use crate::domain::Intent;

/// A compiled (pattern, intent) pair
#[derive(Debug, Clone)]
pub struct Rule {
    intent: Intent,
    pattern: Regex,
}

impl Rule {
    pub fn new(intent: Intent, pattern: &str) -> Result<Self, MatcherError> {
        if intent == Intent::Unknown {
            return Err(MatcherError::ReservedIntent(intent));
        }
        let pattern =
            Regex::new(pattern).map_err(|source| MatcherError::InvalidPattern { intent, source })?;
        Ok(Self { intent, pattern })
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// `None` if the rule does not match; otherwise the trimmed `arg` capture,
    /// itself `None` when absent or blank
    pub fn apply(&self, utterance: &str) -> Option<Option<String>> {
        let captures = self.pattern.captures(utterance)?;
        let argument = captures
            .name("arg")
            .map(|m| m.as_str().trim())
            .filter(|arg| !arg.is_empty())
            .map(str::to_string);
        Some(argument)
    }
}
