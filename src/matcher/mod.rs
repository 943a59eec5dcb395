//! Intent Matcher - maps an utterance to an intent and its argument
//!
//! The matcher evaluates an ordered rule table. The first rule whose pattern
//! matches decides the intent; later rules are never consulted. With the
//! default table a phrase containing both an "abrir" and a "reproducir" verb
//! is therefore always an `OpenApp` command.

mod rule;

pub use rule::Rule;

use crate::config::{CommandSettings, RuleConfig};
use crate::domain::{Intent, IntentMatch};

/// Error type for building the rule table
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("Invalid pattern for {intent}: {source}")]
    InvalidPattern {
        intent: Intent,
        #[source]
        source: regex::Error,
    },

    #[error("The {0} intent cannot have a rule")]
    ReservedIntent(Intent),
}

/// Ordered rule table, immutable once built
#[derive(Debug, Clone)]
pub struct IntentMatcher {
    rules: Vec<Rule>,
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::from_settings(&CommandSettings::default())
            .expect("built-in command patterns are valid")
    }
}

impl IntentMatcher {
    /// Compile the configured rules, keeping their order
    pub fn from_settings(settings: &CommandSettings) -> Result<Self, MatcherError> {
        Self::from_rules(&settings.rules)
    }

    pub fn from_rules(rules: &[RuleConfig]) -> Result<Self, MatcherError> {
        let rules = rules
            .iter()
            .map(|r| Rule::new(r.intent, &r.pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classify a lowercased utterance.
    ///
    /// Empty input, input no rule matches, and a matching rule that needs an
    /// argument but captured none all yield `Unknown` without an argument.
    pub fn match_utterance(&self, utterance: &str) -> IntentMatch {
        if utterance.trim().is_empty() {
            return IntentMatch::unknown();
        }

        for rule in &self.rules {
            let Some(argument) = rule.apply(utterance) else {
                continue;
            };

            if rule.intent().requires_argument() && argument.is_none() {
                tracing::debug!(
                    "[habla:matcher] {} matched without an argument: {:?}",
                    rule.intent(),
                    utterance
                );
                return IntentMatch::unknown();
            }

            return IntentMatch::new(rule.intent(), argument);
        }

        IntentMatch::unknown()
    }
}
