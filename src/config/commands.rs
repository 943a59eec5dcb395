//! Command rule configuration

use serde::{Deserialize, Serialize};

use crate::domain::Intent;

/// One entry of the ordered rule table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Intent selected when the pattern matches
    pub intent: Intent,
    /// Regular expression; the argument is the named group `arg`
    pub pattern: String,
}

impl RuleConfig {
    pub fn new(intent: Intent, pattern: impl Into<String>) -> Self {
        Self {
            intent,
            pattern: pattern.into(),
        }
    }
}

/// Command recognition configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSettings {
    /// Rules in priority order: the first matching rule wins
    #[serde(default = "default_rules")]
    pub rules: Vec<RuleConfig>,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            rules: default_rules(),
        }
    }
}

pub const OPEN_APP_PATTERN: &str = r"\b(?:abrir|abre|ejecuta|ejecutar|inicia|iniciar)\s+(?P<arg>.+)";
pub const PLAY_MEDIA_PATTERN: &str =
    r"\b(?:reproducir|reproduce|pon|poner|escuchar|tocar)\s+(?P<arg>.+)";
pub const SEARCH_FILES_PATTERN: &str =
    r"\b(?:buscar|busca|encuentra|encontrar)\s+archivos?\s+(?P<arg>.+)";
pub const HELP_PATTERN: &str = r"\b(?:ayuda|ayúdame|qué puedes hacer|funciones)\b";
pub const EXIT_PATTERN: &str = r"\b(?:salir|terminar|finalizar|adiós)\b";

fn default_rules() -> Vec<RuleConfig> {
    vec![
        RuleConfig::new(Intent::OpenApp, OPEN_APP_PATTERN),
        RuleConfig::new(Intent::PlayMedia, PLAY_MEDIA_PATTERN),
        RuleConfig::new(Intent::SearchFiles, SEARCH_FILES_PATTERN),
        RuleConfig::new(Intent::Help, HELP_PATTERN),
        RuleConfig::new(Intent::Exit, EXIT_PATTERN),
    ]
}
