//! User-facing status strings

use serde::{Deserialize, Serialize};

/// User-facing status strings.
///
/// `{app}` and `{query}` are replaced with the command argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "default_welcome")]
    pub welcome: Vec<String>,
    #[serde(default = "default_opening")]
    pub opening: String,
    #[serde(default = "default_playing")]
    pub playing: String,
    #[serde(default = "default_search_files")]
    pub search_files: String,
    #[serde(default = "default_help")]
    pub help: String,
    #[serde(default = "default_unknown_command")]
    pub unknown_command: String,
    #[serde(default = "default_listening")]
    pub listening: String,
    #[serde(default = "default_no_command")]
    pub no_command: String,
    #[serde(default = "default_completed")]
    pub completed: String,
    #[serde(default = "default_internal_error")]
    pub internal_error: String,
}

fn default_welcome() -> Vec<String> {
    vec![
        "Welcome to habla!".to_string(),
        "Ask me to open applications by saying 'abrir [name]'".to_string(),
        "or to play music by saying 'reproducir [song]'.".to_string(),
        "Say 'ayuda' for more information or 'salir' to quit.".to_string(),
    ]
}

fn default_opening() -> String {
    "Opening {app}".to_string()
}

fn default_playing() -> String {
    "Playing {query}".to_string()
}

fn default_search_files() -> String {
    "File search will be implemented in a future version.".to_string()
}

fn default_help() -> String {
    "I can open applications if you say 'abrir [name]' and play music if you say 'reproducir [song]'."
        .to_string()
}

fn default_unknown_command() -> String {
    "I didn't understand that command. Try saying 'ayuda' to see what I can do.".to_string()
}

fn default_listening() -> String {
    "Listening...".to_string()
}

fn default_no_command() -> String {
    "No command detected. Try again.".to_string()
}

fn default_completed() -> String {
    "Action completed. Press Enter to give a new command.".to_string()
}

fn default_internal_error() -> String {
    "Something went wrong while running that command.".to_string()
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            welcome: default_welcome(),
            opening: default_opening(),
            playing: default_playing(),
            search_files: default_search_files(),
            help: default_help(),
            unknown_command: default_unknown_command(),
            listening: default_listening(),
            no_command: default_no_command(),
            completed: default_completed(),
            internal_error: default_internal_error(),
        }
    }
}

impl Messages {
    pub fn opening(&self, app: &str) -> String {
        self.opening.replace("{app}", app)
    }

    pub fn playing(&self, query: &str) -> String {
        self.playing.replace("{query}", query)
    }
}
