//! Media search settings

use serde::{Deserialize, Serialize};

/// Media search settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaSettings {
    /// Search results page, `{}` is replaced by the encoded query
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Direct media page, `{}` is replaced by the extracted identifier
    #[serde(default = "default_watch_url")]
    pub watch_url: String,

    /// Text that precedes the embedded results data in the search page
    #[serde(default = "default_marker")]
    pub marker: String,

    /// HTTP timeout for the search request (in seconds)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_search_url() -> String {
    "https://www.youtube.com/results?search_query={}".to_string()
}

fn default_watch_url() -> String {
    "https://www.youtube.com/watch?v={}".to_string()
}

fn default_marker() -> String {
    "var ytInitialData".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (X11; Linux x86_64) habla".to_string()
}

impl Default for MediaSettings {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            watch_url: default_watch_url(),
            marker: default_marker(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}
