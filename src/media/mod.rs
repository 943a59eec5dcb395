//! Media search collaborator
//!
//! Finding a song means scraping a search results page for the first embedded
//! media identifier. The page layout is undocumented and changes without
//! notice, so everything behind [`MediaSearch`] is best-effort: a failed
//! request or a missing identifier degrades to opening the results page.

mod scan;
mod youtube;

pub use scan::{encode_query, extract_media_id};
pub use youtube::YouTubeSearch;

use crate::launcher::{LaunchError, Launcher};

/// Error type for media search requests
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Search request failed: {0}")]
    Network(String),

    #[error("Failed to read search response: {0}")]
    Body(String),
}

/// Finds a playable URL for a free-text query
pub trait MediaSearch: Send + Sync {
    /// Direct media URL for the first result, if one can be found
    fn search(&self, query: &str) -> Option<String>;

    /// Generic results page for the query, used as fallback
    fn results_url(&self, query: &str) -> String;
}

/// What was opened for a play request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The first result was opened directly
    Direct(String),
    /// The results page was opened instead
    Fallback(String),
}

impl PlayOutcome {
    pub fn url(&self) -> &str {
        match self {
            PlayOutcome::Direct(url) | PlayOutcome::Fallback(url) => url,
        }
    }
}

/// Search for `query` and open the best URL available.
///
/// Fails only when the fallback results page cannot be opened either.
pub fn play_media(
    search: &dyn MediaSearch,
    launcher: &dyn Launcher,
    query: &str,
) -> Result<PlayOutcome, LaunchError> {
    if let Some(url) = search.search(query) {
        match launcher.open_url(&url) {
            Ok(()) => {
                tracing::info!("[habla:media] Playing {}", url);
                return Ok(PlayOutcome::Direct(url));
            }
            Err(e) => tracing::warn!("[habla:media] Failed to open {}: {}", url, e),
        }
    }

    let fallback = search.results_url(query);
    launcher.open_url(&fallback)?;
    tracing::info!("[habla:media] Opened search results {}", fallback);
    Ok(PlayOutcome::Fallback(fallback))
}
