use std::time::Duration;

use super::scan::{encode_query, extract_media_id};
use super::{MediaError, MediaSearch};
use crate::config::MediaSettings;

/// Scrapes a video site's search page for the first result
pub struct YouTubeSearch {
    agent: ureq::Agent,
    settings: MediaSettings,
}

impl YouTubeSearch {
    pub fn new(settings: MediaSettings) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build();
        Self { agent, settings }
    }

    /// Direct URL for a media identifier
    pub fn watch_url(&self, media_id: &str) -> String {
        self.settings.watch_url.replace("{}", media_id)
    }

    fn fetch(&self, url: &str) -> Result<String, MediaError> {
        let response = self
            .agent
            .get(url)
            .set("User-Agent", &self.settings.user_agent)
            .set("Accept-Language", "es-ES,es;q=0.9,en;q=0.8")
            .call()
            .map_err(|e| MediaError::Network(e.to_string()))?;

        response
            .into_string()
            .map_err(|e| MediaError::Body(e.to_string()))
    }
}

impl MediaSearch for YouTubeSearch {
    fn search(&self, query: &str) -> Option<String> {
        let url = self.results_url(query);

        let html = match self.fetch(&url) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("[habla:media] {}", e);
                return None;
            }
        };

        match extract_media_id(&html, &self.settings.marker) {
            Some(id) => Some(self.watch_url(&id)),
            None => {
                tracing::debug!("[habla:media] No media id in results for {:?}", query);
                None
            }
        }
    }

    fn results_url(&self, query: &str) -> String {
        self.settings.search_url.replace("{}", &encode_query(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_from_templates() {
        let search = YouTubeSearch::new(MediaSettings::default());
        assert_eq!(
            search.results_url("bohemian rhapsody"),
            "https://www.youtube.com/results?search_query=bohemian+rhapsody"
        );
        assert_eq!(search.watch_url("abc"), "https://www.youtube.com/watch?v=abc");
    }

    #[test]
    fn test_unreachable_host_yields_none() {
        let settings = MediaSettings {
            // Port 9 on localhost refuses connections
            search_url: "http://127.0.0.1:9/results?q={}".to_string(),
            request_timeout_secs: 2,
            ..MediaSettings::default()
        };
        let search = YouTubeSearch::new(settings);
        assert_eq!(search.search("anything"), None);
    }
}
