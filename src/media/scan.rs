//! Query encoding and HTML marker scan.

use once_cell::sync::Lazy;
use regex::Regex;

static MEDIA_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"videoId":"([^"]+)""#).expect("media id pattern is valid"));

/// Extract the first media identifier that follows `marker` in `html`.
///
/// Identifiers before the marker belong to unrelated page chrome and are ignored.
pub fn extract_media_id(html: &str, marker: &str) -> Option<String> {
    let start = html.find(marker)?;
    MEDIA_ID
        .captures(&html[start..])
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Form-encode a search query: spaces become `+`, reserved bytes are percent-encoded
pub fn encode_query(query: &str) -> String {
    let mut encoded = String::with_capacity(query.len());
    for byte in query.trim().bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            b' ' => encoded.push('+'),
            other => encoded.push_str(&format!("%{:02X}", other)),
        }
    }
    encoded
}
