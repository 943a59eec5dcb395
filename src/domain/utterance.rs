/// Recognized speech transcript, normalized to lowercase.
///
/// An empty utterance means nothing was recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Utterance(String);

impl Utterance {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_lowercase())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Utterance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Utterance {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utterance_is_lowercased_and_trimmed() {
        let u = Utterance::new("  Abre NOTEPAD ");
        assert_eq!(u.as_str(), "abre notepad");
    }

    #[test]
    fn test_unicode_lowercase() {
        assert_eq!(Utterance::new("AYÚDAME").as_str(), "ayúdame");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(Utterance::new("   ").is_empty());
        assert!(Utterance::empty().is_empty());
    }
}
