//! Short link entity representing a registered shortening.

/// A shortened URL record.
///
/// Couples the issued short URL with the original long URL it resolves to,
/// plus the flag gating redirects. Records are immutable values: toggling
/// the flag produces a fresh record via [`ShortLink::with_enabled`] that
/// replaces the old one in both registry indices, so the indices never hold
/// diverging copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub short_url: String,
    pub original_url: String,
    pub is_enabled: bool,
}

impl ShortLink {
    /// Creates a new record, enabled by default.
    pub fn new(short_url: String, original_url: String) -> Self {
        Self {
            short_url,
            original_url,
            is_enabled: true,
        }
    }

    /// Returns a copy of this record with the enabled flag replaced.
    pub fn with_enabled(&self, enabled: bool) -> Self {
        Self {
            short_url: self.short_url.clone(),
            original_url: self.original_url.clone(),
            is_enabled: enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_creation() {
        let link = ShortLink::new(
            "http://localhost:8080/aZ3k9QxB".to_string(),
            "https://example.com/some/page".to_string(),
        );

        assert_eq!(link.short_url, "http://localhost:8080/aZ3k9QxB");
        assert_eq!(link.original_url, "https://example.com/some/page");
        assert!(link.is_enabled);
    }

    #[test]
    fn test_with_enabled_flips_only_the_flag() {
        let link = ShortLink::new(
            "http://localhost:8080/aZ3k9QxB".to_string(),
            "https://example.com".to_string(),
        );

        let disabled = link.with_enabled(false);
        assert_eq!(disabled.short_url, link.short_url);
        assert_eq!(disabled.original_url, link.original_url);
        assert!(!disabled.is_enabled);
    }

    #[test]
    fn test_with_enabled_same_flag_is_identity() {
        let link = ShortLink::new(
            "http://localhost:8080/code".to_string(),
            "https://example.com".to_string(),
        );

        assert_eq!(link.with_enabled(true), link);
    }
}
