//! URL registry service: the single source of truth for shortenings.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::json;
use tracing::debug;

use crate::domain::entities::{AccessRecord, ShortLink};
use crate::domain::keygen::KeyGenerator;
use crate::error::AppError;

/// Upper bound on key draws per shortening before giving up.
const MAX_KEY_ATTEMPTS: usize = 10;

/// A short URL together with its full access history.
#[derive(Debug, Clone)]
pub struct UrlStats {
    pub short_url: String,
    pub accesses: Vec<AccessRecord>,
}

/// In-memory registry mapping original URLs to short URLs and back.
///
/// Owns the two lookup indices plus the per-URL access log and applies every
/// operation as one atomic step under a single read-write lock: writers
/// (shorten, access, enable, disable) are serialized, readers observe a
/// consistent snapshot and run concurrently with each other. The key
/// generator lives under the same lock, so a shortening draws its key and
/// publishes the record with no window for another writer in between.
///
/// Both indices always hold the same record for a given link; updates
/// replace the record in both within one critical section.
pub struct UrlRegistry<G: KeyGenerator> {
    domain: String,
    inner: RwLock<RegistryInner<G>>,
}

struct RegistryInner<G> {
    keygen: G,
    by_short_url: HashMap<String, ShortLink>,
    by_original_url: HashMap<String, ShortLink>,
    accesses: HashMap<String, Vec<AccessRecord>>,
}

impl<G> RegistryInner<G> {
    /// Looks `url` up as a short URL first, then as an original URL.
    fn resolve(&self, url: &str) -> Result<&ShortLink, AppError> {
        self.by_short_url
            .get(url)
            .or_else(|| self.by_original_url.get(url))
            .ok_or_else(|| {
                AppError::not_found(
                    "No short URL associated with URL",
                    json!({ "url": url }),
                )
            })
    }
}

impl<G: KeyGenerator> UrlRegistry<G> {
    /// Creates an empty registry issuing short URLs on `domain`.
    pub fn new(domain: impl Into<String>, keygen: G) -> Self {
        Self {
            domain: domain.into(),
            inner: RwLock::new(RegistryInner {
                keygen,
                by_short_url: HashMap::new(),
                by_original_url: HashMap::new(),
                accesses: HashMap::new(),
            }),
        }
    }

    /// Shortens `original_url`, returning the absolute short URL.
    ///
    /// # Deduplication
    ///
    /// Shortening the same URL twice returns the previously issued short URL
    /// without drawing a new key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL does not start with
    /// `http://` or `https://`.
    ///
    /// Returns [`AppError::KeyPoolExhausted`] if the generator cannot supply
    /// an unused key.
    pub fn shorten(&self, original_url: &str) -> Result<String, AppError> {
        if !has_supported_scheme(original_url) {
            return Err(AppError::bad_request(
                "URL must start with http:// or https://",
                json!({ "original_url": original_url }),
            ));
        }

        let mut inner = self.inner.write();

        if let Some(existing) = inner.by_original_url.get(original_url) {
            debug!(original_url, short_url = %existing.short_url, "URL already shortened");
            return Ok(existing.short_url.clone());
        }

        let short_url = self.unused_short_url(&mut inner)?;
        let link = ShortLink::new(short_url.clone(), original_url.to_string());
        inner.by_short_url.insert(short_url.clone(), link.clone());
        inner.by_original_url.insert(original_url.to_string(), link);

        Ok(short_url)
    }

    /// Resolves the short URL identified by `key` for a redirect, appending
    /// `record` to its access log.
    ///
    /// Semantically a lookup, but every successful call grows the log; the
    /// service audits each redirect, so this takes the write lock.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link exists for the key.
    ///
    /// Returns [`AppError::Disabled`] if the short URL is disabled.
    pub fn access(&self, key: &str, record: AccessRecord) -> Result<String, AppError> {
        let short_url = self.short_url_for(key);
        let mut inner = self.inner.write();

        let link = inner.by_short_url.get(&short_url).ok_or_else(|| {
            AppError::not_found(
                "Short URL does not exist",
                json!({ "short_url": short_url }),
            )
        })?;

        if !link.is_enabled {
            return Err(AppError::disabled(
                "Short URL has been disabled",
                json!({ "short_url": short_url }),
            ));
        }

        let original_url = link.original_url.clone();
        inner.accesses.entry(short_url).or_default().push(record);

        Ok(original_url)
    }

    /// Returns the short URL and full access history for `url`, which may be
    /// given in either form: short or original.
    ///
    /// Disabling a link does not hide its history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the URL is unknown, or if it is
    /// known but has never been accessed.
    pub fn stats(&self, url: &str) -> Result<UrlStats, AppError> {
        let inner = self.inner.read();
        let link = inner.resolve(url)?;

        let accesses = inner
            .accesses
            .get(&link.short_url)
            .cloned()
            .ok_or_else(|| {
                AppError::not_found("No accesses recorded for URL", json!({ "url": url }))
            })?;

        Ok(UrlStats {
            short_url: link.short_url.clone(),
            accesses,
        })
    }

    /// Re-enables redirects for `url` (short or original form), returning
    /// the short URL. Enabling an enabled link is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the URL is unknown.
    pub fn enable(&self, url: &str) -> Result<String, AppError> {
        self.set_enabled(url, true)
    }

    /// Disables redirects for `url` (short or original form), returning the
    /// short URL. Statistics stay queryable while disabled.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the URL is unknown.
    pub fn disable(&self, url: &str) -> Result<String, AppError> {
        self.set_enabled(url, false)
    }

    /// Number of registered short URLs.
    pub fn link_count(&self) -> usize {
        self.inner.read().by_short_url.len()
    }

    /// Total number of recorded accesses across all short URLs.
    pub fn access_count(&self) -> usize {
        self.inner.read().accesses.values().map(Vec::len).sum()
    }

    /// Replaces the resolved record in both indices with a copy carrying the
    /// new flag. Runs in one write critical section, so no reader can see
    /// the indices disagree.
    fn set_enabled(&self, url: &str, enabled: bool) -> Result<String, AppError> {
        let mut inner = self.inner.write();

        let updated = inner.resolve(url)?.with_enabled(enabled);
        inner
            .by_short_url
            .insert(updated.short_url.clone(), updated.clone());
        inner
            .by_original_url
            .insert(updated.original_url.clone(), updated.clone());

        Ok(updated.short_url)
    }

    /// Draws keys until one is unused in this registry.
    ///
    /// Generator uniqueness only covers its own pool, so a draw may collide
    /// with an already registered short URL; such draws are discarded and
    /// retried up to [`MAX_KEY_ATTEMPTS`] times.
    fn unused_short_url(&self, inner: &mut RegistryInner<G>) -> Result<String, AppError> {
        for _ in 0..MAX_KEY_ATTEMPTS {
            let key = inner.keygen.next_key()?;
            let short_url = self.short_url_for(&key);

            if !inner.by_short_url.contains_key(&short_url) {
                return Ok(short_url);
            }
        }

        Err(AppError::pool_exhausted(
            "Failed to draw an unused key",
            json!({ "attempts": MAX_KEY_ATTEMPTS }),
        ))
    }

    /// Constructs the absolute short URL for `key` on this registry's domain.
    fn short_url_for(&self, key: &str) -> String {
        format!("http://{}/{}", self.domain.trim_end_matches('/'), key)
    }
}

/// Accepts exactly the two schemes the service will redirect to.
fn has_supported_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::keygen::MockKeyGenerator;
    use crate::infrastructure::keygen::RandomKeyPool;
    use chrono::Utc;
    use mockall::Sequence;

    fn registry() -> UrlRegistry<RandomKeyPool> {
        UrlRegistry::new("s.test", RandomKeyPool::new(10))
    }

    fn record(user_agent: &str) -> AccessRecord {
        AccessRecord::new("10.0.0.1".to_string(), user_agent.to_string(), Utc::now())
    }

    fn key_of(short_url: &str) -> &str {
        short_url.rsplit('/').next().unwrap()
    }

    #[test]
    fn test_shorten_returns_url_on_registry_domain() {
        let registry = registry();
        let short_url = registry.shorten("https://example.com/page").unwrap();

        assert!(short_url.starts_with("http://s.test/"));
    }

    #[test]
    fn test_shorten_key_is_eight_alphanumeric_chars() {
        let registry = registry();
        let short_url = registry.shorten("https://example.com").unwrap();

        let key = key_of(&short_url);
        assert_eq!(key.len(), 8);
        assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_shorten_accepts_both_supported_schemes() {
        let registry = registry();

        assert!(registry.shorten("http://example.com").is_ok());
        assert!(registry.shorten("https://example.com").is_ok());
    }

    #[test]
    fn test_shorten_rejects_url_without_scheme() {
        let registry = registry();
        let err = registry.shorten("example.com/page").unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("http://"));
    }

    #[test]
    fn test_shorten_rejects_unsupported_scheme() {
        let registry = registry();
        let err = registry.shorten("ftp://example.com/file").unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_shorten_rejects_empty_url() {
        let registry = registry();
        assert!(registry.shorten("").is_err());
    }

    #[test]
    fn test_shorten_same_url_returns_existing_without_new_key() {
        let mut keygen = MockKeyGenerator::new();
        keygen
            .expect_next_key()
            .times(1)
            .returning(|| Ok("aaaaaaaa".to_string()));

        let registry = UrlRegistry::new("s.test", keygen);

        let first = registry.shorten("https://example.com").unwrap();
        let second = registry.shorten("https://example.com").unwrap();

        assert_eq!(first, second);
        assert_eq!(registry.link_count(), 1);
    }

    #[test]
    fn test_shorten_distinct_urls_get_distinct_short_urls() {
        let registry = registry();
        let mut seen = std::collections::HashSet::new();

        for i in 0..100 {
            let short_url = registry.shorten(&format!("https://example.com/{i}")).unwrap();
            seen.insert(short_url);
        }

        assert_eq!(seen.len(), 100);
        assert_eq!(registry.link_count(), 100);
    }

    #[test]
    fn test_shorten_skips_key_already_registered() {
        let mut keygen = MockKeyGenerator::new();
        let mut seq = Sequence::new();
        keygen
            .expect_next_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok("aaaaaaaa".to_string()));
        keygen
            .expect_next_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok("aaaaaaaa".to_string()));
        keygen
            .expect_next_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok("bbbbbbbb".to_string()));

        let registry = UrlRegistry::new("s.test", keygen);

        let first = registry.shorten("https://a.example").unwrap();
        let second = registry.shorten("https://b.example").unwrap();

        assert_eq!(first, "http://s.test/aaaaaaaa");
        assert_eq!(second, "http://s.test/bbbbbbbb");
    }

    #[test]
    fn test_shorten_fails_when_generator_keeps_repeating_taken_key() {
        let mut keygen = MockKeyGenerator::new();
        keygen
            .expect_next_key()
            .returning(|| Ok("cccccccc".to_string()));

        let registry = UrlRegistry::new("s.test", keygen);
        registry.shorten("https://a.example").unwrap();

        let err = registry.shorten("https://b.example").unwrap_err();
        assert!(matches!(err, AppError::KeyPoolExhausted { .. }));
    }

    #[test]
    fn test_shorten_propagates_generator_failure() {
        let mut keygen = MockKeyGenerator::new();
        keygen.expect_next_key().times(1).returning(|| {
            Err(AppError::pool_exhausted("Key pool is empty", json!({})))
        });

        let registry = UrlRegistry::new("s.test", keygen);
        let err = registry.shorten("https://example.com").unwrap_err();

        assert!(matches!(err, AppError::KeyPoolExhausted { .. }));
    }

    #[test]
    fn test_access_returns_original_url() {
        let registry = registry();
        let short_url = registry.shorten("https://example.com/deep/path").unwrap();

        let original = registry.access(key_of(&short_url), record("curl/8.5.0")).unwrap();
        assert_eq!(original, "https://example.com/deep/path");
    }

    #[test]
    fn test_access_unknown_key_is_not_found() {
        let registry = registry();
        let err = registry.access("nosuchkey", record("curl")).unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_access_appends_records_in_order() {
        let registry = registry();
        let short_url = registry.shorten("https://example.com").unwrap();
        let key = key_of(&short_url);

        registry.access(key, record("first")).unwrap();
        registry.access(key, record("second")).unwrap();
        registry.access(key, record("third")).unwrap();

        let stats = registry.stats(&short_url).unwrap();
        let agents: Vec<&str> = stats
            .accesses
            .iter()
            .map(|r| r.user_agent.as_str())
            .collect();
        assert_eq!(agents, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_access_disabled_url_fails() {
        let registry = registry();
        let short_url = registry.shorten("https://example.com").unwrap();

        registry.disable(&short_url).unwrap();
        let err = registry.access(key_of(&short_url), record("curl")).unwrap_err();

        assert!(matches!(err, AppError::Disabled { .. }));
    }

    #[test]
    fn test_enable_restores_access() {
        let registry = registry();
        let short_url = registry.shorten("https://example.com").unwrap();

        registry.disable(&short_url).unwrap();
        registry.enable(&short_url).unwrap();

        assert!(registry.access(key_of(&short_url), record("curl")).is_ok());
    }

    #[test]
    fn test_disable_via_original_url_blocks_key_access() {
        let registry = registry();
        let short_url = registry.shorten("https://example.com/page").unwrap();

        registry.disable("https://example.com/page").unwrap();
        let err = registry.access(key_of(&short_url), record("curl")).unwrap_err();

        assert!(matches!(err, AppError::Disabled { .. }));
    }

    #[test]
    fn test_toggle_accepts_either_url_form() {
        let registry = registry();
        let short_url = registry.shorten("https://example.com").unwrap();

        assert_eq!(registry.disable(&short_url).unwrap(), short_url);
        assert_eq!(registry.enable("https://example.com").unwrap(), short_url);
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let registry = registry();
        let short_url = registry.shorten("https://example.com").unwrap();

        assert_eq!(registry.disable(&short_url).unwrap(), short_url);
        assert_eq!(registry.disable(&short_url).unwrap(), short_url);

        let err = registry.access(key_of(&short_url), record("curl")).unwrap_err();
        assert!(matches!(err, AppError::Disabled { .. }));

        assert_eq!(registry.enable(&short_url).unwrap(), short_url);
        assert_eq!(registry.enable(&short_url).unwrap(), short_url);
        assert!(registry.access(key_of(&short_url), record("curl")).is_ok());
    }

    #[test]
    fn test_toggle_unknown_url_is_not_found() {
        let registry = registry();

        assert!(matches!(
            registry.enable("https://unknown.example").unwrap_err(),
            AppError::NotFound { .. }
        ));
        assert!(matches!(
            registry.disable("https://unknown.example").unwrap_err(),
            AppError::NotFound { .. }
        ));
    }

    #[test]
    fn test_stats_resolves_short_and_original_forms() {
        let registry = registry();
        let short_url = registry.shorten("https://example.com/page").unwrap();
        registry.access(key_of(&short_url), record("curl")).unwrap();

        let by_short = registry.stats(&short_url).unwrap();
        let by_original = registry.stats("https://example.com/page").unwrap();

        assert_eq!(by_short.short_url, short_url);
        assert_eq!(by_original.short_url, short_url);
        assert_eq!(by_short.accesses.len(), 1);
        assert_eq!(by_original.accesses.len(), 1);
    }

    #[test]
    fn test_stats_unknown_url_is_not_found() {
        let registry = registry();
        let err = registry.stats("https://unknown.example").unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_stats_never_accessed_url_is_not_found() {
        let registry = registry();
        let short_url = registry.shorten("https://example.com").unwrap();

        let err = registry.stats(&short_url).unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert!(err.to_string().contains("No accesses"));
    }

    #[test]
    fn test_stats_stay_queryable_while_disabled() {
        let registry = registry();
        let short_url = registry.shorten("https://example.com").unwrap();
        registry.access(key_of(&short_url), record("curl")).unwrap();

        registry.disable(&short_url).unwrap();
        let stats = registry.stats(&short_url).unwrap();

        assert_eq!(stats.accesses.len(), 1);
    }

    #[test]
    fn test_counts_track_links_and_accesses() {
        let registry = registry();
        assert_eq!(registry.link_count(), 0);
        assert_eq!(registry.access_count(), 0);

        let first = registry.shorten("https://a.example").unwrap();
        let second = registry.shorten("https://b.example").unwrap();
        registry.access(key_of(&first), record("curl")).unwrap();
        registry.access(key_of(&first), record("curl")).unwrap();
        registry.access(key_of(&second), record("curl")).unwrap();

        assert_eq!(registry.link_count(), 2);
        assert_eq!(registry.access_count(), 3);
    }

    #[test]
    fn test_domain_trailing_slash_is_trimmed() {
        let registry = UrlRegistry::new("s.test/", RandomKeyPool::new(10));
        let short_url = registry.shorten("https://example.com").unwrap();

        assert!(short_url.starts_with("http://s.test/"));
        assert!(!short_url.contains("//s.test//"));
    }
}
