#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use tinylink::application::services::UrlRegistry;
use tinylink::domain::entities::AccessRecord;
use tinylink::infrastructure::keygen::RandomKeyPool;
use tinylink::state::AppState;

/// Domain used by handler tests; issued short URLs look like `http://s.test/{key}`.
pub const TEST_DOMAIN: &str = "s.test";

/// Builds application state around an empty registry.
pub fn create_test_state() -> AppState {
    let registry = UrlRegistry::new(TEST_DOMAIN, RandomKeyPool::new(4));
    AppState::new(Arc::new(registry))
}

/// Extracts the key portion of an absolute short URL.
pub fn key_of(short_url: &str) -> &str {
    short_url.rsplit('/').next().unwrap()
}

/// Builds an access record the way the redirect handler would.
pub fn test_record(ip: &str, user_agent: &str) -> AccessRecord {
    AccessRecord::new(ip.to_string(), user_agent.to_string(), Utc::now())
}
