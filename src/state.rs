//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UrlRegistry;
use crate::infrastructure::keygen::RandomKeyPool;

/// Handle to the shared registry, cloned into every request handler.
///
/// The registry is the only stateful component; everything else a handler
/// needs travels in the request itself.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<UrlRegistry<RandomKeyPool>>,
}

impl AppState {
    /// Creates application state around a shared registry.
    pub fn new(registry: Arc<UrlRegistry<RandomKeyPool>>) -> Self {
        Self { registry }
    }
}
