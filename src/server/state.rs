//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::cache::AnswerCache;
use crate::provider::CatalogProvider;
use crate::throttle::ThrottleGate;

/// Everything a handler needs: the upstream client, the throttle gate
/// and the answer cache. Cloned per request (all fields are `Arc`s).
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CatalogProvider>,
    pub throttle: Arc<ThrottleGate>,
    pub cache: Arc<AnswerCache>,
}

impl AppState {
    /// Assemble state around a provider and the gate it shares.
    pub fn new(provider: Arc<dyn CatalogProvider>, throttle: Arc<ThrottleGate>) -> Self {
        Self {
            provider,
            throttle,
            cache: Arc::new(AnswerCache::new()),
        }
    }
}
