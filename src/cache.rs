//! In-memory answer cache.
//!
//! [`AnswerCache`] maps a normalized [`LookupKey`] to a previously
//! computed [`AnswerPayload`]. A hit short-circuits the whole pipeline:
//! it bypasses the throttle gate and the upstream catalog entirely,
//! including for cached "not found" answers.
//!
//! The cache is deliberately unbounded with no TTL and no eviction —
//! the process is expected to be short-lived and single-instance, and
//! payloads are tiny. This is a known scaling limitation, not an
//! oversight; a bounded/TTL configuration is a one-line change on the
//! moka builder if the deployment model changes.

use std::sync::Arc;

use moka::sync::Cache;

use crate::telemetry;
use crate::types::{AnswerPayload, LookupKey};

/// Process-wide store of computed eSIM answers, keyed exactly.
pub struct AnswerCache {
    entries: Cache<LookupKey, Arc<AnswerPayload>>,
}

impl AnswerCache {
    /// Create an empty, unbounded cache.
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().build(),
        }
    }

    /// Look up a cached answer. Emits cache hit/miss metrics.
    pub fn get(&self, key: &LookupKey) -> Option<Arc<AnswerPayload>> {
        match self.entries.get(key) {
            Some(payload) => {
                metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
                Some(payload)
            }
            None => {
                metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
                None
            }
        }
    }

    /// Insert (or overwrite) an answer under its lookup key.
    ///
    /// Payloads are stored as computed; the `from_cache` annotation is
    /// applied by the handler on the way out, never persisted.
    pub fn insert(&self, key: LookupKey, payload: AnswerPayload) {
        self.entries.insert(key, Arc::new(payload));
    }
}

impl Default for AnswerCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(message: &str) -> AnswerPayload {
        AnswerPayload {
            found: true,
            device_name: Some("Test Phone".into()),
            device_id: Some("test-1".into()),
            sim_raw: Some("Nano-SIM, eSIM".into()),
            supports_esim: Some(true),
            message: message.into(),
            from_cache: false,
        }
    }

    #[test]
    fn miss_then_hit() {
        let cache = AnswerCache::new();
        let key = LookupKey::for_query("test phone");

        assert!(cache.get(&key).is_none());
        cache.insert(key.clone(), answer("ok"));

        let hit = cache.get(&key).unwrap();
        assert_eq!(hit.message, "ok");
        assert!(!hit.from_cache);
    }

    #[test]
    fn keys_are_exact_match_only() {
        let cache = AnswerCache::new();
        cache.insert(LookupKey::for_query("iphone 15"), answer("ok"));

        // No fuzzy matching: a longer query is a different key.
        assert!(cache.get(&LookupKey::for_query("iphone 15 pro")).is_none());
        // But normalization makes case/whitespace variants the same key.
        assert!(cache.get(&LookupKey::for_query("  IPhone 15 ")).is_some());
    }

    #[test]
    fn negative_answers_are_cached() {
        let cache = AnswerCache::new();
        let key = LookupKey::for_query("no such device");
        cache.insert(key.clone(), AnswerPayload::not_found("nothing"));

        let hit = cache.get(&key).unwrap();
        assert!(!hit.found);
    }
}
