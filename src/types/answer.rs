//! Cached answer payload and its lookup key.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalized key under which an answer is cached.
///
/// Exact-match only: `id:<deviceId>` when a device id is known,
/// otherwise `q:<query>` with the query trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey(String);

impl LookupKey {
    /// Key for a lookup by known device id.
    pub fn for_device(id: &str) -> Self {
        Self(format!("id:{id}"))
    }

    /// Key for a lookup by free-text query.
    pub fn for_query(query: &str) -> Self {
        Self(format!("q:{}", query.trim().to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The eSIM-capability verdict returned to the client and cached.
///
/// Immutable once cached; a cache hit is returned as a copy with
/// `from_cache` set, never by mutating the stored payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPayload {
    /// Whether a matching device was found at all.
    pub found: bool,
    /// Name of the selected device, absent when nothing matched.
    pub device_name: Option<String>,
    /// Catalog id of the selected device, absent when nothing matched.
    pub device_id: Option<String>,
    /// Raw text of the matched SIM specification entry.
    pub sim_raw: Option<String>,
    /// `Some(true)`/`Some(false)` when SIM data was found, `None` when
    /// the sheet had no SIM entry and support is undetermined.
    pub supports_esim: Option<bool>,
    /// Localized human-readable status message.
    pub message: String,
    /// Set on responses served from the answer cache.
    #[serde(default, skip_serializing_if = "is_false")]
    pub from_cache: bool,
}

impl AnswerPayload {
    /// Payload for a lookup that matched nothing. Cached like any other
    /// answer so repeat misses skip the upstream catalog.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            found: false,
            device_name: None,
            device_id: None,
            sim_raw: None,
            supports_esim: None,
            message: message.into(),
            from_cache: false,
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}
