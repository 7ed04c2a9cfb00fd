//! Device search results.

use serde::{Deserialize, Serialize};

/// A single hit from a catalog device search.
///
/// Validated at the upstream client boundary: hits without an id or a
/// name never make it into this type. Ephemeral — not stored beyond the
/// request unless folded into a cached answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Catalog device identifier, used for detail lookups.
    pub id: String,
    /// Human-readable device name.
    pub name: String,
    /// Thumbnail image URL, when the catalog provides one.
    pub image: Option<String>,
    /// Device brand, when the catalog provides one.
    pub brand: Option<String>,
}
