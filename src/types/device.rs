//! Device detail specifications as returned by the catalog.

use serde::{Deserialize, Serialize};

/// Full specification sheet for one device.
///
/// Owned transiently by a handler during a single lookup; only the
/// derived answer is cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceDetail {
    /// Device name as the catalog reports it.
    pub name: String,
    /// Specification sections in catalog order.
    pub specifications: Vec<SpecSection>,
}

/// A titled group of specification entries (e.g. "Network", "Body").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecSection {
    pub title: String,
    pub specs: Vec<SpecEntry>,
}

/// One key/value specification row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecEntry {
    pub key: String,
    pub val: SpecValue,
}

/// A specification value — the catalog emits either a bare string or an
/// ordered list of strings for the same field, depending on the device.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    One(String),
    Many(Vec<String>),
}
