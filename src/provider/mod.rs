//! Upstream catalog access.
//!
//! [`CatalogProvider`] is the seam between the handlers and the network:
//! it is the only abstraction that touches the upstream phone-spec
//! catalog, and the only thing tests need to mock. The production
//! implementation is [`SpecSourceClient`].

mod specsource;

pub use specsource::SpecSourceClient;

use async_trait::async_trait;

use crate::Result;
use crate::types::{DeviceDetail, SearchResult};

/// Search and device-detail operations against the upstream catalog.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search the catalog for devices matching a free-text query.
    ///
    /// Returns an empty vec when the catalog has nothing usable for the
    /// query; errors are reserved for transport and protocol failures.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;

    /// Fetch the full specification sheet for one device.
    async fn get_device(&self, id: &str) -> Result<DeviceDetail>;
}
