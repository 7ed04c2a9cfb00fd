//! HTTP client for the upstream phone-specification catalog.
//!
//! The catalog wraps every response in a `{ "data": ... }` envelope.
//! Shapes are validated here, at the boundary: search hits without an
//! id or name are dropped, and a detail payload that doesn't match the
//! expected structure surfaces as an [`EsimError::Upstream`] instead of
//! leaking half-parsed data into the handlers.
//!
//! No retries: a failed call surfaces immediately to the handler, and
//! retry policy (if any) is the caller's concern.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::CatalogProvider;
use crate::telemetry;
use crate::throttle::ThrottleGate;
use crate::types::{DeviceDetail, SearchResult};
use crate::{EsimError, Result};

/// Client for the upstream catalog's search and device-detail endpoints.
///
/// Holds the shared [`ThrottleGate`] and refuses to issue a request
/// while the cooldown window is active — a defensive double-check on
/// top of the gating the handlers already do.
#[derive(Clone)]
pub struct SpecSourceClient {
    http: Client,
    base_url: String,
    gate: Arc<ThrottleGate>,
}

impl SpecSourceClient {
    /// Create a client for the given catalog base URL.
    pub fn new(base_url: impl Into<String>, gate: Arc<ThrottleGate>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
            gate,
        }
    }

    /// Search the catalog. Hits missing an id or name are dropped.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        self.ensure_unblocked()?;
        metrics::counter!(telemetry::UPSTREAM_REQUESTS_TOTAL, "operation" => "search")
            .increment(1);

        let url = format!("{}/search", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| EsimError::Http(e.to_string()))?;

        let body: SearchEnvelope = Self::decode(response).await?;
        let hits = body.data.unwrap_or_default();
        debug!(query, hits = hits.len(), "catalog search completed");

        Ok(hits.into_iter().filter_map(RawSearchHit::validate).collect())
    }

    /// Fetch the specification sheet for one device.
    pub async fn get_device(&self, id: &str) -> Result<DeviceDetail> {
        self.ensure_unblocked()?;
        metrics::counter!(telemetry::UPSTREAM_REQUESTS_TOTAL, "operation" => "get_device")
            .increment(1);

        let url = format!("{}/devices/{}", self.base_url, id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| EsimError::Http(e.to_string()))?;

        let body: DeviceEnvelope = Self::decode(response).await?;
        body.data.ok_or_else(|| EsimError::Upstream {
            status: 200,
            message: format!("device payload for '{id}' is missing its data field"),
        })
    }

    /// Fail fast while the throttle gate's cooldown window is active.
    fn ensure_unblocked(&self) -> Result<()> {
        match self.gate.blocked_remaining() {
            Some(retry_after) => Err(EsimError::UpstreamBlocked { retry_after }),
            None => Ok(()),
        }
    }

    /// Check the status line, then decode the body against the expected
    /// shape, turning mismatches into explicit catalog errors.
    async fn decode<T: for<'de> Deserialize<'de>>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            if status.as_u16() == 429 {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);
                return Err(EsimError::RateLimited { retry_after });
            }
            return Err(EsimError::Upstream {
                status: status.as_u16(),
                message: format!("catalog error: {status}"),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| EsimError::Http(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| EsimError::Upstream {
            status: status.as_u16(),
            message: format!("unexpected catalog response shape: {e}"),
        })
    }
}

#[derive(Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    data: Option<Vec<RawSearchHit>>,
}

#[derive(Deserialize)]
struct DeviceEnvelope {
    #[serde(default)]
    data: Option<DeviceDetail>,
}

/// Search hit as the catalog sends it — everything optional until
/// validated.
#[derive(Deserialize)]
struct RawSearchHit {
    id: Option<String>,
    name: Option<String>,
    img: Option<String>,
    brand: Option<String>,
}

impl RawSearchHit {
    /// Promote to a [`SearchResult`], or `None` when the hit is unusable.
    fn validate(self) -> Option<SearchResult> {
        Some(SearchResult {
            id: self.id?,
            name: self.name?,
            image: self.img,
            brand: self.brand,
        })
    }
}

#[async_trait]
impl CatalogProvider for SpecSourceClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        SpecSourceClient::search(self, query).await
    }

    async fn get_device(&self, id: &str) -> Result<DeviceDetail> {
        SpecSourceClient::get_device(self, id).await
    }
}
