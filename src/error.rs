//! esimcheck error types

use std::time::Duration;

/// esimcheck error types.
///
/// A closed enumeration used both for control flow inside the crate and
/// for HTTP status mapping at the server boundary. Throttle rejections
/// carry how long the caller should wait before resubmitting.
#[derive(Debug, thiserror::Error)]
pub enum EsimError {
    // Input errors
    #[error("invalid input: {0}")]
    Validation(String),

    // Throttle gate rejections (no upstream call was made)
    #[error("throttled locally, retry after {retry_after:?}")]
    LocalThrottle { retry_after: Duration },

    #[error("upstream cooldown active, retry after {retry_after:?}")]
    UpstreamBlocked { retry_after: Duration },

    // Upstream/network errors
    #[error("rate limited by catalog, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("catalog error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl EsimError {
    /// Whether this error is a pre-flight throttle rejection, i.e. the
    /// upstream catalog was never contacted.
    pub fn is_throttle_rejection(&self) -> bool {
        matches!(
            self,
            EsimError::LocalThrottle { .. } | EsimError::UpstreamBlocked { .. }
        )
    }

    /// Whether this error is a live rate-limit response from the catalog.
    ///
    /// Handlers use this to arm the throttle gate's cooldown window.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, EsimError::RateLimited { .. })
    }
}

/// Result type alias for esimcheck operations
pub type Result<T> = std::result::Result<T, EsimError>;
