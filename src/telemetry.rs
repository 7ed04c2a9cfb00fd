//! Telemetry metric name constants.
//!
//! Centralised metric names for esimcheck operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! All metrics are prefixed with `esimcheck_`. Counters end in `_total`.
//!
//! # Common labels
//!
//! - `endpoint` — API endpoint ("search_devices" | "check_esim")
//! - `operation` — upstream operation ("search" | "get_device")
//! - `reason` — throttle rejection reason ("local" | "blocked")

/// Total API requests handled.
///
/// Labels: `endpoint`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "esimcheck_requests_total";

/// Total answer cache hits.
pub const CACHE_HITS_TOTAL: &str = "esimcheck_cache_hits_total";

/// Total answer cache misses.
pub const CACHE_MISSES_TOTAL: &str = "esimcheck_cache_misses_total";

/// Total requests rejected by the throttle gate before reaching upstream.
///
/// Labels: `reason` ("local" | "blocked").
pub const THROTTLE_REJECTIONS_TOTAL: &str = "esimcheck_throttle_rejections_total";

/// Total calls issued to the upstream catalog.
///
/// Labels: `operation`.
pub const UPSTREAM_REQUESTS_TOTAL: &str = "esimcheck_upstream_requests_total";

/// Total cooldown windows armed after a live upstream rate limit.
pub const COOLDOWNS_ARMED_TOTAL: &str = "esimcheck_cooldowns_armed_total";
