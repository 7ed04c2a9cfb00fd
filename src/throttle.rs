//! Throttle gate in front of the upstream catalog.
//!
//! [`ThrottleGate`] enforces two independent limits on upstream-bound
//! calls:
//!
//! - a minimum spacing between consecutive calls (local throttle), and
//! - a cooldown window armed after the catalog itself answers with a
//!   rate-limit error, during which all calls are rejected pre-emptively.
//!
//! The gate reserves at decision time: a successful
//! [`check_and_reserve()`](ThrottleGate::check_and_reserve) records the
//! call instant before the upstream request is issued, so concurrent
//! requests cannot both pass the spacing check. State lives behind a
//! mutex; check-and-reserve is atomic.
//!
//! There is no manual reset. Only elapsed time unblocks the gate, and
//! state is lost on process restart.

use std::sync::Mutex;
use std::time::Duration;

use tokio::time::Instant;

use crate::telemetry;
use crate::{EsimError, Result};

/// Minimum spacing between upstream calls.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(5);

/// Cooldown window armed after a live upstream rate limit.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(30);

#[derive(Debug, Default)]
struct GateState {
    last_call: Option<Instant>,
    blocked_until: Option<Instant>,
}

/// Shared gate tracking the last upstream call and the cooldown deadline.
///
/// Uses [`tokio::time::Instant`] so tests can drive it with a paused
/// clock (`#[tokio::test(start_paused = true)]`).
pub struct ThrottleGate {
    min_interval: Duration,
    cooldown: Duration,
    state: Mutex<GateState>,
}

impl ThrottleGate {
    /// Create a gate with the default intervals (5s spacing, 30s cooldown).
    pub fn new() -> Self {
        Self::with_intervals(DEFAULT_MIN_INTERVAL, DEFAULT_COOLDOWN)
    }

    /// Create a gate with custom intervals (used by tests and tuning).
    pub fn with_intervals(min_interval: Duration, cooldown: Duration) -> Self {
        Self {
            min_interval,
            cooldown,
            state: Mutex::new(GateState::default()),
        }
    }

    /// Decide whether an upstream call may proceed, reserving the slot
    /// on success.
    ///
    /// The cooldown window is checked first: while it is active every
    /// call is rejected with [`EsimError::UpstreamBlocked`], regardless
    /// of spacing. Otherwise calls closer than the minimum interval to
    /// the previous reservation are rejected with
    /// [`EsimError::LocalThrottle`]. On allow, the current instant is
    /// recorded as the last call before returning.
    pub fn check_and_reserve(&self) -> Result<()> {
        let now = Instant::now();
        let mut state = self.state.lock().expect("throttle state poisoned");

        if let Some(until) = state.blocked_until {
            if now < until {
                metrics::counter!(telemetry::THROTTLE_REJECTIONS_TOTAL, "reason" => "blocked")
                    .increment(1);
                return Err(EsimError::UpstreamBlocked {
                    retry_after: until - now,
                });
            }
        }

        if let Some(last) = state.last_call {
            let elapsed = now - last;
            if elapsed < self.min_interval {
                metrics::counter!(telemetry::THROTTLE_REJECTIONS_TOTAL, "reason" => "local")
                    .increment(1);
                return Err(EsimError::LocalThrottle {
                    retry_after: self.min_interval - elapsed,
                });
            }
        }

        state.last_call = Some(now);
        Ok(())
    }

    /// Arm the cooldown window after a live upstream rate limit.
    pub fn trip_cooldown(&self) {
        let mut state = self.state.lock().expect("throttle state poisoned");
        state.blocked_until = Some(Instant::now() + self.cooldown);
        metrics::counter!(telemetry::COOLDOWNS_ARMED_TOTAL).increment(1);
    }

    /// Time remaining in the cooldown window, or `None` when the gate
    /// is not blocked.
    ///
    /// Used by the upstream client as a defensive double-check before
    /// issuing a request.
    pub fn blocked_remaining(&self) -> Option<Duration> {
        let state = self.state.lock().expect("throttle state poisoned");
        let until = state.blocked_until?;
        let now = Instant::now();
        if now < until { Some(until - now) } else { None }
    }
}

impl Default for ThrottleGate {
    fn default() -> Self {
        Self::new()
    }
}
