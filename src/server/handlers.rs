//! Request handlers for the two API endpoints.
//!
//! Orchestration order is fixed: validate input → consult the answer
//! cache (hit short-circuits everything) → throttle gate (rejection
//! short-circuits) → upstream catalog → spec extraction → cache write →
//! response. A live upstream rate limit arms the gate's cooldown here,
//! at the handler boundary, before being mapped to HTTP 429.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use super::state::AppState;
use crate::extract::extract_sim_info;
use crate::types::{AnswerPayload, LookupKey, SearchResult};
use crate::{EsimError, messages, telemetry};

/// Search responses are truncated to this many hits.
const MAX_SEARCH_RESULTS: usize = 8;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
}

/// `POST /api/search-devices` — free-text device search.
pub async fn search_devices(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, HandlerError> {
    let query = req.query.trim();
    if query.is_empty() {
        return Err(reject(
            "search_devices",
            EsimError::Validation(messages::EMPTY_QUERY.into()),
        ));
    }

    state
        .throttle
        .check_and_reserve()
        .map_err(|e| reject("search_devices", e))?;

    let hits = state
        .provider
        .search(query)
        .await
        .map_err(|e| upstream_failed(&state, "search_devices", e))?;

    let results = hits.into_iter().take(MAX_SEARCH_RESULTS).collect();
    metrics::counter!(telemetry::REQUESTS_TOTAL, "endpoint" => "search_devices", "status" => "ok")
        .increment(1);
    Ok(Json(SearchResponse { results }))
}

/// How a check request identifies its device.
enum Lookup {
    ById(String),
    ByQuery(String),
}

/// `POST /api/check-esim` — eSIM capability verdict for one device.
pub async fn check_esim(
    State(state): State<AppState>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<AnswerPayload>, HandlerError> {
    let device_id = req.device_id.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let query = req.query.as_deref().map(str::trim).filter(|s| !s.is_empty());

    let lookup = if let Some(id) = device_id {
        Lookup::ById(id.to_owned())
    } else if let Some(q) = query {
        Lookup::ByQuery(q.to_owned())
    } else {
        return Err(reject(
            "check_esim",
            EsimError::Validation(messages::MISSING_LOOKUP.into()),
        ));
    };

    let key = match &lookup {
        Lookup::ById(id) => LookupKey::for_device(id),
        Lookup::ByQuery(q) => LookupKey::for_query(q),
    };

    // A hit bypasses the throttle gate and the catalog entirely, even
    // for cached "not found" answers.
    if let Some(hit) = state.cache.get(&key) {
        let mut payload = (*hit).clone();
        payload.from_cache = true;
        metrics::counter!(telemetry::REQUESTS_TOTAL, "endpoint" => "check_esim", "status" => "ok")
            .increment(1);
        return Ok(Json(payload));
    }

    state
        .throttle
        .check_and_reserve()
        .map_err(|e| reject("check_esim", e))?;

    let device_id = match lookup {
        Lookup::ById(id) => id,
        Lookup::ByQuery(q) => {
            let hits = state
                .provider
                .search(&q)
                .await
                .map_err(|e| upstream_failed(&state, "check_esim", e))?;
            match hits.into_iter().next() {
                Some(hit) => hit.id,
                None => {
                    // Cache the miss so repeat queries skip upstream.
                    let payload = AnswerPayload::not_found(messages::DEVICE_NOT_FOUND);
                    state.cache.insert(key, payload.clone());
                    metrics::counter!(telemetry::REQUESTS_TOTAL,
                        "endpoint" => "check_esim", "status" => "ok")
                    .increment(1);
                    return Ok(Json(payload));
                }
            }
        }
    };

    let detail = state
        .provider
        .get_device(&device_id)
        .await
        .map_err(|e| upstream_failed(&state, "check_esim", e))?;

    let info = extract_sim_info(&detail);
    let message = match (&info.sim_raw, info.supports_esim) {
        (None, _) => messages::SIM_UNDETERMINED,
        (Some(_), Some(true)) => messages::SUPPORTS_ESIM,
        _ => messages::NO_ESIM_EVIDENCE,
    };

    let payload = AnswerPayload {
        found: true,
        device_name: Some(detail.name),
        device_id: Some(device_id),
        sim_raw: info.sim_raw,
        supports_esim: info.supports_esim,
        message: message.to_owned(),
        from_cache: false,
    };
    state.cache.insert(key, payload.clone());

    metrics::counter!(telemetry::REQUESTS_TOTAL, "endpoint" => "check_esim", "status" => "ok")
        .increment(1);
    Ok(Json(payload))
}

/// Count and wrap a pre-upstream rejection (validation or throttle).
fn reject(endpoint: &'static str, err: EsimError) -> HandlerError {
    metrics::counter!(telemetry::REQUESTS_TOTAL, "endpoint" => endpoint, "status" => "error")
        .increment(1);
    HandlerError(err)
}

/// Log an upstream failure and, on a live rate limit, arm the gate's
/// cooldown window before the error is mapped to a response.
fn upstream_failed(state: &AppState, endpoint: &'static str, err: EsimError) -> HandlerError {
    warn!(endpoint, error = %err, "upstream catalog call failed");
    if err.is_rate_limited() {
        state.throttle.trip_cooldown();
    }
    reject(endpoint, err)
}

/// Wrapper mapping [`EsimError`] to the HTTP status/body contract.
#[derive(Debug)]
pub struct HandlerError(pub EsimError);

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            EsimError::Validation(message) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            EsimError::LocalThrottle { .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                json!({ "error": messages::LOCAL_THROTTLE, "code": "LOCAL_THROTTLE" }),
            ),
            EsimError::UpstreamBlocked { .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                json!({ "error": messages::UPSTREAM_BLOCKED, "code": "UPSTREAM_BLOCKED" }),
            ),
            EsimError::RateLimited { .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                json!({ "error": messages::UPSTREAM_RATE_LIMITED, "code": 429 }),
            ),
            // Everything else is an opaque failure; the message stays
            // generic and the detail rides along for diagnostics.
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": messages::UPSTREAM_FAILURE, "details": other.to_string() }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
