//! HTTP surface: router, handlers, shared state, configuration.
//!
//! Two JSON endpoints (`POST /api/search-devices`, `POST /api/check-esim`)
//! plus static frontend serving with an `index.html` fallback for
//! unmatched paths. All shared state ([`AppState`]) is injected into the
//! handlers through axum's `State` extractor — nothing lives in module
//! globals, so tests build isolated routers freely.

pub mod config;
mod handlers;
mod state;

use std::path::Path;

use axum::Router;
use axum::routing::post;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use state::AppState;

/// Build the application router.
///
/// `static_dir` holds the frontend assets; any path not matched by the
/// API or an existing file falls back to its `index.html`.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    let frontend =
        ServeDir::new(static_dir).not_found_service(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/search-devices", post(handlers::search_devices))
        .route("/api/check-esim", post(handlers::check_esim))
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
