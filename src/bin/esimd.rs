//! esimd — eSIM capability lookup daemon.
//!
//! Serves the search and check endpoints plus the static frontend,
//! backed by the upstream phone-specification catalog.

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use esimcheck::provider::SpecSourceClient;
use esimcheck::server::{self, AppState, ServerConfig};
use esimcheck::throttle::ThrottleGate;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();

    let throttle = Arc::new(ThrottleGate::new());
    let provider = Arc::new(SpecSourceClient::new(&config.upstream_url, throttle.clone()));
    let state = AppState::new(provider, throttle);

    let app = server::router(state, &config.static_dir);

    let addr = config.bind_address();
    info!(%addr, upstream = %config.upstream_url, static_dir = %config.static_dir.display(), "esimd starting");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
