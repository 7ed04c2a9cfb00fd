//! esimcheck — backend answering "does this phone support eSIM?"
//!
//! Proxies an upstream phone-specification catalog behind two JSON
//! endpoints (device search and eSIM capability check), with an
//! in-memory answer cache and a throttle/cooldown gate that keeps the
//! service from abusing the catalog.
//!
//! Control flow for a check:
//! handler → [`AnswerCache`] (hit short-circuits) → [`ThrottleGate`]
//! (rejection short-circuits) → [`CatalogProvider`](provider::CatalogProvider)
//! → [`extract_sim_info`] → cache write → response.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use esimcheck::provider::SpecSourceClient;
//! use esimcheck::server::{self, AppState};
//! use esimcheck::throttle::ThrottleGate;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let throttle = Arc::new(ThrottleGate::new());
//! let provider = Arc::new(SpecSourceClient::new(
//!     "https://phone-specs-api.azharimm.dev",
//!     throttle.clone(),
//! ));
//! let app = server::router(AppState::new(provider, throttle), "public".as_ref());
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod error;
pub mod extract;
pub mod messages;
pub mod provider;
pub mod server;
pub mod telemetry;
pub mod throttle;
pub mod types;

// Re-export main types at crate root
pub use cache::AnswerCache;
pub use error::{EsimError, Result};
pub use extract::{SimInfo, extract_sim_info};
pub use throttle::ThrottleGate;
pub use types::{
    AnswerPayload, DeviceDetail, LookupKey, SearchResult, SpecEntry, SpecSection, SpecValue,
};
