//! Configuration for the esimd daemon.
//!
//! Everything is flag-or-environment driven; there is no config file.
//! `PORT` picks the listening port (default 3000), `UPSTREAM_URL` points
//! at the catalog, `STATIC_DIR` holds the frontend bundle.

use std::path::PathBuf;

use clap::Parser;

/// Default base URL of the upstream phone-specification catalog.
const DEFAULT_UPSTREAM_URL: &str = "https://phone-specs-api.azharimm.dev";

/// esimd — eSIM capability lookup service.
#[derive(Debug, Parser)]
#[command(name = "esimd")]
#[command(version)]
#[command(about = "Answers whether a phone model supports eSIM")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Base URL of the upstream phone-specification catalog.
    #[arg(long, env = "UPSTREAM_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    /// Directory holding the static frontend assets.
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Socket address string the daemon binds to.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
