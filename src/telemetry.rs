//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured filter. Production emits JSON lines,
//! every other environment a compact human-readable format.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ServerConfig;

/// Installs the global subscriber for the server binary.
///
/// Calling it twice is harmless; the second call leaves the first subscriber
/// in place.
pub fn init(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if server.is_production() {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer().compact()).try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
