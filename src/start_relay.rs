//! Startup helpers for the support relay server.

use std::process::ExitCode;

use crate::completion::{CompletionConfig, config::API_KEY_ENV};
use crate::server::{self, AppState};

/// Run the server (used by the `support-relay-server` binary).
///
/// # Returns
/// `ExitCode::SUCCESS` on graceful shutdown, `1` on failure.
#[must_use]
pub fn run() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting support relay v{}", env!("CARGO_PKG_VERSION"));

    let config = CompletionConfig::from_env();
    tracing::info!("Completion endpoint: {}", config.api_url);
    tracing::info!("Completion model: {}", config.model);
    if config.api_key.is_none() {
        // Not fatal at startup: the credential is re-checked on every call
        // and surfaced to callers as a configuration error until set.
        tracing::warn!("{API_KEY_ENV} is not set; reply generation will fail until it is configured");
    }

    let state = match AppState::new(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to create state: {e}");
            return ExitCode::from(1);
        }
    };

    let port = get_port();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create runtime: {e}");
            return ExitCode::from(1);
        }
    };

    if let Err(e) = rt.block_on(server::run_server(state, port)) {
        tracing::error!("Server error: {e}");
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

/// Get configured server port.
#[must_use]
pub fn get_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(server::DEFAULT_PORT)
}
