//! Tracing subscriber setup.
//!
//! Logs always go to stderr; stdout is reserved for command output.

use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::TutorConfig;
use crate::error::TutorError;

/// Filter from `RUST_LOG`, falling back to the configured directive
fn env_filter(config: &TutorConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(config: &TutorConfig) -> Result<(), TutorError> {
    let json_layer = config.json_logs.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(io::stderr)
    });
    let plain_layer = (!config.json_logs).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(json_layer)
        .with(plain_layer)
        .try_init()
        .map_err(|e| TutorError::Config(format!("Failed to initialize logging: {}", e)))
}
