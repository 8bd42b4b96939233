//! Structured logging setup for the gateway binary.

use std::io;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServerConfig;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines for development.
    Pretty,
    /// JSON lines for log aggregation.
    Json,
}

impl LogFormat {
    pub fn from_server_config(server: &ServerConfig) -> Self {
        if server.json_logs {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Builds the log filter: `RUST_LOG` wins over the configured directive.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs the global tracing subscriber.
///
/// Logs go to stderr. Calling this twice in one process panics, as for any
/// global subscriber.
pub fn init_tracing(server: &ServerConfig) {
    let subscriber = tracing_subscriber::registry().with(env_filter(&server.log_level));

    match LogFormat::from_server_config(server) {
        LogFormat::Pretty => {
            subscriber
                .with(fmt::layer().with_target(true).with_writer(io::stderr))
                .init();
        }
        LogFormat::Json => {
            subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_current_span(true)
                        .with_target(true)
                        .with_writer(io::stderr),
                )
                .init();
        }
    }
}
