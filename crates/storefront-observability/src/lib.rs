//! Observability setup for the storefront tools.
//!
//! The engines in `storefront-commerce` only emit `tracing` events; this crate
//! decides where they go:
//! - `LoggingConfig` - level, format and extra filter directives
//! - `init_tracing` - installs a `tracing-subscriber` fmt subscriber
//!
//! `RUST_LOG` always wins over the configured level.

mod logging;

pub use logging::*;

use thiserror::Error;

/// Errors raised while setting up logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObservabilityError {
    /// Level name not recognised.
    #[error("Unknown log level: {0}")]
    UnknownLevel(String),

    /// Filter directive rejected by `EnvFilter`.
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global subscriber was already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}
