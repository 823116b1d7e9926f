//! Structured logging setup.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the embedding application, which can call [`init_logging`] once at
//! startup.

use tracing_subscriber::EnvFilter;

use crate::config::schema::default_filter;
use crate::config::LoggingConfig;

/// Build the filter for `config`, falling back to `graphwalk=info` when the
/// directive does not parse.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(default_filter()))
}

/// Install a `tracing_subscriber::fmt` subscriber for `config`.
///
/// Subsequent calls are silently ignored.
pub fn init_logging(config: &LoggingConfig) {
    // try_init so double-init in tests doesn't panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(config.with_target)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
