//! Tracing/logging initialization.
//!
//! Diagnostics always go to stderr so stdout carries only program output.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::config::{DEFAULT_FILTER, LogFormat, ObservabilityConfig};

/// Parse `raw` as a filter, falling back to [`DEFAULT_FILTER`] and handing back
/// the parse error so it can be reported once a subscriber is installed.
pub fn parse_filter(raw: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(raw) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_FILTER), Some(err)),
    }
}

/// Install the global subscriber described by `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let (filter, rejected_filter) = parse_filter(&config.filter);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    if let Some(raw) = &config.rejected_format {
        ::tracing::warn!(value = %raw, "unknown SOLID_LOG_FORMAT; using pretty");
    }
    if let Some(err) = rejected_filter {
        ::tracing::warn!(
            value = %config.filter,
            error = %err,
            "invalid RUST_LOG filter; using {DEFAULT_FILTER}"
        );
    }
}
