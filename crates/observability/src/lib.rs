//! Tracing/logging setup shared by the binaries.

/// Logging configuration read from the environment.
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&ObservabilityConfig::from_env());
}
