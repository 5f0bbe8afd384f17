use core::str::FromStr;

use thiserror::Error;

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "SOLID_LOG_FORMAT";

/// Environment variable holding the tracing filter.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Filter used when `RUST_LOG` is unset. Quiet enough to keep stdout clean.
pub const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format `{0}` (expected `json` or `pretty`)")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub format: LogFormat,
    pub filter: String,
    /// Raw `SOLID_LOG_FORMAT` value that failed to parse, reported once logging is up.
    pub rejected_format: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: DEFAULT_FILTER.to_string(),
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(LOG_FORMAT_ENV).ok(),
            std::env::var(LOG_FILTER_ENV).ok(),
        )
    }

    /// Build from raw variable values. Unknown formats fall back to the default.
    pub fn from_vars(format: Option<String>, filter: Option<String>) -> Self {
        let (format, rejected_format) = match format.as_deref().map(LogFormat::from_str) {
            None => (LogFormat::default(), None),
            Some(Ok(format)) => (format, None),
            Some(Err(UnknownLogFormat(raw))) => (LogFormat::default(), Some(raw)),
        };

        Self {
            format,
            rejected_format,
            filter: filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
        }
    }
}
