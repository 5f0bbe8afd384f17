//! Driver configuration read from the environment.

use chrono::{DateTime, Utc};

use solid_storage::{Clock, FixedClock, SystemClock};

/// Message handed to every sink. Overridden by `SOLID_AUDIT_MESSAGE`.
pub const AUDIT_MESSAGE_ENV: &str = "SOLID_AUDIT_MESSAGE";

/// RFC 3339 instant pinning audit timestamps, e.g. `2024-05-06T07:08:09Z`.
pub const FIXED_TIME_ENV: &str = "SOLID_FIXED_TIME";

pub const DEFAULT_AUDIT_MESSAGE: &str = "User data saved";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub audit_message: String,
    /// When set, audit timestamps come from this instant instead of the wall clock.
    pub fixed_time: Option<DateTime<Utc>>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            audit_message: DEFAULT_AUDIT_MESSAGE.to_string(),
            fixed_time: None,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(AUDIT_MESSAGE_ENV).ok(),
            std::env::var(FIXED_TIME_ENV).ok(),
        )
    }

    /// Build from raw variable values. Bad values warn and fall back.
    pub fn from_vars(audit_message: Option<String>, fixed_time: Option<String>) -> Self {
        let audit_message = audit_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AUDIT_MESSAGE.to_string());

        let fixed_time = fixed_time.and_then(|raw| {
            DateTime::parse_from_rfc3339(raw.trim())
                .map(|at| at.with_timezone(&Utc))
                .map_err(|err| {
                    tracing::warn!(value = %raw, error = %err, "invalid SOLID_FIXED_TIME; using the system clock");
                })
                .ok()
        });

        Self {
            audit_message,
            fixed_time,
        }
    }

    pub fn clock(&self) -> Box<dyn Clock> {
        match self.fixed_time {
            Some(at) => Box::new(FixedClock(at)),
            None => Box::new(SystemClock),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn missing_vars_use_defaults() {
        assert_eq!(DemoConfig::from_vars(None, None), DemoConfig::default());
    }

    #[test]
    fn blank_message_uses_default() {
        let config = DemoConfig::from_vars(Some("   ".into()), None);
        assert_eq!(config.audit_message, DEFAULT_AUDIT_MESSAGE);
    }

    #[test]
    fn fixed_time_pins_the_clock() {
        let config = DemoConfig::from_vars(
            Some("Order archived".into()),
            Some("2024-05-06T07:08:09Z".into()),
        );
        let at = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();

        assert_eq!(config.audit_message, "Order archived");
        assert_eq!(config.fixed_time, Some(at));
        assert_eq!(config.clock().now(), at);
    }

    #[test]
    fn offsets_are_normalised_to_utc() {
        let config = DemoConfig::from_vars(None, Some("2024-05-06T09:08:09+02:00".into()));
        assert_eq!(config.fixed_time, Some(Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap()));
    }

    #[test]
    fn unparsable_time_falls_back_to_system_clock() {
        let config = DemoConfig::from_vars(None, Some("yesterday".into()));
        assert_eq!(config.fixed_time, None);
    }
}
