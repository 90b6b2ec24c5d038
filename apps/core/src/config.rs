//! Runtime configuration.
//!
//! Read from the environment (a `.env` file is loaded by the binary first):
//! - `TUTOR_CACHE_CAPACITY`: analyses kept in the LRU cache (default 512)
//! - `TUTOR_JSON_LOGS`: `true`/`1` for JSON log lines (default plain text)
//! - `TUTOR_LOG`: log filter used when `RUST_LOG` is unset (default `info`)

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use validator::Validate;

use crate::error::TutorError;

pub const DEFAULT_CACHE_CAPACITY: usize = 512;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration of the analyzer and its logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TutorConfig {
    /// Number of analyses kept in the cache.
    #[validate(range(min = 1, max = 100000))]
    pub cache_capacity: usize,
    /// Emit logs as JSON lines instead of plain text.
    pub json_logs: bool,
    /// `EnvFilter` directive, e.g. `info` or `tutor_core=debug`.
    #[validate(length(min = 1))]
    pub log_filter: String,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            json_logs: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl TutorConfig {
    /// Build the configuration from environment variables and validate it.
    pub fn from_env() -> Result<Self, TutorError> {
        let defaults = Self::default();

        let config = Self {
            cache_capacity: parse_var("TUTOR_CACHE_CAPACITY")?.unwrap_or(defaults.cache_capacity),
            json_logs: match env::var("TUTOR_JSON_LOGS") {
                Ok(value) => parse_flag("TUTOR_JSON_LOGS", &value)?,
                Err(_) => defaults.json_logs,
            },
            log_filter: env::var("TUTOR_LOG").unwrap_or(defaults.log_filter),
        };

        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, TutorError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| TutorError::Config(format!("{} has an invalid value: '{}'", name, value))),
        Err(_) => Ok(None),
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, TutorError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(TutorError::Config(format!(
            "{} must be a boolean, got '{}'",
            name, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(TutorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = TutorConfig {
            cache_capacity: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("X", "TRUE").unwrap());
        assert!(parse_flag("X", " 1 ").unwrap());
        assert!(!parse_flag("X", "off").unwrap());
        assert!(matches!(parse_flag("X", "maybe"), Err(TutorError::Config(_))));
    }
}
