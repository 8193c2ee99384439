//! Configuration management for the todo application.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::validation::ValidationRules;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str =
    "tickbox=info,tickbox_todo=info,tickbox_dialogs=info,tickbox_runtime=debug";

/// Errors from loading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
    },

    /// The length bounds contradict each other
    #[error("Invalid todo length bounds: min {min}, max {max}")]
    InvalidBounds {
        /// Configured minimum
        min: usize,
        /// Configured maximum
        max: usize,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Minimum todo length in characters (`TODO_MIN_LENGTH`, default 1)
    pub min_length: usize,
    /// Maximum todo length in characters (`TODO_MAX_LENGTH`, default 500)
    pub max_length: usize,
    /// Log filter (`RUST_LOG`)
    pub log_filter: String,
    /// Render Prometheus metrics at exit (`TICKBOX_METRICS`, default false)
    pub metrics_enabled: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable cannot be parsed or the length
    /// bounds are inconsistent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let min_length = parse_var(&lookup, "TODO_MIN_LENGTH", ValidationRules::DEFAULT_MIN_LEN)?;
        let max_length = parse_var(&lookup, "TODO_MAX_LENGTH", ValidationRules::DEFAULT_MAX_LEN)?;

        if min_length == 0 || min_length > max_length {
            return Err(ConfigError::InvalidBounds {
                min: min_length,
                max: max_length,
            });
        }

        Ok(Self {
            min_length,
            max_length,
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            metrics_enabled: parse_flag(&lookup, "TICKBOX_METRICS")?,
        })
    }

    /// Validation rules described by this configuration
    #[must_use]
    pub const fn validation_rules(&self) -> ValidationRules {
        ValidationRules::new(self.min_length, self.max_length)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            min_length: ValidationRules::DEFAULT_MIN_LEN,
            max_length: ValidationRules::DEFAULT_MAX_LEN,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            metrics_enabled: false,
        }
    }
}

fn parse_var<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(false),
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(ConfigError::InvalidValue { key, value }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&'static str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, (*v).to_string())).collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(load(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = load(&[
            ("TODO_MIN_LENGTH", "2"),
            ("TODO_MAX_LENGTH", "80"),
            ("RUST_LOG", "debug"),
            ("TICKBOX_METRICS", "true"),
        ])
        .unwrap();

        assert_eq!(config.validation_rules(), ValidationRules::new(2, 80));
        assert_eq!(config.log_filter, "debug");
        assert!(config.metrics_enabled);
    }

    #[test]
    fn rejects_unparseable_numbers() {
        assert_eq!(
            load(&[("TODO_MAX_LENGTH", "lots")]).unwrap_err(),
            ConfigError::InvalidValue {
                key: "TODO_MAX_LENGTH",
                value: "lots".to_string()
            }
        );
    }

    #[test]
    fn rejects_bad_flag() {
        assert!(matches!(
            load(&[("TICKBOX_METRICS", "maybe")]),
            Err(ConfigError::InvalidValue { key: "TICKBOX_METRICS", .. })
        ));
    }

    #[test]
    fn rejects_inconsistent_bounds() {
        assert_eq!(
            load(&[("TODO_MIN_LENGTH", "10"), ("TODO_MAX_LENGTH", "5")]).unwrap_err(),
            ConfigError::InvalidBounds { min: 10, max: 5 }
        );
        assert_eq!(
            load(&[("TODO_MIN_LENGTH", "0")]).unwrap_err(),
            ConfigError::InvalidBounds { min: 0, max: 500 }
        );
    }
}
