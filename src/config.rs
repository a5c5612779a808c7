//! Configuration management for the contact directory.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Preset directory capacity. When set, the menu does not ask for one.
    pub capacity: Option<usize>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `DIRECTORY_CAPACITY`: Directory capacity, a positive integer
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let capacity = Self::parse_env_capacity("DIRECTORY_CAPACITY")?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            capacity,
            log_level,
        })
    }

    /// Parse an optional positive capacity from an environment variable.
    fn parse_env_capacity(var_name: &str) -> ConfigResult<Option<usize>> {
        let val = match env::var(var_name) {
            Ok(val) => val,
            Err(_) => return Ok(None),
        };

        match val.trim().parse::<usize>() {
            Ok(0) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be greater than zero".to_string(),
            }),
            Ok(capacity) => Ok(Some(capacity)),
            Err(_) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            capacity: None,
            log_level: "error".to_string(),
        }
    }
}
