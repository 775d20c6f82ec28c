//! Configuration management for the record services server.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honored if present; loading it never writes to stdout, which the
//! MCP transport reserves for protocol traffic.

use crate::error::{ConfigError, ConfigResult};
use std::env;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the record services server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,

    /// Name the server reports to MCP clients (default: "record-services")
    pub server_name: String,

    /// Maximum number of search hits rendered per tool call (default: 50)
    pub max_search_results: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: trace, debug, info, warn or error (default: "info")
    /// - `RECORDS_SERVER_NAME`: server name reported to clients (default: "record-services")
    /// - `RECORDS_MAX_SEARCH_RESULTS`: positive cap on rendered search hits (default: 50)
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL")
            .map(|level| level.trim().to_lowercase())
            .unwrap_or_else(|_| "info".to_string());
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), log_level),
            });
        }

        let server_name =
            env::var("RECORDS_SERVER_NAME").unwrap_or_else(|_| "record-services".to_string());
        if server_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "RECORDS_SERVER_NAME".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let max_search_results = Self::parse_env_usize("RECORDS_MAX_SEARCH_RESULTS", 50)?;
        if max_search_results == 0 {
            return Err(ConfigError::InvalidValue {
                var: "RECORDS_MAX_SEARCH_RESULTS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        Ok(Config {
            log_level,
            server_name,
            max_search_results,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            server_name: "record-services".to_string(),
            max_search_results: 50,
        }
    }
}
