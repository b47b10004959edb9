//! Environment-driven configuration.

use std::net::SocketAddr;

use thiserror::Error;

use catalog_observability::{LogFormat, LogFormatError};

pub const BIND_ADDR_VAR: &str = "CATALOG_BIND_ADDR";
pub const SEED_VAR: &str = "CATALOG_SEED";
pub const LOG_FORMAT_VAR: &str = "CATALOG_LOG_FORMAT";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} must be a boolean (true/false/1/0/yes/no), got: {value}")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var}: {source}")]
    InvalidLogFormat {
        var: &'static str,
        source: LogFormatError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// Insert the demo products when the catalog starts empty.
    pub seed: bool,
    /// Output format of the process logs.
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (env, map in tests, ...).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(value) => value.trim().parse::<SocketAddr>().map_err(|_| ConfigError::InvalidAddr {
                var: BIND_ADDR_VAR,
                value,
            })?,
            None => default_bind_addr(),
        };

        let seed = match lookup(SEED_VAR) {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool {
                var: SEED_VAR,
                value,
            })?,
            None => true,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(value) => value
                .parse::<LogFormat>()
                .map_err(|source| ConfigError::InvalidLogFormat {
                    var: LOG_FORMAT_VAR,
                    source,
                })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            seed,
            log_format,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            seed: true,
            log_format: LogFormat::default(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
