//! Client configuration baked in at build time.
//!
//! The bundle is static, so settings come from `option_env!` when `trunk`
//! compiles the crate:
//! - `EVALBOARD_API_BASE_URL`: backend origin (default `http://localhost:8000`)
//! - `EVALBOARD_LOG_LEVEL`: `error` | `warn` | `info` (default) | `debug` | `trace`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::Level;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("api base url must start with http:// or https://: {0}")]
    InvalidBaseUrl(String),
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl ClientConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// Invalid values fall back to the defaults and are reported through
    /// `log`, so a misconfigured build still starts.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("EVALBOARD_API_BASE_URL"), option_env!("EVALBOARD_LOG_LEVEL"))
    }

    /// Build config from raw optional values, substituting defaults for
    /// anything absent or invalid.
    pub fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = parse_base_url(base_url).unwrap_or_else(|e| {
            log::warn!("{e}; using {DEFAULT_API_BASE_URL}");
            DEFAULT_API_BASE_URL.to_owned()
        });
        let log_level = parse_log_level(log_level).unwrap_or_else(|e| {
            log::warn!("{e}; using {DEFAULT_LOG_LEVEL}");
            DEFAULT_LOG_LEVEL
        });
        Self { api_base_url, log_level }
    }

    /// Join an API path (leading `/`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn parse_log_level(raw: Option<&str>) -> Result<Level, ConfigError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some(value) => value
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(value.to_owned())),
    }
}
