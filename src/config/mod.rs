// src/config/mod.rs

//! Application configuration
//!
//! Channelboard is a thin client, so configuration is deliberately small:
//! where the backend lives, how the native HTTP client is tuned, how often
//! the brand list is refreshed, and the default CSV delimiter. Values come
//! from defaults overridden by `CHANNELBOARD_*` environment variables.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable prefix for overrides
const ENV_PREFIX: &str = "CHANNELBOARD_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST backend, no trailing slash
    pub api_base: String,
    /// Request timeout applied to the native HTTP client only; the web
    /// transport keeps its platform defaults
    pub request_timeout_secs: u64,
    /// Fixed period between automatic brand-list refreshes
    pub brand_refresh_secs: u64,
    /// Default delimiter for CSV export
    pub csv_delimiter: char,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:5000".to_string(),
            request_timeout_secs: 30,
            brand_refresh_secs: 3600,
            csv_delimiter: ',',
        }
    }
}

impl AppConfig {
    /// Defaults overridden by environment variables where present.
    ///
    /// Only available on native; the web build ships the defaults and is
    /// configured at bundle time.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base) = std::env::var(format!("{}API_BASE", ENV_PREFIX)) {
            config.api_base = base;
        }
        if let Ok(timeout) = std::env::var(format!("{}REQUEST_TIMEOUT_SECS", ENV_PREFIX)) {
            config.request_timeout_secs = timeout
                .parse()
                .map_err(|_| Error::validation("request_timeout_secs", "not a number"))?;
        }
        if let Ok(refresh) = std::env::var(format!("{}BRAND_REFRESH_SECS", ENV_PREFIX)) {
            config.brand_refresh_secs = refresh
                .parse()
                .map_err(|_| Error::validation("brand_refresh_secs", "not a number"))?;
        }
        if let Ok(delim) = std::env::var(format!("{}CSV_DELIMITER", ENV_PREFIX)) {
            let mut chars = delim.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => config.csv_delimiter = c,
                _ => {
                    return Err(Error::validation(
                        "csv_delimiter",
                        "must be a single character",
                    ))
                }
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base.is_empty() {
            return Err(Error::validation("api_base", "must not be empty"));
        }
        if self.api_base.ends_with('/') {
            return Err(Error::validation(
                "api_base",
                "must not have a trailing slash",
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::validation("request_timeout_secs", "must be > 0"));
        }
        if self.brand_refresh_secs == 0 {
            return Err(Error::validation("brand_refresh_secs", "must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_base, "http://localhost:5000");
        assert_eq!(config.csv_delimiter, ',');
    }

    #[test]
    fn test_trailing_slash_rejected() {
        let config = AppConfig {
            api_base: "http://localhost:5000/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_refresh_rejected() {
        let config = AppConfig {
            brand_refresh_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
