//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SURI_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use suri_catalog::http::DEFAULT_BASE_URL;
use suri_catalog::CatalogConfig;
use thiserror::Error;

/// Invalid configuration value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has invalid value '{value}': {reason}")]
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown on the order confirmation)
    pub store_name: String,

    /// Catalog API base URL
    pub catalog_base_url: String,

    /// Catalog request timeout in seconds
    pub request_timeout_secs: u64,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Shipping label shown in the order summary
    pub shipping: String,
}

impl Default for ConfigState {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Store: "Suri"
    /// - Catalog: https://fakestoreapi.com, 15s timeout
    /// - Currency: USD ($)
    /// - Shipping: "Free"
    fn default() -> Self {
        ConfigState {
            store_name: "Suri".to_string(),
            catalog_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 15,
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            shipping: "Free".to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Loads configuration from an arbitrary variable lookup.
    ///
    /// ## Variables
    /// - `SURI_STORE_NAME`
    /// - `SURI_CATALOG_URL`
    /// - `SURI_REQUEST_TIMEOUT_SECS` (positive integer)
    /// - `SURI_CURRENCY_CODE`
    /// - `SURI_CURRENCY_SYMBOL`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("SURI_STORE_NAME") {
            config.store_name = name;
        }
        if let Some(url) = lookup("SURI_CATALOG_URL") {
            config.catalog_base_url = url;
        }
        if let Some(code) = lookup("SURI_CURRENCY_CODE") {
            config.currency_code = code;
        }
        if let Some(symbol) = lookup("SURI_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }
        if let Some(raw) = lookup("SURI_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                Ok(_) => {
                    return Err(ConfigError::InvalidVar {
                        var: "SURI_REQUEST_TIMEOUT_SECS",
                        value: raw,
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidVar {
                        var: "SURI_REQUEST_TIMEOUT_SECS",
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            };
        }

        Ok(config)
    }

    /// Catalog client settings derived from this configuration.
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig::new(
            self.catalog_base_url.clone(),
            Duration::from_secs(self.request_timeout_secs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ConfigState::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.catalog_config().base_url, "https://fakestoreapi.com");
        assert_eq!(config.catalog_config().timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("SURI_STORE_NAME", "Suri Games"),
            ("SURI_CATALOG_URL", "http://localhost:8080/"),
            ("SURI_REQUEST_TIMEOUT_SECS", " 3 "),
            ("SURI_CURRENCY_CODE", "BRL"),
            ("SURI_CURRENCY_SYMBOL", "R$"),
        ]))
        .unwrap();

        assert_eq!(config.store_name, "Suri Games");
        assert_eq!(config.currency_symbol, "R$");
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.catalog_config().base_url, "http://localhost:8080");
    }

    #[test]
    fn test_invalid_timeout() {
        for bad in ["soon", "0", "-1"] {
            let err = ConfigState::from_lookup(lookup(&[("SURI_REQUEST_TIMEOUT_SECS", bad)]))
                .unwrap_err();
            assert!(err.to_string().starts_with("SURI_REQUEST_TIMEOUT_SECS"));
        }
    }
}
