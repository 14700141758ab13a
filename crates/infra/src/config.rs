//! Environment-driven configuration.

use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_KEY: &str = "storefront:cart";

pub const ENV_API_URL: &str = "STOREFRONT_API_URL";
pub const ENV_API_TOKEN: &str = "STOREFRONT_API_TOKEN";
pub const ENV_STORAGE_KEY: &str = "STOREFRONT_CART_KEY";
pub const ENV_DATA_DIR: &str = "STOREFRONT_DATA_DIR";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Settings needed to wire a cart engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Base URL of the storefront stock/catalog API.
    pub api_url: String,
    /// Optional bearer token for the API.
    pub api_token: Option<String>,
    /// Key the cart snapshot is stored under.
    pub storage_key: String,
    /// Override for the snapshot directory (defaults to the OS app data dir).
    pub data_dir: Option<PathBuf>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
        }
    }
}

impl CartConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup` (returns `None` for unset variables).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_url = get(ENV_API_URL).unwrap_or_else(|| {
            tracing::warn!("{ENV_API_URL} not set; using dev default {DEFAULT_API_URL}");
            DEFAULT_API_URL.to_string()
        });
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: ENV_API_URL,
                reason: format!("expected an http(s) URL, got '{api_url}'"),
            });
        }

        let storage_key = get(ENV_STORAGE_KEY).unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());

        Ok(Self {
            api_url,
            api_token: get(ENV_API_TOKEN),
            storage_key,
            data_dir: get(ENV_DATA_DIR).map(PathBuf::from),
        })
    }
}
