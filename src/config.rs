//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CART_STORAGE_KEY` - Key the cart is saved under (default: `@RocketShoes:cart`)
//! - `CART_STORAGE_DIR` - Directory for the file store (default: `.cart`)
//! - `CART_CATALOG_URL` - Base URL of the product API (default: `http://localhost:3333`)
//! - `CART_BUFFER_SIZE` - Cart actor mailbox size (default: 32)
//! - `CART_CATALOG_TIMEOUT_SECS` - Catalog request timeout (default: 10)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_STORAGE_KEY: &str = "@RocketShoes:cart";
pub const DEFAULT_STORAGE_DIR: &str = ".cart";
pub const DEFAULT_CATALOG_URL: &str = "http://localhost:3333";
pub const DEFAULT_BUFFER_SIZE: usize = 32;
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartConfig {
    pub storage_key: String,
    pub storage_dir: PathBuf,
    pub catalog_url: String,
    pub buffer_size: usize,
    pub catalog_timeout: Duration,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            catalog_timeout: Duration::from_secs(DEFAULT_CATALOG_TIMEOUT_SECS),
        }
    }
}

impl CartConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let storage_key = match lookup("CART_STORAGE_KEY") {
            Some(key) if key.is_empty() => {
                return Err(ConfigError::InvalidEnvVar(
                    "CART_STORAGE_KEY".to_string(),
                    "must not be empty".to_string(),
                ));
            }
            Some(key) => key,
            None => defaults.storage_key,
        };

        let storage_dir = lookup("CART_STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.storage_dir);

        let catalog_url = lookup("CART_CATALOG_URL").unwrap_or(defaults.catalog_url);

        let buffer_size = match lookup("CART_BUFFER_SIZE") {
            Some(raw) => parse_positive("CART_BUFFER_SIZE", &raw)?,
            None => defaults.buffer_size,
        };

        let catalog_timeout = match lookup("CART_CATALOG_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(parse_positive("CART_CATALOG_TIMEOUT_SECS", &raw)?),
            None => defaults.catalog_timeout,
        };

        Ok(Self {
            storage_key,
            storage_dir,
            catalog_url,
            buffer_size,
            catalog_timeout,
        })
    }
}

fn parse_positive<T>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
    T::Err: std::fmt::Display,
{
    let value: T = raw
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(name.to_string(), e.to_string()))?;
    if value <= T::default() {
        return Err(ConfigError::InvalidEnvVar(
            name.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(value)
}
