//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FASTBITE_API_BASE_URL` - Base URL of the FastBite API
//!   (default: `http://127.0.0.1:3000/`)
//! - `FASTBITE_DATA_DIR` - Directory for the local persistent store
//!   (default: `<platform data dir>/fastbite`, falling back to `.fastbite`)
//! - `FASTBITE_CURRENCY` - ISO 4217 display currency (default: `INR`)

use std::path::PathBuf;

use fastbite_core::CurrencyCode;
use thiserror::Error;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000/";
const DEFAULT_CURRENCY: &str = "INR";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL requests are joined against.
    pub api_base_url: Url,
    /// Directory of the local persistent store.
    pub data_dir: PathBuf,
    /// Currency used for all displayed amounts.
    pub currency: CurrencyCode,
}

impl StorefrontConfig {
    /// Build a configuration directly; used by embedders and tests.
    #[must_use]
    pub const fn new(api_base_url: Url, data_dir: PathBuf, currency: CurrencyCode) -> Self {
        Self {
            api_base_url,
            data_dir,
            currency,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = get_env_or_default("FASTBITE_API_BASE_URL", DEFAULT_API_BASE_URL)
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("FASTBITE_API_BASE_URL".to_owned(), e.to_string())
            })?;

        let data_dir = std::env::var_os("FASTBITE_DATA_DIR")
            .map_or_else(default_data_dir, PathBuf::from);

        let currency = get_env_or_default("FASTBITE_CURRENCY", DEFAULT_CURRENCY)
            .parse::<CurrencyCode>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("FASTBITE_CURRENCY".to_owned(), e.to_string())
            })?;

        Ok(Self {
            api_base_url,
            data_dir,
            currency,
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Platform data directory, or a dotted directory in the working directory
/// when the platform offers none.
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(|| PathBuf::from(".fastbite"), |dir| dir.join("fastbite"))
}
