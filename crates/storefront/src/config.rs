//! Cart store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORAGE_DIR` - Directory for the file key-value store (default: .cart)
//! - `CART_CATALOG_PATH` - JSON or YAML catalog file (default: bundled catalog)
//! - `CART_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_STORAGE_DIR: &str = ".cart";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format for hosts that install a subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// Cart store host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Directory backing the file key-value store
    pub storage_dir: PathBuf,
    /// Catalog file; `None` means the bundled catalog
    pub catalog_path: Option<PathBuf>,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            catalog_path: None,
            log_format: LogFormat::default(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present. A `.env`
    /// that exists but cannot be read or parsed is logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        report_dotenv(dotenvy::dotenv());
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let storage_dir = get("CART_STORAGE_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR), PathBuf::from);
        let catalog_path = get("CART_CATALOG_PATH").map(PathBuf::from);
        let log_format = get("CART_LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>())
            .transpose()
            .map_err(|e| ConfigError::InvalidEnvVar("CART_LOG_FORMAT".to_string(), e))?
            .unwrap_or_default();

        Ok(Self {
            storage_dir,
            catalog_path,
            log_format,
        })
    }
}

/// Log a `.env` load failure other than the file being absent.
fn report_dotenv<T>(result: Result<T, dotenvy::Error>) -> Option<dotenvy::Error> {
    match result {
        Err(e) if !e.not_found() => {
            tracing::warn!(error = %e, "Ignoring unreadable .env file");
            Some(e)
        }
        _ => None,
    }
}
