//! Configuration loading
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit file (`--config`), or the user override at
//!    `<config_dir>/spendlog/config.toml` if it exists
//! 2. Built-in defaults
//!
//! Every key is optional; missing keys keep their default. The database path
//! can additionally be overridden by the `SPENDLOG_DB` environment variable,
//! which the CLI reads before falling back to the config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::DEFAULT_CATEGORIES;

/// Environment variable overriding the database path
pub const DB_PATH_ENV: &str = "SPENDLOG_DB";

/// Default store file name, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "expenses.db";

/// Default interchange file name, relative to the working directory
pub const DEFAULT_EXPORT_PATH: &str = "expenses.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Store location used when neither `--db` nor `SPENDLOG_DB` is given
    pub db_path: PathBuf,
    /// Interchange file used when export/import get no explicit file
    pub export_path: PathBuf,
    /// Categories registered when a store is first initialized
    pub categories: Vec<String>,
    /// Prefix for rendered amounts
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl Config {
    /// Load config from `explicit`, or the user override file, or defaults
    ///
    /// An explicit path must exist; the user override is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::user_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Location of the per-user override file (~/.config/spendlog/config.toml on Linux)
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("spendlog").join("config.toml"))
    }

    /// Resolve the store path: explicit argument, then config
    pub fn resolve_db_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.db_path.clone())
    }

    /// Format an amount with the configured currency symbol
    ///
    /// The sign is taken after rounding to cents, so `-0.001` renders as
    /// `$0.00`.
    pub fn format_amount(&self, amount: f64) -> String {
        let digits = format!("{:.2}", amount.abs());
        if amount < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9')) {
            format!("-{}{}", self.currency_symbol, digits)
        } else {
            format!("{}{}", self.currency_symbol, digits)
        }
    }
}
