//! core::config
//!
//! Configuration schema and loading.
//!
//! # Locations
//!
//! The global config file is searched in order:
//! 1. `$SHELFMARK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/shelfmark/config.toml`
//! 3. `~/.shelfmark/config.toml`
//!
//! Missing files are not an error; defaults apply. A file that exists but
//! fails to parse is an error (a silently ignored config is worse than a
//! loud one).
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (handled by the CLI layer)
//!
//! # Example
//!
//! ```toml
//! # ~/.shelfmark/config.toml
//! catalog = "/home/me/books/library.json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default backing file: a fixed name relative to the working directory.
pub const DEFAULT_CATALOG_FILE: &str = "library.json";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

/// User configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the catalog file. Defaults to [`DEFAULT_CATALOG_FILE`].
    pub catalog: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error only if a config file exists but cannot be read
    /// or parsed. No config file at all yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        // 1. Check $SHELFMARK_CONFIG
        if let Ok(path) = std::env::var("SHELFMARK_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Self::read(&path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/shelfmark/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("shelfmark/config.toml");
            if path.exists() {
                return Self::read(&path);
            }
        }

        // 3. Check ~/.shelfmark/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".shelfmark/config.toml");
            if path.exists() {
                return Self::read(&path);
            }
        }

        // No config found, use defaults
        Ok(Self::default())
    }

    /// Read and parse a config file.
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|err| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// The catalog file path with the default applied.
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE))
    }
}
