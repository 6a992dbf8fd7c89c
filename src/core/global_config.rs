//! Global configuration management
//!
//! Reads settings from `config.toml` in the config directory. Every setting
//! is optional; command-line flags take precedence over the file, and the
//! file over the built-in defaults.

use crate::config::defaults::{DEFAULT_CATALOG_FILE, DEFAULT_ENABLED_FILE, DEFAULT_LATEST_COUNT};
use crate::infra::dirs::ModresolveDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Global configuration error types
#[derive(Error, Debug)]
pub enum GlobalConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: String, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: String, error: String },
}

/// Global configuration for modresolve
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Default snapshot locations
    #[serde(default)]
    pub snapshots: SnapshotConfig,

    /// Catalog listing settings
    #[serde(default)]
    pub listing: ListingConfig,

    /// Output preferences
    #[serde(default)]
    pub output: OutputPrefs,
}

/// Snapshot file locations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Catalog of every known module
    pub catalog: Option<PathBuf>,

    /// Modules currently enabled for the tenant
    pub enabled: Option<PathBuf>,
}

/// Catalog listing settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Versions kept per product
    pub latest: Option<usize>,
}

/// Output preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPrefs {
    /// Enable JSON output
    pub json: Option<bool>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns `GlobalConfigError::ParseError` if the config file exists but
    /// contains invalid TOML.
    pub fn load(dirs: &ModresolveDirs) -> Result<Self, GlobalConfigError> {
        Self::load_from_path(&dirs.global_config_path())
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, GlobalConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| GlobalConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save global configuration to a specific path
    ///
    /// Creates parent directories if they don't exist.
    pub fn save_to_path(&self, path: &Path) -> Result<(), GlobalConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| GlobalConfigError::ReadError {
                path: parent.display().to_string(),
                error: e.to_string(),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| GlobalConfigError::ParseError {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        fs::write(path, content).map_err(|e| GlobalConfigError::ReadError {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Effective catalog snapshot path
    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        self.snapshots
            .catalog
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE))
    }

    /// Effective enabled-set snapshot path
    #[must_use]
    pub fn enabled_path(&self) -> PathBuf {
        self.snapshots
            .enabled
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ENABLED_FILE))
    }

    /// Effective number of versions kept per product
    #[must_use]
    pub fn latest_count(&self) -> usize {
        self.listing.latest.unwrap_or(DEFAULT_LATEST_COUNT)
    }

    /// Whether JSON output is preferred
    #[must_use]
    pub fn json_output(&self) -> bool {
        self.output.json.unwrap_or(false)
    }
}
