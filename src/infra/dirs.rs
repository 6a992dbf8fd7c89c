//! Platform-specific directory management
//!
//! Locates the configuration directory. `MODRESOLVE_CONFIG_DIR` overrides
//! the platform default (XDG on Linux, Library on macOS).

use std::env;
use std::path::PathBuf;

use crate::config::defaults::CONFIG_FILE_NAME;

/// Environment variable overriding the config directory
pub const ENV_CONFIG_DIR: &str = "MODRESOLVE_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "modresolve";

/// Platform-specific directory provider for modresolve
#[derive(Debug, Clone)]
pub struct ModresolveDirs {
    config_dir: PathBuf,
}

impl ModresolveDirs {
    /// Create a new `ModresolveDirs` instance
    ///
    /// Checks the environment first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Use `config_dir` regardless of environment
    #[must_use]
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/modresolve` or `~/.config/modresolve`
    /// - macOS: `~/Library/Application Support/modresolve`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the global config file path
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for ModresolveDirs {
    fn default() -> Self {
        Self::new()
    }
}
