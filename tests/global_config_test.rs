//! Integration tests for global configuration
//!
//! The config file lives in the config directory; every setting falls back
//! to a built-in default.

use std::path::PathBuf;

use modresolve::config::defaults::{DEFAULT_CATALOG_FILE, DEFAULT_LATEST_COUNT};
use modresolve::core::global_config::GlobalConfig;
use modresolve::infra::dirs::ModresolveDirs;
use tempfile::TempDir;

#[test]
fn test_load_from_config_dir() {
    let temp_dir = TempDir::new().unwrap();
    let dirs = ModresolveDirs::with_config_dir(temp_dir.path());
    std::fs::write(
        dirs.global_config_path(),
        "[snapshots]\nenabled = \"tenant-diku.json\"\n\n[output]\njson = true\n",
    )
    .unwrap();

    let config = GlobalConfig::load(&dirs).unwrap();
    assert_eq!(config.enabled_path(), PathBuf::from("tenant-diku.json"));
    assert_eq!(config.catalog_path(), PathBuf::from(DEFAULT_CATALOG_FILE));
    assert_eq!(config.latest_count(), DEFAULT_LATEST_COUNT);
    assert!(config.json_output());
}

#[test]
fn test_missing_config_dir_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let dirs = ModresolveDirs::with_config_dir(temp_dir.path().join("absent"));

    let config = GlobalConfig::load(&dirs).unwrap();
    assert_eq!(config, GlobalConfig::default());
}

#[test]
fn test_unknown_keys_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[listing]\nlatest = 4\nsort = \"name\"\n").unwrap();

    let config = GlobalConfig::load_from_path(&path).unwrap();
    assert_eq!(config.latest_count(), 4);
}
