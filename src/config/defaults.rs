//! Default configuration values

/// Versions kept per product by `latest` when no count is given
pub const DEFAULT_LATEST_COUNT: usize = 1;

/// Catalog snapshot read when none is configured
pub const DEFAULT_CATALOG_FILE: &str = "catalog.json";

/// Enabled-set snapshot read when none is configured
pub const DEFAULT_ENABLED_FILE: &str = "enabled.json";

/// Global config file name, inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Minimum proptest iterations
pub const MIN_PROPTEST_ITERATIONS: u32 = 100;
