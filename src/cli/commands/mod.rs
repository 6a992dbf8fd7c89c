//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod conflicts;
pub mod latest;
pub mod simulate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::cli::output::OutputConfig;
use crate::core::action::TenantModule;
use crate::core::global_config::GlobalConfig;
use crate::core::module::ModuleMap;
use crate::infra::filesystem;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan the actions needed to apply requests to a tenant
    Simulate {
        /// Catalog of every known module
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Modules currently enabled for the tenant
        #[arg(short, long)]
        enabled: Option<PathBuf>,

        /// JSON file with requests, applied before the positional ones
        #[arg(short, long)]
        requests: Option<PathBuf>,

        /// Requests as <action>:<id>, e.g. enable:moduleA-1.0.0
        #[arg(value_name = "ACTION:ID")]
        actions: Vec<TenantModule>,
    },

    /// Check that required interfaces have compatible providers
    Check {
        /// Catalog of every known module
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Only check these modules, against the catalog
        #[arg(short, long)]
        subjects: Option<PathBuf>,
    },

    /// Report interfaces provided by more than one module
    Conflicts {
        /// Catalog of every known module
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// List the latest versions of every product
    Latest {
        /// Catalog of every known module
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Versions kept per product
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

impl Commands {
    /// Run the command
    pub async fn run(self, config: &GlobalConfig, output: &OutputConfig) -> Result<()> {
        match self {
            Self::Simulate {
                catalog,
                enabled,
                requests,
                actions,
            } => {
                let catalog = load_catalog(catalog, config)?;
                let enabled = load_enabled(enabled, config)?;
                let mut all = match requests {
                    Some(path) => filesystem::load_requests(&path)
                        .with_context(|| format!("Failed to load requests from {}", path.display()))?,
                    None => Vec::new(),
                };
                all.extend(actions);
                simulate::execute(&catalog, &enabled, all, output).await
            }
            Self::Check { catalog, subjects } => {
                let catalog = load_catalog(catalog, config)?;
                let subjects = subjects.as_deref().map(load_snapshot).transpose()?;
                check::execute(&catalog, subjects.as_ref(), output).await
            }
            Self::Conflicts { catalog } => {
                let catalog = load_catalog(catalog, config)?;
                conflicts::execute(&catalog, output).await
            }
            Self::Latest { catalog, count } => {
                let catalog = load_catalog(catalog, config)?;
                let count = count.unwrap_or_else(|| config.latest_count());
                latest::execute(&catalog, count, output).await
            }
        }
    }
}

fn load_snapshot(path: &Path) -> Result<ModuleMap> {
    filesystem::load_modules(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn load_catalog(path: Option<PathBuf>, config: &GlobalConfig) -> Result<ModuleMap> {
    let path = path.unwrap_or_else(|| config.catalog_path());
    load_snapshot(&path)
}

/// An unconfigured enabled set that does not exist is empty
fn load_enabled(path: Option<PathBuf>, config: &GlobalConfig) -> Result<ModuleMap> {
    if let Some(path) = path.or_else(|| config.snapshots.enabled.clone()) {
        return load_snapshot(&path);
    }
    let default = config.enabled_path();
    if !default.exists() {
        tracing::debug!("No enabled snapshot at {}; assuming none", default.display());
        return Ok(ModuleMap::new());
    }
    load_snapshot(&default)
}
