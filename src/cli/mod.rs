//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::global_config::GlobalConfig;
use crate::infra::dirs::ModresolveDirs;
use commands::Commands;
use output::OutputConfig;

/// modresolve - module dependency resolution for tenants
///
/// Plans which modules to enable, upgrade or disable so that every
/// required interface of a tenant has a compatible provider.
#[derive(Parser, Debug)]
#[command(name = "modresolve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Output settings from the global flags alone
    #[must_use]
    pub fn output(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.json, self.verbose)
    }

    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let Some(cmd) = self.command else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            return Ok(());
        };

        let dirs = ModresolveDirs::new();
        let config = GlobalConfig::load(&dirs).context("Failed to load global configuration")?;
        let output = OutputConfig::new(self.quiet, self.json || config.json_output(), self.verbose);

        cmd.run(&config, &output).await
    }
}
