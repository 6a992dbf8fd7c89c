//! Output formatting
//!
//! Status prefixes, output modes and error display shared by all commands.

use serde::Serialize;
use thiserror::Error;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";
}

/// How commands should print
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress status messages
    pub quiet: bool,
    /// Print machine-readable JSON
    pub json: bool,
    /// Verbosity level from `-v` flags
    pub verbose: u8,
}

impl OutputConfig {
    /// Create an output configuration from the global flags
    #[must_use]
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Default log directive for these flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            return tracing::Level::ERROR;
        }
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }

    /// Print a status line unless quiet or in JSON mode
    pub fn status(&self, prefix: &str, message: &str) {
        if !self.quiet && !self.json {
            println!("{prefix} {message}");
        }
    }

    /// Print `value` as pretty JSON
    pub fn print_json<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Failure whose details were already printed as JSON
#[derive(Debug, Error)]
#[error("problems reported")]
pub struct Reported;

/// Print an error and its causes to stderr
///
/// A [`Reported`] failure prints nothing; only the exit code is left to set.
pub fn display_error(error: &anyhow::Error) {
    if error.is::<Reported>() {
        return;
    }
    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}
