//! modresolve CLI
//!
//! Entry point for the modresolve command-line application.

use anyhow::Result;
use clap::Parser;

use modresolve::cli::output::display_error;
use modresolve::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the -v/-q default
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(cli.output().log_level().into())
                .from_env_lossy(),
        )
        .init();

    match cli.run().await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
