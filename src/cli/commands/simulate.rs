//! Simulate command implementation
//!
//! Implements `modresolve simulate`: prints the plan for a list of requests
//! without changing any snapshot.

use anyhow::Result;

use crate::cli::output::{status, OutputConfig};
use crate::core::action::TenantModule;
use crate::core::module::ModuleMap;
use crate::core::resolver;

/// Execute the simulate command
pub async fn execute(
    catalog: &ModuleMap,
    enabled: &ModuleMap,
    mut requests: Vec<TenantModule>,
    output: &OutputConfig,
) -> Result<()> {
    tracing::info!(
        "Simulating {} request(s) against {} enabled module(s)",
        requests.len(),
        enabled.len()
    );

    resolver::install_simulate(catalog, enabled, &mut requests)?;

    if output.json {
        return output.print_json(&requests);
    }
    if requests.is_empty() {
        output.status(status::SUCCESS, "Nothing to do");
        return Ok(());
    }
    for action in &requests {
        println!("{action}");
    }
    Ok(())
}
