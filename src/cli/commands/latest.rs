//! Latest command implementation
//!
//! Implements `modresolve latest` to list the newest versions per product.

use anyhow::Result;

use crate::cli::output::{status, OutputConfig};
use crate::core::module::{Module, ModuleMap};
use crate::core::products::latest_per_product;

/// Execute the latest command
pub async fn execute(catalog: &ModuleMap, count: usize, output: &OutputConfig) -> Result<()> {
    let modules: Vec<Module> = catalog.values().cloned().collect();
    let latest = latest_per_product(&modules, count);
    tracing::info!("Kept {} of {} module(s)", latest.len(), modules.len());

    if output.json {
        return output.print_json(&latest);
    }
    if latest.is_empty() {
        output.status(status::WARNING, "Catalog is empty");
    }
    for module in &latest {
        println!("{}", module.id());
    }
    Ok(())
}
