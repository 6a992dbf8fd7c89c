//! Check command implementation
//!
//! Implements `modresolve check` to validate a catalog, or a set of modules
//! against it.

use anyhow::{bail, Result};
use serde_json::json;

use crate::cli::output::{status, OutputConfig, Reported};
use crate::core::module::ModuleMap;
use crate::core::validate;

/// Execute the check command
pub async fn execute(
    catalog: &ModuleMap,
    subjects: Option<&ModuleMap>,
    output: &OutputConfig,
) -> Result<()> {
    let report = match subjects {
        Some(subjects) => validate::check_dependencies(catalog.values(), subjects.values()),
        None => validate::check_all_dependencies(catalog),
    };

    if output.json {
        output.print_json(&json!({ "ok": report.is_empty(), "report": report }))?;
        if !report.is_empty() {
            return Err(Reported.into());
        }
    } else if !report.is_empty() {
        bail!(report);
    }

    let checked = subjects.map_or(catalog.len(), ModuleMap::len);
    output.status(
        status::SUCCESS,
        &format!("All dependencies of {checked} module(s) are satisfied"),
    );
    Ok(())
}
