//! Conflicts command implementation

use anyhow::{bail, Result};
use serde_json::json;

use crate::cli::output::{status, OutputConfig, Reported};
use crate::core::conflicts::check_all_conflicts;
use crate::core::module::ModuleMap;

/// Execute the conflicts command
///
/// Fails when any interface has more than one provider.
pub async fn execute(catalog: &ModuleMap, output: &OutputConfig) -> Result<()> {
    let report = check_all_conflicts(catalog);

    if output.json {
        output.print_json(&json!({ "ok": report.is_empty(), "report": report }))?;
        if !report.is_empty() {
            return Err(Reported.into());
        }
    } else if !report.is_empty() {
        bail!(report);
    }

    output.status(status::SUCCESS, "No interface is provided twice");
    Ok(())
}
