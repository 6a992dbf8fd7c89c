//! Interface collision detection
//!
//! Reports interface names provided by more than one module of a catalog.

use std::collections::HashMap;

use crate::core::module::ModuleMap;

/// Report modules providing the same interface name
///
/// Modules are visited in ascending id order. For each interface name the
/// last provider seen is remembered, and every further provider is reported
/// against it, newest first: `Interface int is provided by moduleA-1.1.0 and
/// moduleA-1.0.0.` Versions are not considered. Reports are joined with a
/// space; an empty string means no collisions.
pub fn check_all_conflicts(catalog: &ModuleMap) -> String {
    let mut last_provider: HashMap<&str, &str> = HashMap::new();
    let mut reports = Vec::new();

    for module in catalog.values() {
        for interface in module.provides() {
            if let Some(prior) = last_provider.insert(interface.name(), module.id()) {
                if prior != module.id() {
                    reports.push(format!(
                        "Interface {} is provided by {} and {prior}.",
                        interface.name(),
                        module.id()
                    ));
                }
            }
        }
    }

    reports.join(" ")
}
