//! Filesystem operations
//!
//! Reads catalog, enabled-set and request snapshots. JSON snapshots hold
//! either an array of module descriptors or an object keyed by module id;
//! `.toml` files hold a `[[modules]]` array.

use std::path::Path;

use serde::Deserialize;

use crate::core::action::TenantModule;
use crate::core::module::{Module, ModuleMap};
use crate::error::CatalogError;

#[derive(Deserialize)]
struct TomlSnapshot {
    #[serde(default)]
    modules: Vec<Module>,
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Load a module snapshot, keyed by module id
pub fn load_modules(path: &Path) -> Result<ModuleMap, CatalogError> {
    let content = read_file(path)?;
    let modules = parse_modules(path, &content)?;
    tracing::debug!("Loaded {} module(s) from {}", modules.len(), path.display());
    Ok(modules)
}

/// Parse a module snapshot; the format follows the extension of `path`
pub fn parse_modules(path: &Path, content: &str) -> Result<ModuleMap, CatalogError> {
    let parse_error = |error: String| CatalogError::ParseError {
        path: path.to_path_buf(),
        error,
    };

    let is_toml = path.extension().is_some_and(|ext| ext == "toml");
    if is_toml {
        let snapshot: TomlSnapshot = toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        return collect(path, snapshot.modules);
    }

    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
    if value.is_object() {
        let keyed: Vec<(String, Module)> = serde_json::from_value::<serde_json::Map<String, serde_json::Value>>(value)
            .map_err(|e| parse_error(e.to_string()))?
            .into_iter()
            .map(|(key, descriptor)| {
                serde_json::from_value(descriptor)
                    .map(|module| (key, module))
                    .map_err(|e| parse_error(e.to_string()))
            })
            .collect::<Result<_, _>>()?;

        let mut modules = ModuleMap::new();
        for (key, module) in keyed {
            if key != module.id() {
                return Err(CatalogError::KeyMismatch {
                    path: path.to_path_buf(),
                    key,
                    id: module.id().to_string(),
                });
            }
            modules.insert(key, module);
        }
        return Ok(modules);
    }

    let list: Vec<Module> = serde_json::from_value(value).map_err(|e| parse_error(e.to_string()))?;
    collect(path, list)
}

fn collect(path: &Path, list: Vec<Module>) -> Result<ModuleMap, CatalogError> {
    let mut modules = ModuleMap::new();
    for module in list {
        let id = module.id().to_string();
        if modules.insert(id.clone(), module).is_some() {
            return Err(CatalogError::DuplicateId {
                path: path.to_path_buf(),
                id,
            });
        }
    }
    Ok(modules)
}

/// Load a JSON array of requests
pub fn load_requests(path: &Path) -> Result<Vec<TenantModule>, CatalogError> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| CatalogError::ParseError {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_json_array() {
        let content = r#"[
            {"id": "moduleA-1.0.0", "provides": [{"id": "int", "version": "1.0"}]},
            {"id": "moduleE-1.0.0", "requires": [{"id": "int", "version": "1.0"}]}
        ]"#;
        let modules = parse_modules(&PathBuf::from("catalog.json"), content).unwrap();

        assert_eq!(modules.len(), 2);
        assert_eq!(modules["moduleE-1.0.0"].requires()[0].name(), "int");
    }

    #[test]
    fn test_parse_json_map_checks_keys() {
        let content = r#"{"moduleA-1.0.0": {"id": "moduleA-1.1.0"}}"#;
        let err = parse_modules(&PathBuf::from("enabled.json"), content).unwrap_err();

        assert!(matches!(err, CatalogError::KeyMismatch { .. }));
    }

    #[test]
    fn test_parse_duplicate_id() {
        let content = r#"[{"id": "moduleA-1.0.0"}, {"id": "moduleA-1.0.0"}]"#;
        let err = parse_modules(&PathBuf::from("catalog.json"), content).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Duplicate module id 'moduleA-1.0.0' in 'catalog.json'"
        );
    }

    #[test]
    fn test_parse_toml() {
        let content = r#"
[[modules]]
id = "moduleA-1.0.0"
provides = [{ id = "int", version = "1.0" }]
replaces = ["moduleZ"]
"#;
        let modules = parse_modules(&PathBuf::from("catalog.toml"), content).unwrap();
        assert_eq!(modules["moduleA-1.0.0"].replaces(), ["moduleZ"]);
    }

    #[test]
    fn test_parse_invalid_version() {
        let content = r#"[{"id": "moduleA-1.0.0", "provides": [{"id": "int", "version": "x"}]}]"#;
        let err = parse_modules(&PathBuf::from("catalog.json"), content).unwrap_err();

        assert!(matches!(err, CatalogError::ParseError { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_modules(&PathBuf::from("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::ReadError { .. }));
    }
}
