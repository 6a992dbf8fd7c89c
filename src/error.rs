//! Error types for modresolve
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::validate::DependencyReport;

/// Install simulation errors
///
/// Display strings are the user-facing messages and are surfaced verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Requested module is not in the catalog, or disable target is not enabled
    #[error("Module {id} not found")]
    ModuleNotFound { id: String },

    /// No provider of a required interface anywhere
    #[error("enable {module} failed: interface {interface} required by module {module} not found")]
    InterfaceNotFound { module: String, interface: String },

    /// Several products provide the interface and replaces does not pick one
    #[error(
        "enable {module} failed: interface {interface} required by module {module} is provided by multiple products: {}",
        products.join(", ")
    )]
    AmbiguousInterface {
        module: String,
        interface: String,
        products: Vec<String>,
    },

    /// Dependencies left unsatisfied
    #[error("{0}")]
    Unsatisfied(DependencyReport),
}

/// Snapshot loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read snapshot file
    #[error("Failed to read '{path}': {error}")]
    ReadError { path: PathBuf, error: String },

    /// Snapshot file is not valid JSON/TOML
    #[error("Failed to parse '{path}': {error}")]
    ParseError { path: PathBuf, error: String },

    /// Same module id listed twice
    #[error("Duplicate module id '{id}' in '{path}'")]
    DuplicateId { path: PathBuf, id: String },

    /// Map key does not match the module id
    #[error("Module listed under '{key}' has id '{id}' in '{path}'")]
    KeyMismatch {
        path: PathBuf,
        key: String,
        id: String,
    },
}
