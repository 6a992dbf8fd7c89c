//! modresolve - module dependency resolution for multi-tenant platforms
//!
//! Given a catalog of module descriptors and the modules enabled for a
//! tenant, computes the ordered enable/disable plan that satisfies a set of
//! requests, and validates catalogs for missing dependencies and interface
//! collisions.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (no I/O operations)
//! - [`infra`] - Infrastructure layer (config directory, snapshot files)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
