//! Core business logic module
//!
//! This module contains all business logic for modresolve.
//! It has NO I/O operations - those belong in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`version`] - Interface and module version parsing
//! - [`module`] - Module descriptors and interfaces
//! - [`action`] - Tenant module requests and plan entries
//! - [`products`] - Provider lookup, latest versions, `replaces` tie-breaking
//! - [`validate`] - Dependency validation
//! - [`conflicts`] - Interface collision detection
//! - [`resolver`] - Install simulation
//! - [`global_config`] - Global configuration management

pub mod action;
pub mod conflicts;
pub mod global_config;
pub mod module;
pub mod products;
pub mod resolver;
pub mod validate;
pub mod version;
