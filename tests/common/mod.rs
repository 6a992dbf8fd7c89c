//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use modresolve::core::action::TenantModule;
use modresolve::core::module::{Module, ModuleMap};
use tempfile::TempDir;

/// Test project context
///
/// A temporary directory holding snapshot files, with its own isolated
/// config directory.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Config directory passed to the binary
    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Write modules as a JSON array snapshot
    pub fn write_modules(&self, name: &str, modules: &[&Module]) {
        let content = serde_json::to_string_pretty(modules).expect("Failed to serialize modules");
        self.create_file(name, &content);
    }

    /// Run the binary in the project directory
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_modresolve"))
            .current_dir(self.path())
            .env("MODRESOLVE_CONFIG_DIR", self.config_dir())
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .expect("Failed to execute modresolve")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// The shared set of modules the resolution scenarios are written against
///
/// `moduleA` and `moduleB` provide `int 1.0`, `moduleC` provides `int 1.1`.
/// `moduleD` uses `int` optionally, `moduleE` requires it.
pub struct Modules {
    pub a100: Module,
    pub a110: Module,
    pub a200: Module,
    pub b: Module,
    pub c: Module,
    pub d100: Module,
    pub d110: Module,
    pub d200: Module,
    pub da200: Module,
    pub e100: Module,
    pub e110: Module,
    pub e200: Module,
}

impl Modules {
    pub fn new() -> Self {
        Self {
            a100: provider("moduleA-1.0.0", "1.0"),
            a110: provider("moduleA-1.1.0", "1.1"),
            a200: provider("moduleA-2.0.0", "2.0"),
            b: provider("moduleB-1.0.0", "1.0"),
            c: provider("moduleC-1.0.0", "1.1"),
            d100: optional_user("moduleD-1.0.0", "1.0"),
            d110: optional_user("moduleD-1.1.0", "1.1"),
            d200: optional_user("moduleD-2.0.0", "2.0"),
            da200: Module::builder("moduleDA-2.0.0")
                .optional("int", "2.0")
                .requires("unknown-interface", "2.0")
                .build()
                .expect("valid module"),
            e100: requirer("moduleE-1.0.0", "1.0"),
            e110: requirer("moduleE-1.1.0", "1.1"),
            e200: requirer("moduleE-2.0.0", "2.0"),
        }
    }
}

impl Default for Modules {
    fn default() -> Self {
        Self::new()
    }
}

/// Module providing `int` at `version`
pub fn provider(id: &str, version: &str) -> Module {
    Module::builder(id)
        .provides("int", version)
        .build()
        .expect("valid module")
}

/// Module requiring `int` at `version`
pub fn requirer(id: &str, version: &str) -> Module {
    Module::builder(id)
        .requires("int", version)
        .build()
        .expect("valid module")
}

/// Module optionally using `int` at `version`
pub fn optional_user(id: &str, version: &str) -> Module {
    Module::builder(id)
        .optional("int", version)
        .build()
        .expect("valid module")
}

/// Key modules by id
pub fn map(modules: &[&Module]) -> ModuleMap {
    modules
        .iter()
        .map(|m| (m.id().to_string(), (*m).clone()))
        .collect()
}

/// Enable requests for exact module ids
pub fn enable_list(modules: &[&Module]) -> Vec<TenantModule> {
    modules.iter().map(|m| TenantModule::enable(m.id())).collect()
}

/// Disable requests for exact module ids
pub fn disable_list(modules: &[&Module]) -> Vec<TenantModule> {
    modules.iter().map(|m| TenantModule::disable(m.id())).collect()
}
