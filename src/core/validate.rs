//! Dependency validation
//!
//! Checks that every required interface of a set of modules has a compatible
//! provider in a reference pool. All problems are collected in one pass; the
//! public entry points render them as a single space-separated string.

use std::fmt;

use crate::core::module::{Interface, Module, ModuleMap};
use crate::core::products::{providers_by_name, resolve_providers};

/// A single unsatisfied dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// Nothing in the pool provides the interface name
    Missing { module: String, interface: Interface },

    /// Providers exist, but none with a compatible version
    Incompatible {
        module: String,
        interface: Interface,
        /// `(provided version, provider id)`, ascending by version
        have: Vec<(String, String)>,
    },
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { module, interface } => write!(
                f,
                "Missing dependency: {module} requires {}: {}",
                interface.name(),
                interface.version()
            ),
            Self::Incompatible {
                module,
                interface,
                have,
            } => {
                write!(
                    f,
                    "Incompatible version for module {module} interface {}. Need {}. Have",
                    interface.name(),
                    interface.version()
                )?;
                for (version, provider) in have {
                    write!(f, " {version}/{provider}")?;
                }
                Ok(())
            }
        }
    }
}

/// All problems found in one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyReport {
    problems: Vec<Problem>,
}

impl DependencyReport {
    /// Whether no problem was found
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Problems in the order they were found
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub(crate) fn push(&mut self, problem: Problem) {
        self.problems.push(problem);
    }
}

impl From<Problem> for DependencyReport {
    fn from(problem: Problem) -> Self {
        Self {
            problems: vec![problem],
        }
    }
}

impl fmt::Display for DependencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, problem) in self.problems.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{problem}")?;
        }
        Ok(())
    }
}

/// Which declarations a validation pass looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    /// Hard dependencies only
    Required,
    /// Hard dependencies, plus optional ones that have a provider by name
    WithOptional,
}

/// Check one requirement of `module` against `pool`
pub(crate) fn check_interface(
    module: &Module,
    interface: &Interface,
    pool: &[&Module],
) -> Option<Problem> {
    if !resolve_providers(interface, pool.iter().copied()).is_empty() {
        return None;
    }

    let named = providers_by_name(interface, pool.iter().copied());
    if named.is_empty() {
        return Some(Problem::Missing {
            module: module.id().to_string(),
            interface: interface.clone(),
        });
    }

    let mut have: Vec<(&Interface, &str)> = named
        .iter()
        .flat_map(|m| {
            m.provides()
                .iter()
                .filter(|p| p.name() == interface.name())
                .map(move |p| (p, m.id()))
        })
        .collect();
    have.sort_by(|a, b| {
        a.0.max_version()
            .cmp(&b.0.max_version())
            .then_with(|| a.1.cmp(b.1))
    });

    Some(Problem::Incompatible {
        module: module.id().to_string(),
        interface: interface.clone(),
        have: have
            .into_iter()
            .map(|(p, id)| (p.version().to_string(), id.to_string()))
            .collect(),
    })
}

/// Validate `subjects` against `pool`, subjects in ascending id order
pub(crate) fn dependency_report(
    pool: &[&Module],
    subjects: &[&Module],
    scope: Scope,
) -> DependencyReport {
    let mut ordered = subjects.to_vec();
    ordered.sort_by(|a, b| a.id().cmp(b.id()));
    ordered.dedup_by(|a, b| a.id() == b.id());

    let mut report = DependencyReport::default();
    for module in ordered {
        for (interface, required) in module.dependencies() {
            if !required {
                let has_provider = pool.iter().any(|m| m.provides_name(interface.name()));
                if scope == Scope::Required || !has_provider {
                    continue;
                }
            }
            if let Some(problem) = check_interface(module, interface, pool) {
                report.push(problem);
            }
        }
    }
    report
}

/// Check every module of `catalog` against the catalog itself
///
/// Returns an empty string when the catalog is self-consistent.
pub fn check_all_dependencies(catalog: &ModuleMap) -> String {
    let modules: Vec<&Module> = catalog.values().collect();
    dependency_report(&modules, &modules, Scope::Required).to_string()
}

/// Check `subjects` against providers found in `reference`
///
/// # Examples
/// ```
/// use modresolve::core::module::Module;
/// use modresolve::core::validate::check_dependencies;
///
/// let provider = Module::builder("moduleC-1.0.0").provides("int", "2.0").build().unwrap();
/// let consumer = Module::builder("moduleB-1.0.0").requires("int", "1.0").build().unwrap();
///
/// assert_eq!(
///     check_dependencies([&provider], [&consumer]),
///     "Incompatible version for module moduleB-1.0.0 interface int. Need 1.0. Have 2.0/moduleC-1.0.0"
/// );
/// ```
pub fn check_dependencies<'a, R, S>(reference: R, subjects: S) -> String
where
    R: IntoIterator<Item = &'a Module>,
    S: IntoIterator<Item = &'a Module>,
{
    let pool: Vec<&Module> = reference.into_iter().collect();
    let subjects: Vec<&Module> = subjects.into_iter().collect();
    dependency_report(&pool, &subjects, Scope::Required).to_string()
}
