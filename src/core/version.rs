//! Version handling for modules and interfaces
//!
//! Two version schemes live side by side:
//! - Interface versions are `major.minor`. A major bump breaks consumers,
//!   a minor bump only adds to the contract.
//! - Module versions follow semver and are taken from the module id suffix
//!   (`moduleA-1.2.0`). They only order module releases of one product.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use semver::Version;
use thiserror::Error;

/// Errors raised while parsing version strings and module ids
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Interface version is not `major.minor`
    #[error("Invalid interface version '{version}': {reason}")]
    InvalidInterfaceVersion { version: String, reason: String },

    /// Module id does not carry a usable version suffix
    #[error("Invalid module id '{id}': {reason}")]
    InvalidModuleId { id: String, reason: String },
}

/// A `major.minor` interface version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterfaceVersion {
    /// Breaking generation
    pub major: u32,
    /// Additive revision within a generation
    pub minor: u32,
}

impl InterfaceVersion {
    /// Create a version from its components
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Whether a provider at `self` satisfies a consumer that needs `required`
    ///
    /// Majors must match exactly and the provided minor must be at least the
    /// required one.
    pub fn satisfies(&self, required: &InterfaceVersion) -> bool {
        self.major == required.major && self.minor >= required.minor
    }
}

impl fmt::Display for InterfaceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for InterfaceVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

/// Parse a `major.minor` interface version
///
/// # Examples
/// ```
/// use modresolve::core::version::{parse_version, InterfaceVersion};
///
/// assert_eq!(parse_version("1.10").unwrap(), InterfaceVersion::new(1, 10));
/// assert!(parse_version("1").is_err());
/// ```
pub fn parse_version(s: &str) -> Result<InterfaceVersion, VersionError> {
    let invalid = |reason: &str| VersionError::InvalidInterfaceVersion {
        version: s.to_string(),
        reason: reason.to_string(),
    };

    let (major, minor) = s
        .split_once('.')
        .ok_or_else(|| invalid("expected two dot-separated numbers"))?;
    if minor.contains('.') {
        return Err(invalid("expected exactly two components"));
    }

    let component = |part: &str| {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("components must be non-negative integers"));
        }
        part.parse::<u32>().map_err(|e| invalid(&e.to_string()))
    };

    Ok(InterfaceVersion::new(component(major)?, component(minor)?))
}

/// Parse a requirement version list
///
/// Requirements may name several acceptable generations separated by
/// whitespace, e.g. `"1.0 2.0"`.
pub fn parse_version_list(s: &str) -> Result<Vec<InterfaceVersion>, VersionError> {
    let versions = s
        .split_whitespace()
        .map(parse_version)
        .collect::<Result<Vec<_>, _>>()?;

    if versions.is_empty() {
        return Err(VersionError::InvalidInterfaceVersion {
            version: s.to_string(),
            reason: "version must not be empty".to_string(),
        });
    }
    Ok(versions)
}

/// Release version of a module, taken from its id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleVersion {
    raw: String,
    parsed: Version,
}

impl ModuleVersion {
    /// Parse a module version
    ///
    /// Short forms (`1`, `1.2`) are padded with zero components before
    /// semver parsing.
    pub fn parse(raw: &str) -> Result<Self, VersionError> {
        let parsed = Version::parse(&pad_release(raw)).map_err(|e| {
            VersionError::InvalidModuleId {
                id: raw.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            raw: raw.to_string(),
            parsed,
        })
    }

    /// The semver reading of this version
    pub fn semver(&self) -> &Version {
        &self.parsed
    }
}

fn pad_release(raw: &str) -> String {
    let core_end = raw.find(['-', '+']).unwrap_or(raw.len());
    let (core, rest) = raw.split_at(core_end);
    match core.split('.').count() {
        1 => format!("{core}.0.0{rest}"),
        2 => format!("{core}.0{rest}"),
        _ => raw.to_string(),
    }
}

impl Ord for ModuleVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.parsed
            .cmp_precedence(&other.parsed)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for ModuleVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ModuleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
