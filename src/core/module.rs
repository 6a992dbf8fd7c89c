//! Module and interface descriptors
//!
//! A module is identified by `product-version` and declares the interfaces it
//! provides, requires and optionally uses. Descriptors are validated once at
//! construction; everything downstream works on parsed values.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::version::{parse_version_list, InterfaceVersion, ModuleVersion, VersionError};

/// Catalog or enabled set, keyed by module id
///
/// Ordered so every walk over it is deterministic.
pub type ModuleMap = BTreeMap<String, Module>;

/// A named, versioned interface
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "InterfaceDescriptor", into = "InterfaceDescriptor")]
pub struct Interface {
    name: String,
    version: String,
    versions: Vec<InterfaceVersion>,
}

impl Interface {
    /// Parse an interface declaration
    pub fn new(name: &str, version: &str) -> Result<Self, VersionError> {
        Ok(Self {
            name: name.to_string(),
            version: version.to_string(),
            versions: parse_version_list(version)?,
        })
    }

    /// Interface family name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version text as declared
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Parsed versions (one for provided interfaces, one or more for requirements)
    pub fn versions(&self) -> &[InterfaceVersion] {
        &self.versions
    }

    /// Highest declared version, used for ordering providers
    pub fn max_version(&self) -> InterfaceVersion {
        self.versions
            .iter()
            .copied()
            .max()
            .unwrap_or(InterfaceVersion::new(0, 0))
    }

    /// Whether `provided` satisfies this interface when read as a requirement
    pub fn is_satisfied_by(&self, provided: &Interface) -> bool {
        compatible(self, provided)
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// Compatibility between a required and a provided interface
///
/// Names must match, the major versions must be equal and the provided minor
/// must be at least the required minor. A requirement listing alternatives is
/// met when any alternative is met.
pub fn compatible(required: &Interface, provided: &Interface) -> bool {
    required.name == provided.name
        && required
            .versions
            .iter()
            .any(|need| provided.versions.iter().any(|have| have.satisfies(need)))
}

/// Wire form of an interface
#[derive(Debug, Clone, Serialize, Deserialize)]
struct InterfaceDescriptor {
    #[serde(alias = "name")]
    id: String,
    version: String,
}

impl TryFrom<InterfaceDescriptor> for Interface {
    type Error = VersionError;

    fn try_from(value: InterfaceDescriptor) -> Result<Self, Self::Error> {
        Interface::new(&value.id, &value.version)
    }
}

impl From<Interface> for InterfaceDescriptor {
    fn from(value: Interface) -> Self {
        Self {
            id: value.name,
            version: value.version,
        }
    }
}

/// A module id split into product and version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleId {
    id: String,
    product: String,
    version: Option<ModuleVersion>,
}

impl ModuleId {
    /// Split an id at the first `-` that is followed by a digit
    ///
    /// An id without such a suffix is a bare product name.
    pub fn parse(id: &str) -> Result<Self, VersionError> {
        if id.is_empty() {
            return Err(VersionError::InvalidModuleId {
                id: id.to_string(),
                reason: "id must not be empty".to_string(),
            });
        }

        let bytes = id.as_bytes();
        let split = (1..bytes.len())
            .find(|&i| bytes[i - 1] == b'-' && bytes[i].is_ascii_digit())
            .map(|i| i - 1);

        let Some(split) = split else {
            return Ok(Self {
                id: id.to_string(),
                product: id.to_string(),
                version: None,
            });
        };

        let version = ModuleVersion::parse(&id[split + 1..]).map_err(|e| {
            VersionError::InvalidModuleId {
                id: id.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            id: id.to_string(),
            product: id[..split].to_string(),
            version: Some(version),
        })
    }

    /// Full id
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Version-independent product name
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Version, absent for bare product names
    pub fn version(&self) -> Option<&ModuleVersion> {
        self.version.as_ref()
    }

    /// Whether this id names a product without a version
    pub fn is_product(&self) -> bool {
        self.version.is_none()
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// An immutable module descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ModuleDescriptor", into = "ModuleDescriptor")]
pub struct Module {
    id: ModuleId,
    version: ModuleVersion,
    provides: Vec<Interface>,
    requires: Vec<Interface>,
    optional: Vec<Interface>,
    replaces: Vec<String>,
}

impl Module {
    /// Start building a module descriptor
    pub fn builder(id: &str) -> ModuleBuilder {
        ModuleBuilder::new(id)
    }

    /// Full module id
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// Product name
    pub fn product(&self) -> &str {
        self.id.product()
    }

    /// Release version
    pub fn version(&self) -> &ModuleVersion {
        &self.version
    }

    /// Interfaces this module implements
    pub fn provides(&self) -> &[Interface] {
        &self.provides
    }

    /// Hard dependencies
    pub fn requires(&self) -> &[Interface] {
        &self.requires
    }

    /// Soft dependencies
    pub fn optional(&self) -> &[Interface] {
        &self.optional
    }

    /// Products this module supersedes
    pub fn replaces(&self) -> &[String] {
        &self.replaces
    }

    /// Whether any provided interface carries `name`
    pub fn provides_name(&self, name: &str) -> bool {
        self.provides.iter().any(|i| i.name() == name)
    }

    /// First provided interface compatible with `required`
    pub fn provided_match(&self, required: &Interface) -> Option<&Interface> {
        self.provides.iter().find(|p| compatible(required, p))
    }

    /// Required interfaces followed by optional ones, flagged with `true` when required
    pub fn dependencies(&self) -> impl Iterator<Item = (&Interface, bool)> {
        self.requires
            .iter()
            .map(|i| (i, true))
            .chain(self.optional.iter().map(|i| (i, false)))
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Builder for [`Module`]
///
/// Collects raw declarations and validates them all in [`ModuleBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct ModuleBuilder {
    id: String,
    provides: Vec<(String, String)>,
    requires: Vec<(String, String)>,
    optional: Vec<(String, String)>,
    replaces: Vec<String>,
}

impl ModuleBuilder {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    /// Declare a provided interface
    #[must_use]
    pub fn provides(mut self, name: &str, version: &str) -> Self {
        self.provides.push((name.to_string(), version.to_string()));
        self
    }

    /// Declare a required interface
    #[must_use]
    pub fn requires(mut self, name: &str, version: &str) -> Self {
        self.requires.push((name.to_string(), version.to_string()));
        self
    }

    /// Declare an optional interface
    #[must_use]
    pub fn optional(mut self, name: &str, version: &str) -> Self {
        self.optional.push((name.to_string(), version.to_string()));
        self
    }

    /// Declare a replaced product
    #[must_use]
    pub fn replaces(mut self, product: &str) -> Self {
        self.replaces.push(product.to_string());
        self
    }

    /// Validate and build the module
    pub fn build(self) -> Result<Module, VersionError> {
        let parse_all = |decls: &[(String, String)]| {
            decls
                .iter()
                .map(|(name, version)| Interface::new(name, version))
                .collect::<Result<Vec<_>, _>>()
        };

        let id = ModuleId::parse(&self.id)?;
        let version = id.version().cloned().ok_or_else(|| VersionError::InvalidModuleId {
            id: self.id.clone(),
            reason: "module id must end in a version".to_string(),
        })?;

        let provides = parse_all(&self.provides)?;
        if let Some(multi) = provides.iter().find(|i| i.versions().len() != 1) {
            return Err(VersionError::InvalidInterfaceVersion {
                version: multi.version().to_string(),
                reason: format!("provided interface '{}' must carry a single version", multi.name()),
            });
        }

        Ok(Module {
            id,
            version,
            provides,
            requires: parse_all(&self.requires)?,
            optional: parse_all(&self.optional)?,
            replaces: self.replaces,
        })
    }
}

/// Wire form of a module
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ModuleDescriptor {
    id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    provides: Vec<InterfaceDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    requires: Vec<InterfaceDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    optional: Vec<InterfaceDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    replaces: Vec<String>,
}

impl TryFrom<ModuleDescriptor> for Module {
    type Error = VersionError;

    fn try_from(value: ModuleDescriptor) -> Result<Self, Self::Error> {
        let pairs = |list: Vec<InterfaceDescriptor>| -> Vec<(String, String)> {
            list.into_iter().map(|i| (i.id, i.version)).collect()
        };

        ModuleBuilder {
            id: value.id,
            provides: pairs(value.provides),
            requires: pairs(value.requires),
            optional: pairs(value.optional),
            replaces: value.replaces,
        }
        .build()
    }
}

impl From<Module> for ModuleDescriptor {
    fn from(value: Module) -> Self {
        let wire = |list: Vec<Interface>| list.into_iter().map(InterfaceDescriptor::from).collect();

        Self {
            id: value.id.as_str().to_string(),
            provides: wire(value.provides),
            requires: wire(value.requires),
            optional: wire(value.optional),
            replaces: value.replaces,
        }
    }
}

/// Collect modules into a [`ModuleMap`]
pub fn module_map<I>(modules: I) -> ModuleMap
where
    I: IntoIterator<Item = Module>,
{
    modules
        .into_iter()
        .map(|m| (m.id().to_string(), m))
        .collect()
}
