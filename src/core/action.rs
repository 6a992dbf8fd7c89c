//! Tenant module actions
//!
//! The same record serves as request and as result: requests carry an
//! action and an id (module id or bare product), results additionally carry
//! `from` when an enable replaces another version of the same product.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What to do with a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Enable, upgrade or downgrade
    Enable,
    /// Disable
    Disable,
    /// Already enabled at the requested version
    Uptodate,
    /// Passed through untouched
    Conflict,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enable => write!(f, "enable"),
            Self::Disable => write!(f, "disable"),
            Self::Uptodate => write!(f, "uptodate"),
            Self::Conflict => write!(f, "conflict"),
        }
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enable" => Ok(Self::Enable),
            "disable" => Ok(Self::Disable),
            "uptodate" => Ok(Self::Uptodate),
            "conflict" => Ok(Self::Conflict),
            other => Err(format!(
                "unknown action '{other}' (expected enable, disable, uptodate or conflict)"
            )),
        }
    }
}

/// An action on one module for a tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantModule {
    /// Action to take
    pub action: Action,
    /// Module id, or bare product in requests
    pub id: String,
    /// Previously enabled module of the same product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl TenantModule {
    /// Create an action without `from`
    pub fn new(action: Action, id: impl Into<String>) -> Self {
        Self {
            action,
            id: id.into(),
            from: None,
        }
    }

    /// Enable `id`
    pub fn enable(id: impl Into<String>) -> Self {
        Self::new(Action::Enable, id)
    }

    /// Enable `id` in place of `from`
    pub fn upgrade(id: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            from: Some(from.into()),
            ..Self::enable(id)
        }
    }

    /// Disable `id`
    pub fn disable(id: impl Into<String>) -> Self {
        Self::new(Action::Disable, id)
    }

    /// Report `id` as already enabled
    pub fn uptodate(id: impl Into<String>) -> Self {
        Self::new(Action::Uptodate, id)
    }
}

impl fmt::Display for TenantModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.from {
            Some(from) => write!(f, "{} {} (from {from})", self.action, self.id),
            None => write!(f, "{} {}", self.action, self.id),
        }
    }
}

/// Parses `action:id`, as accepted on the command line
impl FromStr for TenantModule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (action, id) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <action>:<id>, got '{s}'"))?;
        if id.is_empty() {
            return Err(format!("missing module id in '{s}'"));
        }
        Ok(Self::new(action.parse()?, id))
    }
}
