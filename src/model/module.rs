//! The module aggregate: everything bundled into one generated module.
//!
//! A module holds identity metadata for the manifest writer, the roles it
//! grants, pre/post-load script bundles, and the private/public function
//! definitions. It is a pure aggregate; manifest emission lives outside the
//! crate.

use crate::casefold::CaseMap;
use crate::error::ModelError;
use crate::model::role::Role;
use crate::model::script::{FunctionDefinition, ScriptBundle};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Semantic version triple, serialized as a dotted string (`"1.2.3"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ModuleVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ModuleVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for ModuleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for ModuleVersion {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.split('.');
        let mut next = || {
            parts
                .next()
                .and_then(|part| part.parse::<u64>().ok())
                .ok_or_else(|| ModelError::InvalidVersion(value.to_string()))
        };
        let version = Self {
            major: next()?,
            minor: next()?,
            patch: next()?,
        };
        if parts.next().is_some() {
            return Err(ModelError::InvalidVersion(value.to_string()));
        }
        Ok(version)
    }
}

impl Serialize for ModuleVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ModuleVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// A generated-module package: metadata, roles, scripts, and functions.
pub struct Module {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: ModuleVersion,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub company: String,
    /// Opaque list handed through to the manifest writer untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_modules: Option<Value>,
    #[serde(default)]
    pub roles: CaseMap<Role>,
    /// Scripts the module runs before its functions are loaded.
    #[serde(default)]
    pub preload_scripts: CaseMap<ScriptBundle>,
    /// Scripts the module runs after its functions are loaded.
    #[serde(default)]
    pub postload_scripts: CaseMap<ScriptBundle>,
    /// Functions the module contains but does not publish.
    #[serde(default)]
    pub private_functions: CaseMap<FunctionDefinition>,
    /// Functions the module contains and publishes.
    #[serde(default)]
    pub public_functions: CaseMap<FunctionDefinition>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a role keyed by its own name, overwriting any same-named one.
    pub fn add_role(&mut self, role: Role) {
        let name = role.name.clone();
        self.roles.insert(&name, role);
    }

    /// Promote every role's script capability content into
    /// `public_functions`.
    ///
    /// The whole-module form of `Role::copy_function_definitions`: later
    /// roles overwrite same-named definitions from earlier ones.
    pub fn promote_script_functions(&mut self) {
        let Module {
            roles,
            public_functions,
            ..
        } = self;
        for role in roles.values() {
            for cap in role.capabilities.values() {
                if let crate::model::capability::Capability::Script(script) = cap {
                    public_functions.insert(&script.content.name, script.content.clone());
                }
            }
        }
    }
}
