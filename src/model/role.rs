//! Roles: named grants binding an identity to a capability set.
//!
//! The role derives the two writer-facing views of its capability map. Both
//! views apply the shorthand contract: an entry without parameter constraints
//! collapses to its bare name string, a constrained one stays a full map.

use crate::casefold::CaseMap;
use crate::model::capability::{Capability, CommandKind};
use crate::model::module::Module;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// A named grant within a module.
pub struct Role {
    pub name: String,
    /// The principal (user or group) granted access to this role.
    pub identity: String,
    #[serde(default)]
    pub capabilities: CaseMap<Capability>,
}

impl Role {
    pub fn new(name: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identity: identity.into(),
            capabilities: CaseMap::new(),
        }
    }

    /// Add a capability keyed by its own name, overwriting any same-named one.
    pub fn add_capability(&mut self, capability: Capability) {
        let name = capability.name().to_string();
        self.capabilities.insert(&name, capability);
    }

    /// Cmdlet entries for the role capability data.
    ///
    /// Selects command capabilities of cmdlet kind; cmdlets resolve from the
    /// host, so the module name is irrelevant and left empty. An empty
    /// capability map yields an empty view.
    pub fn visible_cmdlets(&self) -> Vec<Value> {
        self.capabilities
            .values()
            .filter(|cap| matches!(cap, Capability::Command(c) if c.kind == CommandKind::Cmdlet))
            .map(|cap| collapse(cap.to_canonical("")))
            .collect()
    }

    /// Function entries for the role capability data.
    ///
    /// Selects command capabilities of function kind plus every script
    /// capability; scripts become functions inside the generated module, so
    /// their entries are qualified with `module_name`.
    pub fn visible_functions(&self, module_name: &str) -> Vec<Value> {
        self.capabilities
            .values()
            .filter(|cap| match cap {
                Capability::Command(c) => c.kind == CommandKind::Function,
                Capability::Script(_) => true,
            })
            .map(|cap| collapse(cap.to_canonical(module_name)))
            .collect()
    }

    /// Transcribe every script capability's function definition into the
    /// module's public functions.
    ///
    /// Entries are keyed by the definition's own name, not the capability
    /// name, and overwrite silently. Command capabilities are never touched.
    pub fn copy_function_definitions(&self, module: &mut Module) {
        for cap in self.capabilities.values() {
            if let Capability::Script(script) = cap {
                module
                    .public_functions
                    .insert(&script.content.name, script.content.clone());
            }
        }
    }
}

/// Shorthand contract: unconstrained entries serialize as the bare name.
fn collapse(entry: Map<String, Value>) -> Value {
    if !entry.contains_key("Parameters") {
        if let Some(name) = entry.get("Name") {
            return name.clone();
        }
    }
    Value::Object(entry)
}
