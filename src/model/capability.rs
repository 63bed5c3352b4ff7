//! Capabilities a role may grant.
//!
//! A capability is either a host command (cmdlet, function, alias, ...) the
//! session exposes as-is, or a script bundled into the generated module and
//! exposed as a function. The variant tag is fixed at construction; dispatch
//! happens on the tag, and each variant owns only its own fields.

use crate::casefold::CaseMap;
use crate::model::parameter::Parameter;
use crate::model::script::FunctionDefinition;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Discriminant of the capability union.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityKind {
    Command,
    Script,
}

/// Host command kind a command capability was discovered as.
///
/// Known variants keep serialization consistent; `Other` preserves forward
/// compatibility with hosts that report kinds this crate does not
/// special-case. Only `Cmdlet` and `Function` surface in the role views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Cmdlet,
    Function,
    Alias,
    Filter,
    ExternalScript,
    Application,
    Other(String),
}

impl CommandKind {
    pub fn as_str(&self) -> &str {
        match self {
            CommandKind::Cmdlet => "Cmdlet",
            CommandKind::Function => "Function",
            CommandKind::Alias => "Alias",
            CommandKind::Filter => "Filter",
            CommandKind::ExternalScript => "ExternalScript",
            CommandKind::Application => "Application",
            CommandKind::Other(value) => value.as_str(),
        }
    }

    fn from_str(value: &str) -> Self {
        match value {
            "Cmdlet" => CommandKind::Cmdlet,
            "Function" => CommandKind::Function,
            "Alias" => CommandKind::Alias,
            "Filter" => CommandKind::Filter,
            "ExternalScript" => CommandKind::ExternalScript,
            "Application" => CommandKind::Application,
            other => CommandKind::Other(other.to_string()),
        }
    }
}

impl Serialize for CommandKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CommandKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_str(&value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A host command or function the role exposes directly.
pub struct CommandCapability {
    pub name: String,
    pub kind: CommandKind,
    #[serde(default)]
    pub parameters: CaseMap<Parameter>,
}

impl CommandCapability {
    pub fn new(name: impl Into<String>, kind: CommandKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parameters: CaseMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A script bundled into the generated module and exposed as a function.
///
/// `content` holds the function definition that will be written into the
/// module; its name need not match the capability's own name.
pub struct ScriptCapability {
    pub name: String,
    pub content: FunctionDefinition,
    #[serde(default)]
    pub parameters: CaseMap<Parameter>,
}

impl ScriptCapability {
    pub fn new(name: impl Into<String>, content: FunctionDefinition) -> Self {
        Self {
            name: name.into(),
            content,
            parameters: CaseMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Capability union stored in a role's capability map.
pub enum Capability {
    Command(CommandCapability),
    Script(ScriptCapability),
}

impl Capability {
    /// Fixed discriminant; baked into the variant rather than settable state.
    pub fn kind(&self) -> CapabilityKind {
        match self {
            Capability::Command(_) => CapabilityKind::Command,
            Capability::Script(_) => CapabilityKind::Script,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Capability::Command(cap) => &cap.name,
            Capability::Script(cap) => &cap.name,
        }
    }

    pub fn parameters(&self) -> &CaseMap<Parameter> {
        match self {
            Capability::Command(cap) => &cap.parameters,
            Capability::Script(cap) => &cap.parameters,
        }
    }

    pub fn parameters_mut(&mut self) -> &mut CaseMap<Parameter> {
        match self {
            Capability::Command(cap) => &mut cap.parameters,
            Capability::Script(cap) => &mut cap.parameters,
        }
    }

    /// Attach a parameter constraint, overwriting any same-named one.
    pub fn add_parameter(&mut self, parameter: Parameter) {
        let name = parameter.name.clone();
        self.parameters_mut().insert(&name, parameter);
    }

    /// Canonical map for the role capability data.
    ///
    /// Command entries carry their bare name; script entries always qualify
    /// the name with the owning module (`Module\Name`) because the function is
    /// defined inside the generated module rather than resolved from an
    /// existing one. `Parameters` appears only when constraints exist, in
    /// insertion order.
    pub fn to_canonical(&self, module_name: &str) -> Map<String, Value> {
        let mut result = Map::new();

        let name = match self {
            Capability::Command(cap) => cap.name.clone(),
            Capability::Script(cap) => format!("{module_name}\\{}", cap.name),
        };
        result.insert("Name".to_string(), Value::String(name));

        let parameters = self.parameters();
        if !parameters.is_empty() {
            let items = parameters
                .values()
                .map(|param| Value::Object(param.to_canonical()))
                .collect();
            result.insert("Parameters".to_string(), Value::Array(items));
        }

        result
    }
}
