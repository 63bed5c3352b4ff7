//! Writer-facing canonical map assembly.
//!
//! These helpers compose the role views and module fields into the two
//! logical shapes the external configuration writer consumes: the role
//! capability data and the module manifest fields. The writer owns file
//! naming and on-disk layout; this module only produces the maps.

use crate::model::module::Module;
use crate::model::role::Role;
use crate::model::script::FunctionDefinition;
use serde_json::{Map, Value};
use tracing::debug;

/// The role capability data: visible cmdlets and visible functions.
///
/// Script-sourced entries are qualified with `module_name`; unconstrained
/// entries collapse to bare name strings per the shorthand contract.
pub fn role_capability_data(role: &Role, module_name: &str) -> Map<String, Value> {
    let cmdlets = role.visible_cmdlets();
    let functions = role.visible_functions(module_name);
    debug!(
        role = %role.name,
        cmdlets = cmdlets.len(),
        functions = functions.len(),
        "assembled role capability data"
    );

    let mut result = Map::new();
    result.insert("VisibleCmdlets".to_string(), Value::Array(cmdlets));
    result.insert("VisibleFunctions".to_string(), Value::Array(functions));
    result
}

/// Module-level fields handed to the external manifest writer.
///
/// `RequiredModules` is passed through opaquely and omitted when unset;
/// function definitions are rendered as (Name, Text) maps in insertion order.
pub fn module_manifest_fields(module: &Module) -> Map<String, Value> {
    let mut result = Map::new();
    result.insert("Name".to_string(), Value::String(module.name.clone()));
    result.insert(
        "Description".to_string(),
        Value::String(module.description.clone()),
    );
    result.insert(
        "Version".to_string(),
        Value::String(module.version.to_string()),
    );
    result.insert("Author".to_string(), Value::String(module.author.clone()));
    result.insert("Company".to_string(), Value::String(module.company.clone()));
    if let Some(required) = &module.required_modules {
        result.insert("RequiredModules".to_string(), required.clone());
    }
    result.insert(
        "PrivateFunctions".to_string(),
        function_list(module.private_functions.values()),
    );
    result.insert(
        "PublicFunctions".to_string(),
        function_list(module.public_functions.values()),
    );

    debug!(
        module = %module.name,
        roles = module.roles.len(),
        public_functions = module.public_functions.len(),
        "assembled module manifest fields"
    );
    result
}

fn function_list<'a>(functions: impl Iterator<Item = &'a FunctionDefinition>) -> Value {
    Value::Array(
        functions
            .map(|def| {
                let mut entry = Map::new();
                entry.insert("Name".to_string(), Value::String(def.name.clone()));
                entry.insert("Text".to_string(), Value::String(def.text.clone()));
                Value::Object(entry)
            })
            .collect(),
    )
}
