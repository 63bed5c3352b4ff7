//! Pure script and function values.
//!
//! Both types are plain (name, text) pairs with no filesystem knowledge;
//! turning an on-disk script into a `ScriptBundle` is the loader's job so the
//! model stays unit-testable with literal inputs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A script shipped inside the generated module.
///
/// `name` carries no extension; the generated module decides how the text is
/// materialized on disk.
pub struct ScriptBundle {
    pub name: String,
    pub text: String,
}

impl ScriptBundle {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A function definition destined for the generated module.
///
/// The name is the function's own name, which need not match the name of the
/// capability that carried it into the module.
pub struct FunctionDefinition {
    pub name: String,
    pub text: String,
}

impl FunctionDefinition {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}
