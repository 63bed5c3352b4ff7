//! Parameter constraints attached to capability commands.
//!
//! A parameter either allows anything (name only), restricts input to a fixed
//! value set, or requires a regex match. When both constraints are present the
//! pattern wins and the set is silently dropped from the canonical map; the
//! external writer never sees both.

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// A named constraint on one argument of a permitted command.
pub struct Parameter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate_set: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validate_pattern: Option<String>,
}

impl Parameter {
    /// An unconstrained parameter: the argument is permitted with any value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            validate_set: None,
            validate_pattern: None,
        }
    }

    /// A fully specified parameter. Either constraint may be `None`.
    pub fn with_constraints(
        name: impl Into<String>,
        validate_set: Option<Vec<String>>,
        validate_pattern: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            validate_set,
            validate_pattern,
        }
    }

    /// Parse a parameter out of a loosely-typed map.
    ///
    /// `Name` is the only required field; scalar values (numbers, booleans)
    /// are stringified, anything structured is a conversion error.
    /// `ValidateSet` must be a sequence of strings and `ValidatePattern` a
    /// string when present.
    pub fn from_value(value: &Value) -> Result<Self, ModelError> {
        let table = value.as_object().ok_or(ModelError::TypeConversion {
            field: "Parameter",
            expected: "a map",
        })?;

        let name = match table.get("Name") {
            None | Some(Value::Null) => return Err(ModelError::MissingField("Name")),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(_) => {
                return Err(ModelError::TypeConversion {
                    field: "Name",
                    expected: "a scalar",
                });
            }
        };

        let validate_set = match table.get("ValidateSet") {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => {
                let mut set = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => set.push(s.clone()),
                        _ => {
                            return Err(ModelError::TypeConversion {
                                field: "ValidateSet",
                                expected: "a sequence of strings",
                            });
                        }
                    }
                }
                Some(set)
            }
            Some(_) => {
                return Err(ModelError::TypeConversion {
                    field: "ValidateSet",
                    expected: "a sequence of strings",
                });
            }
        };

        let validate_pattern = match table.get("ValidatePattern") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                return Err(ModelError::TypeConversion {
                    field: "ValidatePattern",
                    expected: "a string",
                });
            }
        };

        Ok(Self {
            name,
            validate_set,
            validate_pattern,
        })
    }

    /// Canonical map for the role capability data.
    ///
    /// Emits `Name` plus at most one constraint: a non-empty pattern takes
    /// precedence, otherwise the value set if one exists.
    pub fn to_canonical(&self) -> Map<String, Value> {
        let mut result = Map::new();
        result.insert("Name".to_string(), Value::String(self.name.clone()));

        match &self.validate_pattern {
            Some(pattern) if !pattern.is_empty() => {
                result.insert(
                    "ValidatePattern".to_string(),
                    Value::String(pattern.clone()),
                );
            }
            _ => {
                if let Some(set) = &self.validate_set {
                    let items = set.iter().cloned().map(Value::String).collect();
                    result.insert("ValidateSet".to_string(), Value::Array(items));
                }
            }
        }

        result
    }
}
