//! The restricted-session object model.
//!
//! Leaf-first: parameters constrain capabilities, capabilities populate
//! roles, roles live in the module aggregate. Everything name-keyed sits in a
//! [`crate::casefold::CaseMap`], so the case-insensitive overwrite contract
//! holds uniformly across the model.

pub mod capability;
pub mod module;
pub mod parameter;
pub mod role;
pub mod script;

pub use capability::{
    Capability, CapabilityKind, CommandCapability, CommandKind, ScriptCapability,
};
pub use module::{Module, ModuleVersion};
pub use parameter::Parameter;
pub use role::Role;
pub use script::{FunctionDefinition, ScriptBundle};
