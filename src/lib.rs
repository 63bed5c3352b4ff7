//! Object model for restricted administrative (JEA) modules.
//!
//! The crate models the static data behind a restricted session: a module
//! grants named roles a constrained set of capabilities (commands, functions,
//! or bundled scripts), each optionally limited by parameter validation
//! rules. The model translates deterministically into canonical, untyped
//! nested maps (`serde_json` objects) consumed by an external configuration
//! writer; case-insensitive name uniqueness with silent overwrite and the
//! bare-name shorthand for unconstrained entries are part of that contract.
//!
//! Enforcement at runtime, manifest file writing, and command-host discovery
//! all live outside this crate. The only filesystem code is the script
//! loader, kept at the boundary in [`loader`] so the model stays testable
//! with literal inputs.

pub mod casefold;
pub mod error;
pub mod export;
pub mod loader;
pub mod model;

pub use casefold::CaseMap;
pub use error::ModelError;
pub use export::{module_manifest_fields, role_capability_data};
pub use loader::{collect_script_bundles, load_script_bundle};
pub use model::{
    Capability, CapabilityKind, CommandCapability, CommandKind, FunctionDefinition, Module,
    ModuleVersion, Parameter, Role, ScriptBundle, ScriptCapability,
};
