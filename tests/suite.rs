// Centralized integration suite for the module model; exercises the full
// build → promote → export path plus the loader boundary so serialization
// regressions surface in one place.

use anyhow::Result;
use roleforge::{
    Capability, CommandCapability, CommandKind, FunctionDefinition, Module, ModuleVersion,
    Parameter, Role, ScriptCapability, collect_script_bundles, module_manifest_fields,
    role_capability_data,
};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn maintenance_module() -> Module {
    let mut module = Module::new("Maintenance");
    module.description = "Restricted service maintenance".to_string();
    module.version = ModuleVersion::new(1, 0, 0);
    module.author = "Ops Team".to_string();
    module.company = "Contoso".to_string();

    let mut operators = Role::new("Operators", "CONTOSO\\Operators");
    operators.add_capability(Capability::Command(CommandCapability::new(
        "Get-Process",
        CommandKind::Cmdlet,
    )));
    let mut restart = CommandCapability::new("Restart-Service", CommandKind::Cmdlet);
    restart.parameters.insert(
        "Name",
        Parameter::with_constraints("Name", Some(vec!["svc1".into(), "svc2".into()]), None),
    );
    operators.add_capability(Capability::Command(restart));
    operators.add_capability(Capability::Script(ScriptCapability::new(
        "Invoke-Cleanup",
        FunctionDefinition::new("Invoke-Cleanup", "function Invoke-Cleanup { }"),
    )));
    module.add_role(operators);

    let mut auditors = Role::new("Auditors", "CONTOSO\\Auditors");
    auditors.add_capability(Capability::Command(CommandCapability::new(
        "Get-EventLogSummary",
        CommandKind::Function,
    )));
    module.add_role(auditors);

    module
}

#[test]
fn role_capability_data_matches_expected_shape() {
    let module = maintenance_module();
    let operators = module.roles.get("operators").expect("role present");

    let data = role_capability_data(operators, &module.name);
    assert_eq!(
        serde_json::Value::Object(data),
        json!({
            "VisibleCmdlets": [
                "Get-Process",
                {
                    "Name": "Restart-Service",
                    "Parameters": [
                        {"Name": "Name", "ValidateSet": ["svc1", "svc2"]},
                    ],
                },
            ],
            "VisibleFunctions": ["Maintenance\\Invoke-Cleanup"],
        })
    );
}

#[test]
fn promotion_feeds_the_manifest_fields() {
    let mut module = maintenance_module();
    module.promote_script_functions();

    let fields = module_manifest_fields(&module);
    assert_eq!(fields.get("Name"), Some(&json!("Maintenance")));
    assert_eq!(fields.get("Version"), Some(&json!("1.0.0")));
    assert_eq!(
        fields.get("PublicFunctions"),
        Some(&json!([
            {"Name": "Invoke-Cleanup", "Text": "function Invoke-Cleanup { }"},
        ]))
    );
}

#[test]
fn promotion_is_idempotent() {
    let mut module = maintenance_module();
    module.promote_script_functions();
    module.promote_script_functions();
    assert_eq!(module.public_functions.len(), 1);
}

#[test]
fn later_capability_insert_wins_in_the_exported_view() {
    let mut role = Role::new("R", "CONTOSO\\R");
    role.add_capability(Capability::Command(CommandCapability::new(
        "Get-Item",
        CommandKind::Cmdlet,
    )));
    let mut shadow = CommandCapability::new("GET-ITEM", CommandKind::Cmdlet);
    shadow.parameters.insert("Path", Parameter::new("Path"));
    role.add_capability(Capability::Command(shadow));

    let data = role_capability_data(&role, "Mod");
    assert_eq!(
        data.get("VisibleCmdlets"),
        Some(&json!([
            {"Name": "GET-ITEM", "Parameters": [{"Name": "Path"}]},
        ]))
    );
}

#[test]
fn deserialized_role_keeps_case_insensitive_uniqueness() -> Result<()> {
    let role: Role = serde_json::from_value(json!({
        "name": "R",
        "identity": "CONTOSO\\R",
        "capabilities": {
            "Get-Item": {"Command": {"name": "Get-Item", "kind": "Cmdlet", "parameters": {}}},
            "GET-ITEM": {"Command": {"name": "GET-ITEM", "kind": "Cmdlet", "parameters": {}}},
        },
    }))?;

    assert_eq!(role.capabilities.len(), 1);
    let survivor = role.capabilities.get("get-item").expect("entry present");
    assert_eq!(survivor.name(), "GET-ITEM");
    assert_eq!(role.visible_cmdlets(), vec![json!("GET-ITEM")]);
    Ok(())
}

#[test]
fn loaded_bundles_flow_into_the_module() -> Result<()> {
    let dir = TempDir::new()?;
    fs::write(
        dir.path().join("Initialize-State.ps1"),
        "function Initialize-State { }",
    )?;
    fs::write(
        dir.path().join("Publish-Report.ps1"),
        "function Publish-Report { }",
    )?;

    let bundles = collect_script_bundles(&[dir.path().to_path_buf()], "ps1")?;
    assert_eq!(bundles.len(), 2);

    let mut module = Module::new("Maintenance");
    for bundle in bundles {
        let name = bundle.name.clone();
        module.preload_scripts.insert(&name, bundle);
    }
    assert!(module.preload_scripts.contains("initialize-state"));
    assert!(module.preload_scripts.contains("Publish-Report"));
    Ok(())
}

#[test]
fn parameter_parse_round_trips_through_canonical_form() -> Result<()> {
    let original = json!({
        "Name": "ComputerName",
        "ValidateSet": ["one", "two"],
    });
    let parsed = Parameter::from_value(&original)?;
    assert_eq!(serde_json::Value::Object(parsed.to_canonical()), original);
    Ok(())
}
