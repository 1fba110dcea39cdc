use sdkport_core::{
    AssemblyAttributes, PackageConfiguration, Project, PropertyDirective, SourceFileContents,
};
use std::path::PathBuf;

#[test]
fn directive_serialization_uses_expected_wire_fields() {
    let directive = PropertyDirective::new("Company", "Acme");

    let json = serde_json::to_value(&directive).unwrap();
    assert_eq!(json["name"], "Company");
    assert_eq!(json["value"], "Acme");

    let decoded: PropertyDirective = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, directive);
}

#[test]
fn attributes_serialization_uses_expected_wire_fields() {
    let attributes = AssemblyAttributes {
        title: Some("Acme.Tools".to_string()),
        informational_version: Some("1.0.0-beta".to_string()),
        file_version: Some("1.0.0.1".to_string()),
        file: Some(PathBuf::from("Properties/AssemblyInfo.cs")),
        file_contents: SourceFileContents {
            members: vec!["class VersionInfo".to_string()],
            attribute_lists: Vec::new(),
        },
        ..AssemblyAttributes::default()
    };

    let json = serde_json::to_value(&attributes).unwrap();
    assert_eq!(json["title"], "Acme.Tools");
    assert_eq!(json["informational_version"], "1.0.0-beta");
    assert_eq!(json["file_version"], "1.0.0.1");
    assert_eq!(json["company"], serde_json::Value::Null);
    assert_eq!(json["file"], "Properties/AssemblyInfo.cs");
    assert_eq!(json["file_contents"]["members"][0], "class VersionInfo");

    let decoded: AssemblyAttributes = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, attributes);
}

#[test]
fn project_roundtrips_through_json() {
    let project = Project {
        assembly_attributes: Some(AssemblyAttributes::default()),
        package_configuration: Some(PackageConfiguration {
            version: Some("2.1.0".to_string()),
            ..PackageConfiguration::default()
        }),
        attribute_properties: vec![PropertyDirective::new("Version", "2.1.0")],
        deletions: vec![PathBuf::from("Properties/AssemblyInfo.cs")],
    };

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["package_configuration"]["version"], "2.1.0");
    assert_eq!(json["attribute_properties"][0]["name"], "Version");
    assert_eq!(json["deletions"][0], "Properties/AssemblyInfo.cs");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}
