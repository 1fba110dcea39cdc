use sdkport_core::{
    AssemblyAttributeTransform, AssemblyAttributes, NullProgressSink, OsDirectoryProbe, Project,
    SourceFileContents, Transform, TransformError,
};
use std::path::PathBuf;

fn project_with_file(file: PathBuf, contents: SourceFileContents) -> Project {
    Project {
        assembly_attributes: Some(AssemblyAttributes {
            file: Some(file),
            file_contents: contents,
            ..AssemblyAttributes::default()
        }),
        ..Project::default()
    }
}

#[test]
fn lone_pointless_file_schedules_file_then_directory() {
    let root = tempfile::tempdir().expect("temp dir should create");
    let properties = root.path().join("Properties");
    std::fs::create_dir(&properties).expect("Properties dir should create");
    let file = properties.join("AssemblyInfo.cs");
    std::fs::write(&file, "// migrated").expect("attribute file should write");

    let mut project = project_with_file(file.clone(), SourceFileContents::default());

    AssemblyAttributeTransform::new(OsDirectoryProbe)
        .transform(&mut project, &NullProgressSink)
        .expect("deletion decision should succeed");

    assert_eq!(project.deletions, vec![file, properties]);
}

#[test]
fn sibling_entries_keep_the_directory() {
    let root = tempfile::tempdir().expect("temp dir should create");
    let properties = root.path().join("Properties");
    std::fs::create_dir(&properties).expect("Properties dir should create");
    let file = properties.join("AssemblyInfo.cs");
    std::fs::write(&file, "// migrated").expect("attribute file should write");
    std::fs::write(properties.join("Resources.resx"), "<root/>")
        .expect("sibling file should write");

    let mut project = project_with_file(file.clone(), SourceFileContents::default());

    AssemblyAttributeTransform::new(OsDirectoryProbe)
        .transform(&mut project, &NullProgressSink)
        .expect("deletion decision should succeed");

    assert_eq!(project.deletions, vec![file]);
}

#[test]
fn meaningful_file_is_never_scheduled() {
    let root = tempfile::tempdir().expect("temp dir should create");
    let file = root.path().join("AssemblyInfo.cs");
    std::fs::write(&file, "[assembly: InternalsVisibleTo(\"Acme.Tests\")]")
        .expect("attribute file should write");

    let contents = SourceFileContents {
        members: Vec::new(),
        attribute_lists: vec!["InternalsVisibleTo".to_string()],
    };
    let mut project = project_with_file(file, contents);

    AssemblyAttributeTransform::new(OsDirectoryProbe)
        .transform(&mut project, &NullProgressSink)
        .expect("migration should succeed");

    assert!(project.deletions.is_empty());
}

#[test]
fn missing_directory_fails_enumeration_after_file_is_scheduled() {
    let root = tempfile::tempdir().expect("temp dir should create");
    let file = root.path().join("gone").join("AssemblyInfo.cs");

    let mut project = project_with_file(file.clone(), SourceFileContents::default());

    let err = AssemblyAttributeTransform::new(OsDirectoryProbe)
        .transform(&mut project, &NullProgressSink)
        .expect_err("missing directory should fail enumeration");

    assert!(matches!(err, TransformError::DirectoryEnumeration { .. }));
    assert_eq!(project.deletions, vec![file]);
}
