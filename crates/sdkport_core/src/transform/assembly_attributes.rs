//! Assembly attribute migration stage.
//!
//! # Responsibility
//! - Convert parsed `AssemblyInfo` values into project descriptor properties.
//! - Reconcile legacy values against package configuration overrides.
//! - Schedule redundant attribute files (and their folder) for deletion.
//!
//! # Invariants
//! - Consumed scalar fields are moved out; later stages read them as `None`.
//! - `configuration` is probed for presence only, never consumed.
//! - The fallback `GenerateAssemblyInfo=false` is emitted only when no other
//!   directive could be produced.
//!
//! # See also
//! - docs/architecture/pipeline.md

use crate::fs::DirectoryProbe;
use crate::model::assembly_attributes::AssemblyAttributes;
use crate::model::package_configuration::PackageConfiguration;
use crate::model::project::{Project, PropertyDirective};
use crate::progress::ProgressSink;
use crate::transform::{Transform, TransformError, TransformResult};
use log::info;
use std::path::Path;

/// Migrates legacy assembly attributes into descriptor properties.
pub struct AssemblyAttributeTransform<P: DirectoryProbe> {
    probe: P,
}

impl<P: DirectoryProbe> AssemblyAttributeTransform<P> {
    /// Creates the stage with the host-supplied directory probe.
    pub fn new(probe: P) -> Self {
        Self { probe }
    }
}

impl<P: DirectoryProbe> Transform for AssemblyAttributeTransform<P> {
    fn name(&self) -> &'static str {
        "assembly_attributes"
    }

    /// Emits attribute directives and schedules redundant-file deletions.
    ///
    /// # Contract
    /// - Absent `assembly_attributes`: no-op.
    /// - Directive order is title/company/product/description/copyright
    ///   (plus the configuration guard) followed by the versioning group.
    /// - Re-invocation on already-consumed attributes appends only the
    ///   fallback directive; callers invoke at most once per project.
    fn transform(
        &self,
        project: &mut Project,
        progress: &dyn ProgressSink,
    ) -> TransformResult<()> {
        let Project {
            assembly_attributes,
            package_configuration,
            attribute_properties,
            deletions,
        } = project;
        let Some(attributes) = assembly_attributes.as_mut() else {
            return Ok(());
        };

        progress.report("Moving attributes from AssemblyInfo to project file");

        let package = package_configuration.as_ref();
        let mut directives = other_directives(attributes, package, progress);
        directives.append(&mut versioning_directives(attributes, package, progress));

        if directives.is_empty() {
            // Assume the assembly info comes from another file we have no
            // sight of; leave it to the consumer and keep generation of a
            // replacement disabled.
            directives.push(PropertyDirective::new("GenerateAssemblyInfo", "false"));
        }

        info!(
            "event=attribute_migration module=transform status=ok directives={}",
            directives.len()
        );
        attribute_properties.extend(directives);

        if let Some(file) = attributes.file.clone() {
            if attributes.file_contents.is_pointless() {
                deletions.push(file.clone());

                if let Some(dir) = containing_directory(&file) {
                    let entries = self.probe.entry_count(dir).map_err(|source| {
                        TransformError::DirectoryEnumeration {
                            dir: dir.to_path_buf(),
                            source,
                        }
                    })?;
                    // The attribute file itself still counts as one entry.
                    if entries <= 1 {
                        deletions.push(dir.to_path_buf());
                    }
                }
            }
        }

        Ok(())
    }
}

fn other_directives(
    attributes: &mut AssemblyAttributes,
    package: Option<&PackageConfiguration>,
    progress: &dyn ProgressSink,
) -> Vec<PropertyDirective> {
    let title = attributes.title.take();
    let company = attributes.company.take();
    let product = attributes.product.take();
    let description = attributes.description.take();
    let copyright = attributes.copyright.take();

    let mut directives = Vec::new();
    directives.extend(plain_directive("AssemblyTitle", title.as_deref()));
    directives.extend(plain_directive("Company", company.as_deref()));
    directives.extend(plain_directive("Product", product.as_deref()));
    directives.extend(reconciled_directive(
        "Description",
        description.as_deref(),
        package.and_then(|config| config.description.as_deref()),
        progress,
    ));
    directives.extend(reconciled_directive(
        "Copyright",
        copyright.as_deref(),
        package.and_then(|config| config.copyright.as_deref()),
        progress,
    ));

    if attributes.configuration.is_some() {
        // Configuration attributes are usually driven by preprocessor flags
        // we cannot translate; the declaration stays in the attribute file
        // and generation of a conflicting one is disabled.
        directives.push(PropertyDirective::new(
            "GenerateAssemblyConfigurationAttribute",
            "false",
        ));
    }

    directives
}

fn versioning_directives(
    attributes: &mut AssemblyAttributes,
    package: Option<&PackageConfiguration>,
    progress: &dyn ProgressSink,
) -> Vec<PropertyDirective> {
    let informational_version = attributes.informational_version.take();
    let version = attributes.version.take();
    let file_version = attributes.file_version.take();

    let mut directives = Vec::new();
    directives.extend(reconciled_directive(
        "Version",
        informational_version.as_deref(),
        package.and_then(|config| config.version.as_deref()),
        progress,
    ));
    directives.extend(plain_directive("AssemblyVersion", version.as_deref()));
    // The legacy runtime fell back on the assembly version for the file
    // version; the new format does not, so the value is copied explicitly.
    directives.extend(
        plain_directive("FileVersion", file_version.as_deref())
            .or_else(|| plain_directive("FileVersion", version.as_deref())),
    );

    directives
}

/// Applies package-over-legacy precedence for one overridable property.
fn reconciled_directive(
    name: &str,
    legacy: Option<&str>,
    package: Option<&str>,
    progress: &dyn ProgressSink,
) -> Option<PropertyDirective> {
    match package {
        Some(package_value) if legacy != Some(package_value) => {
            if let Some(legacy_value) = legacy {
                progress.report(&format!(
                    "Taking package {name} value {package_value} over AssemblyInfo value {legacy_value}"
                ));
            }
            Some(PropertyDirective::new(name, package_value))
        }
        Some(package_value) => Some(PropertyDirective::new(name, package_value)),
        None => legacy.map(|value| PropertyDirective::new(name, value)),
    }
}

fn plain_directive(name: &str, value: Option<&str>) -> Option<PropertyDirective> {
    value.map(|value| PropertyDirective::new(name, value))
}

fn containing_directory(file: &Path) -> Option<&Path> {
    file.parent().filter(|dir| !dir.as_os_str().is_empty())
}
