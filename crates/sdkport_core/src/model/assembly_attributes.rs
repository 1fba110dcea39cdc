//! Legacy assembly attribute source model.
//!
//! # Responsibility
//! - Hold parsed `AssemblyInfo` scalar values and the backing file reference.
//! - Signal consumption: migrated fields are moved out and read back as
//!   `None` by every later pipeline stage.
//!
//! # Invariants
//! - A scalar field consumed by migration stays `None` for the rest of the
//!   pipeline run.
//! - `configuration` is probed for presence only; migration never moves it
//!   out.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Structured summary of the attribute file's remaining contents.
///
/// Produced by the upstream source parser. Only consulted to decide whether
/// the file still carries meaning once its scalar attributes are migrated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFileContents {
    /// Remaining type and member declarations.
    pub members: Vec<String>,
    /// Remaining attribute declarations.
    pub attribute_lists: Vec<String>,
}

impl SourceFileContents {
    /// Returns whether the file is empty of meaning and safe to delete.
    pub fn is_pointless(&self) -> bool {
        self.members.is_empty() && self.attribute_lists.is_empty()
    }
}

/// Parsed legacy per-assembly metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyAttributes {
    pub title: Option<String>,
    pub company: Option<String>,
    pub product: Option<String>,
    pub description: Option<String>,
    pub copyright: Option<String>,
    pub version: Option<String>,
    pub file_version: Option<String>,
    pub informational_version: Option<String>,
    /// Build configuration marker, usually preprocessor-driven.
    pub configuration: Option<String>,
    /// Backing source file. Absent when the attributes were synthesized
    /// without a discoverable file.
    pub file: Option<PathBuf>,
    /// What is left in the file besides the parsed scalar attributes.
    pub file_contents: SourceFileContents,
}
