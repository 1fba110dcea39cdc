//! Package manifest metadata used as an override source.

use serde::{Deserialize, Serialize};

/// Manifest-derived metadata that can supersede legacy attribute values.
///
/// Read-only from the migration's perspective; upstream parsing owns its
/// lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageConfiguration {
    pub description: Option<String>,
    pub copyright: Option<String>,
    pub version: Option<String>,
}
