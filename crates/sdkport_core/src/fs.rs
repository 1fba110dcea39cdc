//! Filesystem probing capability for migration stages.
//!
//! # Responsibility
//! - Define the directory-enumeration contract consumed by stages.
//! - Provide the production implementation over `std::fs`.
//!
//! # Invariants
//! - Probes observe directory state; they never create, modify or delete
//!   entries.

use std::io;
use std::path::Path;

/// Directory-enumeration capability supplied by the host environment.
pub trait DirectoryProbe {
    /// Counts files and subdirectories directly inside `dir`.
    ///
    /// # Errors
    /// - Propagates the underlying I/O error when `dir` cannot be read.
    fn entry_count(&self, dir: &Path) -> io::Result<usize>;
}

/// Production probe backed by `std::fs::read_dir`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsDirectoryProbe;

impl DirectoryProbe for OsDirectoryProbe {
    fn entry_count(&self, dir: &Path) -> io::Result<usize> {
        let mut count = 0;
        for entry in std::fs::read_dir(dir)? {
            entry?;
            count += 1;
        }
        Ok(count)
    }
}
