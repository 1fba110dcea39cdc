//! Migration pipeline contracts and driver.
//!
//! # Responsibility
//! - Define the stage seam every migration transform implements.
//! - Run stages in order against the lent project aggregate.
//!
//! # Invariants
//! - Each stage borrows the aggregate mutably for one invocation only.
//! - The driver stops at the first failing stage; effects of completed
//!   stages are kept as-is, with no rollback.
//!
//! # See also
//! - docs/architecture/pipeline.md

use crate::model::project::Project;
use crate::progress::ProgressSink;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

pub mod assembly_attributes;

pub type TransformResult<T> = Result<T, TransformError>;

/// Failure raised by a migration stage.
#[derive(Debug)]
pub enum TransformError {
    /// Directory enumeration failed while deciding file redundancy.
    DirectoryEnumeration { dir: PathBuf, source: io::Error },
}

impl Display for TransformError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryEnumeration { dir, source } => write!(
                f,
                "failed to enumerate directory `{}`: {source}",
                dir.display()
            ),
        }
    }
}

impl Error for TransformError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DirectoryEnumeration { source, .. } => Some(source),
        }
    }
}

/// One migration stage over the project aggregate.
pub trait Transform {
    /// Stable stage identifier used in pipeline logs.
    fn name(&self) -> &'static str;

    /// Applies this stage's changes to `project`.
    ///
    /// # Errors
    /// - Returns collaborator failures unchanged; stages perform no local
    ///   recovery.
    fn transform(&self, project: &mut Project, progress: &dyn ProgressSink)
        -> TransformResult<()>;
}

/// Runs `transforms` in order, stopping at the first failure.
///
/// # Side effects
/// - Emits `transform` logging events with duration and status.
pub fn run_pipeline(
    project: &mut Project,
    transforms: &[&dyn Transform],
    progress: &dyn ProgressSink,
) -> TransformResult<()> {
    for stage in transforms {
        let started_at = Instant::now();
        info!(
            "event=transform module=pipeline status=start name={}",
            stage.name()
        );

        match stage.transform(project, progress) {
            Ok(()) => info!(
                "event=transform module=pipeline status=ok name={} duration_ms={}",
                stage.name(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => {
                error!(
                    "event=transform module=pipeline status=error name={} duration_ms={} error={}",
                    stage.name(),
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err);
            }
        }
    }

    Ok(())
}
