use crate::error::Result;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// What happened when removing one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    Removed,
    NotFound,
    PermissionDenied,
    Other(String),
}

impl DeletionOutcome {
    fn from_io_error(e: &io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => DeletionOutcome::NotFound,
            io::ErrorKind::PermissionDenied => DeletionOutcome::PermissionDenied,
            _ => DeletionOutcome::Other(e.to_string()),
        }
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, DeletionOutcome::Removed)
    }
}

impl fmt::Display for DeletionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeletionOutcome::Removed => write!(f, "removed"),
            DeletionOutcome::NotFound => write!(f, "file not found"),
            DeletionOutcome::PermissionDenied => write!(f, "permission denied"),
            DeletionOutcome::Other(cause) => write!(f, "{}", cause),
        }
    }
}

/// Remove a single file, classifying any failure
pub fn delete_file(path: &Path) -> DeletionOutcome {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Deleted file: {}", path.display());
            DeletionOutcome::Removed
        }
        Err(e) => {
            error!("Failed to delete file {}: {}", path.display(), e);
            DeletionOutcome::from_io_error(&e)
        }
    }
}

/// Remove every path in turn, reporting each attempt to `out`.
///
/// A failed removal is recorded and the batch moves on; nothing is rolled back.
pub fn delete_files<P, W>(paths: &[P], mut out: W) -> Result<CleanResult>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut result = CleanResult::default();

    for path in paths {
        let path = path.as_ref();
        let outcome = delete_file(path);
        match &outcome {
            DeletionOutcome::Removed => {
                writeln!(out, "🔥 Successfully burned {}", path.display())?
            }
            failure => writeln!(out, "❌ Failed to burn {}: {}", path.display(), failure)?,
        }
        result.outcomes.push((path.to_path_buf(), outcome));
    }

    info!("Burned {} files, {} failures", result.removed(), result.failed());

    Ok(result)
}

/// Result of a deletion batch
#[derive(Debug, Clone, Default)]
pub struct CleanResult {
    pub outcomes: Vec<(PathBuf, DeletionOutcome)>,
}

impl CleanResult {
    pub fn removed(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_removed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.removed()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.failed() > 0
    }

    pub fn outcome_of(&self, path: &Path) -> Option<&DeletionOutcome> {
        self.outcomes
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, outcome)| outcome)
    }

    pub fn display_status(&self) -> String {
        let mut status = vec![format!("Files burned: {}", self.removed())];

        if self.has_errors() {
            status.push(format!("Errors encountered: {}", self.failed()));
        }

        status.join("\n")
    }
}
