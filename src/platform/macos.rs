use super::PostCleanup;
use crate::error::{CleanError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Empties the user's Trash by removing each entry directly
#[derive(Debug, Clone)]
pub struct TrashEmptier {
    trash_dir: Option<PathBuf>,
}

impl TrashEmptier {
    pub fn new(trash_dir: Option<PathBuf>) -> Self {
        Self { trash_dir }
    }
}

fn remove_entry(path: &Path) -> io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

impl PostCleanup for TrashEmptier {
    fn name(&self) -> &str {
        "Trash"
    }

    fn description(&self) -> &str {
        "Emptying Trash"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let trash_dir = self.trash_dir.as_deref().ok_or_else(|| {
            CleanError::NotSupported(
                "home directory not found, cannot locate the Trash".to_string(),
            )
        })?;

        if !trash_dir.exists() {
            info!("Trash directory does not exist: {}", trash_dir.display());
            writeln!(out, "Trash is already empty.")?;
            return Ok(());
        }

        let mut failed = 0;
        for entry in fs::read_dir(trash_dir)? {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    error!("Failed to read Trash entry: {}", e);
                    failed += 1;
                    continue;
                }
            };

            match remove_entry(&path) {
                Ok(()) => debug!("Removed from Trash: {}", path.display()),
                Err(e) => {
                    error!("Failed to remove {}: {}", path.display(), e);
                    writeln!(out, "❌ Failed to burn {}: {}", path.display(), e)?;
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            Err(CleanError::PartialFailure { failed })
        } else {
            Ok(())
        }
    }
}
