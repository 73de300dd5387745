use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// A file selected for deletion, with its last-access time when scanned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub accessed: SystemTime,
}

/// Whether a file last accessed at `accessed` is older than `threshold` at `now`.
///
/// The comparison is strict: a file exactly `threshold` old is kept. Access
/// times in the future are never stale.
pub fn is_stale(accessed: SystemTime, now: SystemTime, threshold: Duration) -> bool {
    match now.duration_since(accessed) {
        Ok(age) => age > threshold,
        Err(_) => false,
    }
}

/// Last-access time of `path`, or `None` with a warning if it cannot be read.
///
/// Links are not followed, so a file that vanished since it was listed shows
/// up here as `NotFound`.
fn access_time(path: &Path) -> Option<SystemTime> {
    match fs::symlink_metadata(path).and_then(|m| m.accessed()) {
        Ok(accessed) => Some(accessed),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("{} was not found or has been deleted", path.display());
            None
        }
        Err(e) => {
            warn!("Could not read access time of {}: {}", path.display(), e);
            None
        }
    }
}

/// Find regular files under `root` not accessed within `threshold`
pub fn find_stale_files(root: &Path, threshold: Duration) -> Vec<Candidate> {
    find_stale_files_at(root, threshold, SystemTime::now())
}

/// Same as [`find_stale_files`], measured against a fixed `now`.
///
/// A missing root yields no candidates. Entries that vanish or cannot be
/// read mid-walk are logged and skipped.
pub fn find_stale_files_at(root: &Path, threshold: Duration, now: SystemTime) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    if !root.is_dir() {
        debug!("Skipping missing directory: {}", root.display());
        return candidates;
    }

    info!("Scanning {}", root.display());

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(accessed) = access_time(entry.path()) else {
            continue;
        };

        if is_stale(accessed, now, threshold) {
            debug!("Stale: {}", entry.path().display());
            candidates.push(Candidate {
                path: entry.into_path(),
                accessed,
            });
        }
    }

    info!("Found {} stale files in {}", candidates.len(), root.display());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: Duration = Duration::from_secs(86_400);

    #[test]
    fn test_exact_threshold_is_not_stale() {
        let now = SystemTime::now();
        let threshold = DAY * 365;

        assert!(!is_stale(now - threshold, now, threshold));
        assert!(is_stale(now - threshold - Duration::from_secs(1), now, threshold));
        assert!(!is_stale(now - threshold + Duration::from_secs(1), now, threshold));
    }

    #[test]
    fn test_future_access_time_is_not_stale() {
        let now = SystemTime::now();
        assert!(!is_stale(now + DAY, now, Duration::ZERO));
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");

        assert!(find_stale_files(&missing, Duration::ZERO).is_empty());
    }

    #[test]
    fn test_vanished_file_has_no_access_time() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let file = temp_dir.path().join("gone.tmp");
        fs::write(&file, b"x").unwrap();
        assert!(access_time(&file).is_some());

        fs::remove_file(&file).unwrap();
        assert_eq!(access_time(&file), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdirectory_does_not_stop_walk() {
        use std::fs::{File, FileTimes};
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let readable = temp_dir.path().join("old.tmp");
        fs::write(&readable, b"x").unwrap();
        File::options()
            .write(true)
            .open(&readable)
            .unwrap()
            .set_times(FileTimes::new().set_accessed(SystemTime::now() - DAY * 400))
            .unwrap();

        let locked = temp_dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("inside.tmp"), b"y").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let candidates = find_stale_files(temp_dir.path(), DAY * 365);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(candidates.iter().any(|c| c.path == readable));
    }

    #[test]
    fn test_file_root_yields_nothing() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, b"x").unwrap();

        assert!(find_stale_files(&file, Duration::ZERO).is_empty());
    }
}
