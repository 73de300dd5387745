//! Run options and the OS paths the platform dispatcher works from.
//!
//! Nothing here reads the environment except [`Environment::from_env`], so
//! tests can build an [`Environment`] pointing at scratch directories.

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Default age threshold: files untouched for a year are stale.
pub const DEFAULT_THRESHOLD_DAYS: u64 = 365;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Options for a single cleanup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOptions {
    /// Files whose last access is older than this are candidates.
    pub threshold: Duration,
    /// Report what would be burned without touching anything.
    pub dry_run: bool,
    /// Skip the recycle bin / trash / package purge step.
    pub skip_post_cleanup: bool,
}

impl CleanOptions {
    pub fn with_days(days: u64) -> Self {
        Self {
            threshold: Duration::from_secs(days.saturating_mul(SECS_PER_DAY)),
            ..Self::default()
        }
    }

    pub fn threshold_days(&self) -> u64 {
        self.threshold.as_secs() / SECS_PER_DAY
    }
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            threshold: Duration::from_secs(DEFAULT_THRESHOLD_DAYS * SECS_PER_DAY),
            dry_run: false,
            skip_post_cleanup: false,
        }
    }
}

/// Host paths used to build the cleanup target set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Windows user temp directory (`%TEMP%`).
    pub temp_dir: PathBuf,
    /// Windows install root (`%WINDIR%`), parent of `Prefetch`.
    pub install_root: PathBuf,
    /// Shared Unix temp directory, `/tmp`.
    pub shared_tmp: PathBuf,
    pub home_dir: Option<PathBuf>,
}

impl Environment {
    /// Resolve paths from the process environment.
    pub fn from_env() -> Self {
        let temp_dir = env::var_os("TEMP")
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir);
        let install_root = env::var_os("WINDIR")
            .or_else(|| env::var_os("SystemRoot"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("C:\\Windows"));

        let environment = Self {
            temp_dir,
            install_root,
            shared_tmp: PathBuf::from("/tmp"),
            home_dir: dirs::home_dir(),
        };
        debug!("Resolved environment: {:?}", environment);
        environment
    }

    pub fn prefetch_dir(&self) -> PathBuf {
        self.install_root.join("Prefetch")
    }

    /// `~/.cache`, on both Linux and macOS.
    pub fn cache_dir(&self) -> Option<PathBuf> {
        self.home_dir.as_ref().map(|home| home.join(".cache"))
    }

    /// `~/.Trash` (macOS).
    pub fn trash_dir(&self) -> Option<PathBuf> {
        self.home_dir.as_ref().map(|home| home.join(".Trash"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_is_a_year() {
        let options = CleanOptions::default();
        assert_eq!(options.threshold_days(), 365);
        assert!(!options.dry_run);
        assert!(!options.skip_post_cleanup);
    }

    #[test]
    fn test_with_days() {
        let options = CleanOptions::with_days(30);
        assert_eq!(options.threshold, Duration::from_secs(30 * 86_400));
        assert_eq!(options.threshold_days(), 30);
    }

    #[test]
    fn test_home_relative_dirs() {
        let env = Environment {
            temp_dir: PathBuf::from("temp"),
            install_root: PathBuf::from("win"),
            shared_tmp: PathBuf::from("/tmp"),
            home_dir: Some(PathBuf::from("/home/alice")),
        };
        assert_eq!(env.prefetch_dir(), PathBuf::from("win").join("Prefetch"));
        assert_eq!(env.cache_dir(), Some(PathBuf::from("/home/alice/.cache")));
        assert_eq!(env.trash_dir(), Some(PathBuf::from("/home/alice/.Trash")));

        let homeless = Environment { home_dir: None, ..env };
        assert_eq!(homeless.cache_dir(), None);
        assert_eq!(homeless.trash_dir(), None);
    }
}
