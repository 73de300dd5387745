//! Host detection and the per-platform cleanup plan.

pub mod linux;
pub mod macos;
pub mod windows;

pub use linux::PackagePurge;
pub use macos::TrashEmptier;
pub use windows::RecycleBin;

use crate::command::CommandRunner;
use crate::config::Environment;
use crate::error::Result;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};

/// The host operating system, as far as cleanup is concerned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    Unsupported(String),
}

impl Platform {
    /// Detect the platform this binary runs on
    pub fn detect() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an OS name (`std::env::consts::OS` style, or `Darwin`) to a platform
    pub fn from_os_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "windows" => Platform::Windows,
            "linux" => Platform::Linux,
            "macos" | "darwin" => Platform::MacOs,
            _ => Platform::Unsupported(name.to_string()),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Platform::Unsupported(_))
    }

    /// Build the target directories and post-cleanup action for this platform.
    ///
    /// Returns `None` for an unsupported platform. `runner` is only used by
    /// the Linux package purge.
    pub fn plan(&self, env: &Environment, runner: Box<dyn CommandRunner>) -> Option<CleanupPlan> {
        let (targets, post_cleanup): (Vec<PathBuf>, Box<dyn PostCleanup>) = match self {
            Platform::Windows => (
                vec![env.temp_dir.clone(), env.prefetch_dir()],
                Box::new(RecycleBin),
            ),
            Platform::Linux => (unix_targets(env), Box::new(PackagePurge::new(runner))),
            Platform::MacOs => (unix_targets(env), Box::new(TrashEmptier::new(env.trash_dir()))),
            Platform::Unsupported(name) => {
                warn!("No cleanup plan for unsupported OS: {}", name);
                return None;
            }
        };

        debug!("Cleanup targets for {}: {:?}", self, targets);

        Some(CleanupPlan {
            platform: self.clone(),
            targets,
            post_cleanup,
        })
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "Windows"),
            Platform::Linux => write!(f, "Linux"),
            Platform::MacOs => write!(f, "macOS"),
            Platform::Unsupported(name) => write!(f, "{}", name),
        }
    }
}

fn unix_targets(env: &Environment) -> Vec<PathBuf> {
    let mut targets = vec![env.shared_tmp.clone()];
    match env.cache_dir() {
        Some(cache) => targets.push(cache),
        None => warn!("Home directory not found, skipping the user cache"),
    }
    targets
}

/// An OS-native action run after stale files are burned
pub trait PostCleanup {
    /// Short name for status lines, e.g. `Recycle Bin`
    fn name(&self) -> &str;

    /// What is about to happen, e.g. `Emptying Recycle Bin`
    fn description(&self) -> &str;

    fn run(&self, out: &mut dyn Write) -> Result<()>;
}

/// Everything a run needs once the platform is known
pub struct CleanupPlan {
    pub platform: Platform,
    pub targets: Vec<PathBuf>,
    pub post_cleanup: Box<dyn PostCleanup>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandStatus;
    use std::path::Path;

    struct NeverRun;

    impl CommandRunner for NeverRun {
        fn run(&self, program: &str, _args: &[&str]) -> Result<CommandStatus> {
            panic!("{} must not run while planning", program);
        }
    }

    fn env() -> Environment {
        Environment {
            temp_dir: PathBuf::from("C:\\Users\\me\\AppData\\Local\\Temp"),
            install_root: PathBuf::from("C:\\Windows"),
            shared_tmp: PathBuf::from("/tmp"),
            home_dir: Some(PathBuf::from("/home/me")),
        }
    }

    #[test]
    fn test_from_os_name() {
        assert_eq!(Platform::from_os_name("windows"), Platform::Windows);
        assert_eq!(Platform::from_os_name("Linux"), Platform::Linux);
        assert_eq!(Platform::from_os_name("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os_name("Darwin"), Platform::MacOs);
        assert_eq!(
            Platform::from_os_name("plan9"),
            Platform::Unsupported("plan9".to_string())
        );
        assert!(!Platform::from_os_name("").is_supported());
    }

    #[test]
    fn test_windows_plan() {
        let plan = Platform::Windows.plan(&env(), Box::new(NeverRun)).unwrap();

        assert_eq!(
            plan.targets,
            vec![
                PathBuf::from("C:\\Users\\me\\AppData\\Local\\Temp"),
                PathBuf::from("C:\\Windows").join("Prefetch"),
            ]
        );
        assert_eq!(plan.post_cleanup.name(), "Recycle Bin");
    }

    #[test]
    fn test_unix_plans() {
        for platform in [Platform::Linux, Platform::MacOs] {
            let plan = platform.plan(&env(), Box::new(NeverRun)).unwrap();
            assert_eq!(
                plan.targets,
                vec![PathBuf::from("/tmp"), Path::new("/home/me").join(".cache")]
            );
            assert_eq!(plan.platform, platform);
        }

        let linux = Platform::Linux.plan(&env(), Box::new(NeverRun)).unwrap();
        assert_eq!(linux.post_cleanup.name(), "Old packages");
        let macos = Platform::MacOs.plan(&env(), Box::new(NeverRun)).unwrap();
        assert_eq!(macos.post_cleanup.name(), "Trash");
    }

    #[test]
    fn test_homeless_unix_plan_keeps_tmp() {
        let env = Environment { home_dir: None, ..env() };
        let plan = Platform::Linux.plan(&env, Box::new(NeverRun)).unwrap();

        assert_eq!(plan.targets, vec![PathBuf::from("/tmp")]);
    }

    #[test]
    fn test_unsupported_has_no_plan() {
        let plan = Platform::Unsupported("haiku".to_string()).plan(&env(), Box::new(NeverRun));
        assert!(plan.is_none());
    }
}
