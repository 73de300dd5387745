//! Molotov - burns stale temp and cache files
//!
//! This library finds files left untouched past an age threshold in the
//! host's temp and cache directories, deletes them once the operator agrees,
//! and then empties the platform's trash or package cache.

pub mod cleaner;
pub mod command;
pub mod config;
pub mod error;
pub mod platform;
pub mod prompt;
pub mod scanner;
pub mod workflow;

pub use cleaner::{delete_file, delete_files, CleanResult, DeletionOutcome};
pub use command::{CommandRunner, CommandStatus, SystemCommandRunner};
pub use config::{CleanOptions, Environment, DEFAULT_THRESHOLD_DAYS};
pub use error::{CleanError, Result};
pub use platform::{CleanupPlan, Platform, PostCleanup};
pub use prompt::confirm_deletion;
pub use scanner::{find_stale_files, find_stale_files_at, Candidate};
pub use workflow::{execute, run, RunSummary};
