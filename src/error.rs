use std::io;
use thiserror::Error;

/// Custom error types for molotov
#[derive(Error, Debug)]
pub enum CleanError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Platform not supported: {0}")]
    NotSupported(String),

    #[error("Windows API error: {0}")]
    WindowsError(String),

    #[error("command `{command}` failed: {reason}")]
    Command { command: String, reason: String },

    #[error("{failed} item(s) could not be removed")]
    PartialFailure { failed: usize },
}

/// Result type alias for cleaner error handling
pub type Result<T> = std::result::Result<T, CleanError>;
