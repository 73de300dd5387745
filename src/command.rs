//! Narrow seam for running external maintenance commands.

use crate::error::{CleanError, Result};
use std::fmt;
use std::process::{Command, Stdio};
use tracing::debug;

/// Exit status of a finished command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandStatus {
    pub fn exited(code: i32) -> Self {
        Self {
            success: code == 0,
            code: Some(code),
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Runs a program to completion
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandStatus>;
}

/// Spawns real processes with the caller's stdio, so their output passes
/// straight through to the operator.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandStatus> {
        debug!("Running {} {}", program, args.join(" "));

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| CleanError::Command {
                command: format!("{} {}", program, args.join(" ")),
                reason: e.to_string(),
            })?;

        Ok(CommandStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}
