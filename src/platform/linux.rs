use super::PostCleanup;
use crate::command::CommandRunner;
use crate::error::{CleanError, Result};
use std::io::Write;
use tracing::{info, warn};

/// apt maintenance operations, in the order they run
const APT_OPERATIONS: [&str; 2] = ["autoremove", "autoclean"];

/// Purges unused packages and cached archives with `apt-get`, via `sudo`
pub struct PackagePurge {
    runner: Box<dyn CommandRunner>,
}

impl PackagePurge {
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

impl PostCleanup for PackagePurge {
    fn name(&self) -> &str {
        "Old packages"
    }

    fn description(&self) -> &str {
        "Burning old packages with apt"
    }

    /// Runs every operation even if an earlier one fails; the first failure
    /// is returned once all have run.
    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut first_failure = None;

        for operation in APT_OPERATIONS {
            let args = ["apt-get", operation, "-y"];
            let command = format!("sudo {}", args.join(" "));
            info!("Running {}", command);

            match self.runner.run("sudo", &args) {
                Ok(status) => {
                    writeln!(out, "{} finished with {}", command, status)?;
                    if !status.success {
                        warn!("{} failed with {}", command, status);
                        first_failure.get_or_insert(CleanError::Command {
                            command,
                            reason: status.to_string(),
                        });
                    }
                }
                Err(e) => {
                    warn!("{}", e);
                    writeln!(out, "❌ {}", e)?;
                    first_failure.get_or_insert(e);
                }
            }
        }

        match first_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
