//! One end-to-end run: scan, confirm once, burn, then the post-cleanup action.

use crate::cleaner::{delete_files, CleanResult};
use crate::command::CommandRunner;
use crate::config::{CleanOptions, Environment};
use crate::error::Result;
use crate::platform::{CleanupPlan, Platform};
use crate::prompt::confirm_deletion;
use crate::scanner::{find_stale_files, Candidate};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

/// What a run did
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub platform: Platform,
    pub candidates: usize,
    pub confirmed: bool,
    pub result: CleanResult,
    /// `None` when the post-cleanup action did not run.
    pub post_cleanup_succeeded: Option<bool>,
}

impl RunSummary {
    fn new(platform: Platform) -> Self {
        Self {
            platform,
            candidates: 0,
            confirmed: false,
            result: CleanResult::default(),
            post_cleanup_succeeded: None,
        }
    }
}

/// Detect-and-dispatch entry point.
///
/// An unsupported platform is reported and nothing else happens.
pub fn run<R, W>(
    platform: &Platform,
    env: &Environment,
    options: &CleanOptions,
    runner: Box<dyn CommandRunner>,
    input: R,
    mut out: W,
) -> Result<RunSummary>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Detected OS: {}", platform)?;

    match platform.plan(env, runner) {
        Some(plan) => execute(&plan, options, input, out),
        None => {
            writeln!(
                out,
                "Unsupported OS. Molotov currently supports Windows, Linux, and macOS."
            )?;
            Ok(RunSummary::new(platform.clone()))
        }
    }
}

/// Carry out a resolved plan
pub fn execute<R, W>(
    plan: &CleanupPlan,
    options: &CleanOptions,
    input: R,
    mut out: W,
) -> Result<RunSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = RunSummary::new(plan.platform.clone());

    let candidates: Vec<Candidate> = plan
        .targets
        .iter()
        .flat_map(|target| find_stale_files(target, options.threshold))
        .collect();
    summary.candidates = candidates.len();
    info!(
        "{} files older than {} days across {} directories",
        candidates.len(),
        options.threshold_days(),
        plan.targets.len()
    );

    if options.dry_run {
        for candidate in &candidates {
            writeln!(out, "[DRY RUN] Would burn {}", candidate.path.display())?;
        }
        if !options.skip_post_cleanup {
            writeln!(out, "[DRY RUN] Would run: {}", plan.post_cleanup.description())?;
        }
        return Ok(summary);
    }

    summary.confirmed = confirm_deletion(&candidates, input, &mut out)?;
    if summary.confirmed {
        let paths: Vec<&Path> = candidates.iter().map(|c| c.path.as_path()).collect();
        summary.result = delete_files(&paths, &mut out)?;
        writeln!(out, "{}", summary.result.display_status())?;
    }

    if !options.skip_post_cleanup {
        let post_cleanup = &plan.post_cleanup;
        writeln!(out, "🧹 {}...", post_cleanup.description())?;
        match post_cleanup.run(&mut out) {
            Ok(()) => {
                writeln!(out, "🔥 {} burned successfully!", post_cleanup.name())?;
                summary.post_cleanup_succeeded = Some(true);
            }
            Err(e) => {
                warn!("{} failed: {}", post_cleanup.name(), e);
                writeln!(out, "❌ Failed to burn {}: {}", post_cleanup.name(), e)?;
                summary.post_cleanup_succeeded = Some(false);
            }
        }
    }

    Ok(summary)
}
