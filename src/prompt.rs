use crate::error::Result;
use crate::scanner::Candidate;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Whether an operator answer means "go ahead". Only `y`, in either case.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Show the candidates and ask once whether to delete them.
///
/// Returns `false` without reading `input` when there is nothing to delete.
/// Any answer other than `y`, including end of input, declines.
pub fn confirm_deletion<R, W>(candidates: &[Candidate], mut input: R, mut out: W) -> Result<bool>
where
    R: BufRead,
    W: Write,
{
    if candidates.is_empty() {
        writeln!(out, "No old files found to delete.")?;
        return Ok(false);
    }

    for candidate in candidates {
        writeln!(out, "  {}", candidate.path.display())?;
    }
    writeln!(
        out,
        "Found {} files to delete. Proceed with deletion? (y/n):",
        candidates.len()
    )?;
    out.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    debug!("Operator answered {:?}", answer.trim());

    if is_affirmative(&answer) {
        info!("Deletion confirmed for {} files", candidates.len());
        Ok(true)
    } else {
        writeln!(out, "Deletion canceled.")?;
        info!("Deletion canceled by operator");
        Ok(false)
    }
}
