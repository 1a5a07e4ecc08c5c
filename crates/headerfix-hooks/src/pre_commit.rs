// Rust guideline compliant 2026-02-06

//! Pre-commit hook implementation.
//!
//! Checks and repairs the path header of every staged file handed over by the
//! hook runner, one file at a time in argument order.

use crate::report::Reporter;
use anyhow::Result;
use headerfix_core::{Config, HeaderFixer, Outcome};
use std::path::Path;
use termcolor::WriteColor;

/// Aggregated outcomes of one hook run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files whose header was inspected.
    pub checked: usize,
    /// Files in excluded directories.
    pub skipped: usize,
    /// Files rewritten on disk.
    pub fixed: usize,
    /// Files that could not be read or rewritten.
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Skipped => self.skipped += 1,
            Outcome::Unchanged => self.checked += 1,
            Outcome::Fixed(_) => {
                self.checked += 1;
                self.fixed += 1;
            }
            Outcome::ReadError(_) | Outcome::WriteError { .. } => self.failed += 1,
        }
    }

    /// Returns true if no file needed or failed a fix.
    pub fn all_valid(&self) -> bool {
        self.fixed == 0 && self.failed == 0
    }

    /// Process exit code: 0 when every file was valid, 1 otherwise.
    ///
    /// A fixed file means the working tree changed and must be re-staged; an
    /// unreadable or unwritable file has an unverified header.
    pub fn exit_code(&self) -> u8 {
        if self.all_valid() {
            0
        } else {
            1
        }
    }
}

/// Runs the pre-commit hook.
///
/// # Arguments
///
/// * `repo_path` - Repository root the paths are relative to
/// * `files` - Candidate paths supplied by the hook runner
/// * `config` - Header and exclusion settings
/// * `reporter` - Destination for user-facing messages
///
/// # Returns
///
/// The aggregated outcome of all files.
///
/// # Errors
///
/// Returns an error only if writing to the reporter fails; per-file I/O
/// failures are recorded in the summary.
pub fn pre_commit_hook<W: WriteColor>(
    repo_path: &Path,
    files: &[String],
    config: &Config,
    reporter: &mut Reporter<W>,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    if files.is_empty() {
        reporter.no_files()?;
        return Ok(summary);
    }

    let fixer = HeaderFixer::new(repo_path, config);
    for file in files {
        let outcome = fixer.process(file);
        reporter.outcome(file, &outcome)?;
        summary.record(&outcome);
    }

    tracing::debug!(
        checked = summary.checked,
        skipped = summary.skipped,
        fixed = summary.fixed,
        failed = summary.failed,
        "pre-commit run complete"
    );
    reporter.summary(&summary)?;

    Ok(summary)
}
