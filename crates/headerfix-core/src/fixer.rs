// Rust guideline compliant 2026-02-06

//! Per-file read-check-write cycle.

use crate::header::{apply_header, FileLines, HeaderFix};
use crate::path::HeaderPath;
use crate::{Config, Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result of processing one file.
#[derive(Debug)]
pub enum Outcome {
    /// Path lies in an excluded directory and was not opened.
    Skipped,
    /// Header was already valid.
    Unchanged,
    /// Header was repaired and the rewrite persisted.
    Fixed(Vec<HeaderFix>),
    /// File could not be read; its header state is unknown.
    ReadError(Error),
    /// Repairs were computed but the rewrite did not persist.
    WriteError {
        /// Repairs that were not written.
        fixes: Vec<HeaderFix>,
        /// Underlying failure.
        error: Error,
    },
}

impl Outcome {
    /// Returns true if the file was modified on disk.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Outcome::Fixed(_))
    }

    /// Returns true if the file's header could not be verified or repaired.
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::ReadError(_) | Outcome::WriteError { .. })
    }
}

/// Checks and repairs file headers under a repository root.
#[derive(Debug, Clone)]
pub struct HeaderFixer {
    root: PathBuf,
    comment_prefix: String,
    excluded_dirs: Vec<String>,
}

impl HeaderFixer {
    /// Creates a fixer resolving paths against `root`.
    pub fn new(root: impl Into<PathBuf>, config: &Config) -> Self {
        Self {
            root: root.into(),
            comment_prefix: config.comment_prefix.clone(),
            excluded_dirs: config.excluded_dirs.clone(),
        }
    }

    /// Processes one repository-relative path.
    ///
    /// Excluded paths are skipped without touching the filesystem. Otherwise
    /// the file is read, its header repaired in memory, and, if anything
    /// changed, rewritten atomically. [`Outcome::Fixed`] is only returned
    /// once the rewrite has been persisted.
    pub fn process(&self, raw_path: &str) -> Outcome {
        let path = HeaderPath::new(raw_path);
        if path.is_excluded(&self.excluded_dirs) {
            tracing::debug!(path = %path, "skipping excluded path");
            return Outcome::Skipped;
        }

        let file_path = self.root.join(raw_path);
        let mut lines = match read_lines(&file_path) {
            Ok(lines) => lines,
            Err(error) => {
                tracing::warn!(path = %path, %error, "failed to read file");
                return Outcome::ReadError(error);
            }
        };

        let expected = path.expected_header(&self.comment_prefix);
        let fixes = apply_header(&mut lines, &expected, &self.comment_prefix);
        if fixes.is_empty() {
            tracing::debug!(path = %path, "header already valid");
            return Outcome::Unchanged;
        }

        match write_atomic(&file_path, &lines.to_content()) {
            Ok(()) => {
                tracing::info!(path = %path, fixes = fixes.len(), "rewrote header");
                Outcome::Fixed(fixes)
            }
            Err(error) => {
                tracing::warn!(path = %path, %error, "failed to write file");
                Outcome::WriteError { fixes, error }
            }
        }
    }
}

fn read_lines(path: &Path) -> Result<FileLines> {
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8(bytes)?;
    Ok(FileLines::parse(&content))
}

/// Replaces `path` with `content` via a synced sibling temp file and rename.
///
/// Symlinks are resolved first so the link stays a link and its target is rewritten.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let path = std::fs::canonicalize(path)?;
    let path = path.as_path();
    let file_name = path
        .file_name()
        .ok_or_else(|| Error::Io(std::io::Error::other("path has no file name")))?;
    let temp_path = path.with_file_name(format!(".{}.headerfix.tmp", file_name.to_string_lossy()));
    let permissions = std::fs::metadata(path)?.permissions();

    let written = (|| -> Result<()> {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.set_permissions(permissions)?;
        file.sync_all()?;
        std::fs::rename(&temp_path, path)?;
        Ok(())
    })();

    if written.is_err() && temp_path.is_file() {
        let _ = std::fs::remove_file(&temp_path);
    }
    written
}
