// Rust guideline compliant 2026-02-06

//! User-facing hook output.
//!
//! One line per repair or failure on stdout, with the icon colored when the
//! terminal supports it.

use crate::pre_commit::RunSummary;
use headerfix_core::{HeaderFix, Outcome};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Writes per-file results and the run summary.
pub struct Reporter<W: WriteColor> {
    out: W,
}

impl Reporter<StandardStream> {
    /// Creates a reporter on stdout.
    pub fn stdout() -> Self {
        let choice = if should_use_color() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> Reporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the reporter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Reports that the hook received no files.
    pub fn no_files(&mut self) -> io::Result<()> {
        writeln!(self.out, "No files to check")
    }

    /// Reports the outcome for one file. Unchanged and skipped files are silent.
    pub fn outcome(&mut self, path: &str, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Skipped | Outcome::Unchanged => Ok(()),
            Outcome::Fixed(fixes) => {
                for fix in fixes {
                    self.fix(path, fix)?;
                }
                Ok(())
            }
            Outcome::ReadError(error) => {
                self.status("❌", Color::Red, &format!("Error reading {}: {}", path, error))
            }
            Outcome::WriteError { error, .. } => {
                self.status("❌", Color::Red, &format!("Error writing {}: {}", path, error))
            }
        }
    }

    /// Reports the closing summary line, if any.
    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        if summary.fixed > 0 {
            writeln!(self.out)?;
            self.status(
                "✨",
                Color::Yellow,
                "Files were automatically fixed! Run git add to stage the changes.",
            )?;
        }
        if summary.failed > 0 {
            if summary.fixed == 0 {
                writeln!(self.out)?;
            }
            self.status(
                "❌",
                Color::Red,
                &format!(
                    "{} file(s) could not be checked or fixed.",
                    summary.failed
                ),
            )?;
        }
        Ok(())
    }

    fn fix(&mut self, path: &str, fix: &HeaderFix) -> io::Result<()> {
        self.status("✅", Color::Green, &format!("{}: {}", path, fix))?;
        if let HeaderFix::FixedPath { was, now } = fix {
            writeln!(self.out, "   Was: {}", was)?;
            writeln!(self.out, "   Now: {}", now)?;
        }
        Ok(())
    }

    fn status(&mut self, icon: &str, color: Color, message: &str) -> io::Result<()> {
        self.out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(self.out, "{}", icon)?;
        self.out.reset()?;
        writeln!(self.out, " {}", message)
    }
}
