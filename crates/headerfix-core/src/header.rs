// Rust guideline compliant 2026-02-06

//! Header checking and repair on in-memory file lines.
//!
//! The header is two lines: a comment naming the file's repository-relative
//! path, then a blank line. Only positions 0 and 1 are ever touched.

use std::fmt;

/// Ordered lines of a text file, each keeping its own terminator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileLines {
    lines: Vec<String>,
}

impl FileLines {
    /// Splits file content into lines, keeping `\n` / `\r\n` terminators.
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// Builds lines from already-split strings.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the file has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joins the lines back into file content.
    pub fn to_content(&self) -> String {
        self.lines.concat()
    }

    /// Line terminator used for inserted lines: follows the first line.
    fn line_ending(&self) -> &'static str {
        match self.lines.first() {
            Some(first) if first.ends_with("\r\n") => "\r\n",
            _ => "\n",
        }
    }
}

/// A single repair applied to a file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderFix {
    /// File was empty; header and blank line written.
    AddedToEmptyFile,
    /// First line was not a comment; header and blank line prepended.
    AddedMissingHeader,
    /// First line was a comment naming the wrong path.
    FixedPath {
        /// Previous first line, trimmed.
        was: String,
        /// Replacement header line.
        now: String,
    },
    /// Header was the only line; blank line appended.
    AddedMissingBlankLine,
    /// Second line had content; blank line inserted before it.
    AddedBlankLine,
}

impl fmt::Display for HeaderFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderFix::AddedToEmptyFile => f.write_str("Added header to empty file"),
            HeaderFix::AddedMissingHeader => f.write_str("Added missing header comment"),
            HeaderFix::FixedPath { .. } => f.write_str("Fixed header path"),
            HeaderFix::AddedMissingBlankLine => {
                f.write_str("Added missing blank line after header")
            }
            HeaderFix::AddedBlankLine => f.write_str("Added blank line after header"),
        }
    }
}

fn terminator(line: &str) -> &'static str {
    if line.ends_with("\r\n") {
        "\r\n"
    } else if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

/// Checks the header of `lines` against `expected` and repairs it in place.
///
/// # Arguments
///
/// * `lines` - File content to repair
/// * `expected` - Header line without terminator, e.g. `// src/bot.js`
/// * `comment_prefix` - Marker identifying an existing header comment
///
/// # Returns
///
/// The repairs applied, in order. Empty means the header was already valid.
pub fn apply_header(lines: &mut FileLines, expected: &str, comment_prefix: &str) -> Vec<HeaderFix> {
    let eol = lines.line_ending();
    let mut fixes = Vec::new();

    if lines.is_empty() {
        lines.lines = vec![format!("{expected}{eol}"), eol.to_string()];
        fixes.push(HeaderFix::AddedToEmptyFile);
        return fixes;
    }

    let first = lines.lines[0].trim_end().to_string();
    if !first.starts_with(comment_prefix) {
        lines.lines.insert(0, format!("{expected}{eol}"));
        lines.lines.insert(1, eol.to_string());
        fixes.push(HeaderFix::AddedMissingHeader);
    } else if first != expected {
        let kept = terminator(&lines.lines[0]);
        lines.lines[0] = format!("{expected}{kept}");
        fixes.push(HeaderFix::FixedPath {
            was: first,
            now: expected.to_string(),
        });
    }

    if lines.len() < 2 {
        // Header is the last line; it may lack a terminator.
        if terminator(&lines.lines[0]).is_empty() {
            lines.lines[0].push_str(eol);
        }
        lines.lines.push(eol.to_string());
        fixes.push(HeaderFix::AddedMissingBlankLine);
    } else if !lines.lines[1].trim_end().is_empty() {
        lines.lines.insert(1, eol.to_string());
        fixes.push(HeaderFix::AddedBlankLine);
    }

    fixes
}
