// Rust guideline compliant 2026-02-06

//! Repository-relative paths as they appear in file headers.

use std::fmt;

/// A repository-relative path with forward-slash separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HeaderPath {
    normalized: String,
}

impl HeaderPath {
    /// Normalizes a raw path argument.
    ///
    /// Backslashes become forward slashes and leading `./` segments are dropped,
    /// so `.\src\bot.js` and `src/bot.js` name the same header.
    pub fn new(raw: &str) -> Self {
        let mut normalized = raw.replace('\\', "/");
        while let Some(rest) = normalized.strip_prefix("./") {
            normalized = rest.to_string();
        }
        Self { normalized }
    }

    /// Returns the normalized path.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Builds the header line (without terminator) for this path.
    pub fn expected_header(&self, comment_prefix: &str) -> String {
        format!("{} {}", comment_prefix, self.normalized)
    }

    /// Returns true if any directory segment of the path is excluded.
    ///
    /// Matching is per segment: `.git/config` is excluded by `.git`, while
    /// `.github/ci.yml` and `.gitignore` are not.
    pub fn is_excluded(&self, excluded_dirs: &[String]) -> bool {
        self.normalized
            .split('/')
            .any(|segment| excluded_dirs.iter().any(|dir| dir == segment))
    }
}

impl fmt::Display for HeaderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}
