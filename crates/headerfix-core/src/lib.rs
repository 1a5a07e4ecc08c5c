// Rust guideline compliant 2026-02-06

//! Headerfix Core Library
//!
//! This crate provides the building blocks of the headerfix pre-commit hook:
//! - Path normalization and directory exclusion
//! - Header checking and repair on file lines
//! - The per-file read-check-write cycle
//! - Configuration loading
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod fixer;
pub mod header;
pub mod path;

pub use config::{Config, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use fixer::{HeaderFixer, Outcome};
pub use header::{apply_header, FileLines, HeaderFix};
pub use path::HeaderPath;
