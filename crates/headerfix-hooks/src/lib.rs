// Rust guideline compliant 2026-02-06

//! Headerfix Git Hooks
//!
//! This crate provides the hook-facing side of headerfix:
//! - Pre-commit header enforcement over staged files
//! - User-facing reporting
//! - Diagnostic logging setup

pub mod logging;
pub mod pre_commit;
pub mod report;

pub use logging::init_tracing;
pub use pre_commit::{pre_commit_hook, RunSummary};
pub use report::Reporter;
