// Rust guideline compliant 2026-02-06

//! CLI entry point for the headerfix pre-commit hook.

use clap::Parser;
use headerfix_core::Config;
use headerfix_hooks::{init_tracing, pre_commit_hook, Reporter};
use std::process::ExitCode;

/// Enforces `// <path>` file headers on staged files
#[derive(Parser, Debug)]
#[command(name = "headerfix-pre-commit")]
#[command(
    version,
    about = "Checks and auto-fixes file path headers",
    after_help = "Exit status is 1 when any file was fixed (re-stage it) or could not be checked."
)]
struct Cli {
    /// Files to check, relative to the repository root
    files: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("headerfix: {:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let repo_path = std::env::current_dir()?;
    let config = Config::load(&repo_path)?;
    let _guard = init_tracing(&config)?;
    tracing::debug!(?config, "loaded configuration");

    let mut reporter = Reporter::stdout();
    let summary = pre_commit_hook(&repo_path, &cli.files, &config, &mut reporter)?;
    Ok(summary.exit_code())
}
