//! CLI for the preflight installation verifier.

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use preflight_core::config::{self, PreflightConfig};
use std::path::{Path, PathBuf};

use commands::{run_checksum, run_show_config, run_verify};

/// Every check passed (warnings allowed).
pub const EXIT_PASSED: i32 = 0;
/// At least one failure was recorded.
pub const EXIT_FAILED: i32 = 1;
/// I/O or configuration fault; the checklist did not complete.
pub const EXIT_FAULT: i32 = 2;

/// Top-level CLI. With no subcommand the full checklist runs.
#[derive(Debug, Parser)]
#[command(name = "preflight")]
#[command(about = "Verify an application bundle before installation", long_about = None)]
pub struct Cli {
    /// Bundle root (default: parent of the directory holding this binary).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file with manifest tables (default: built-in Windows bundle tables).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report filename written inside the root.
    #[arg(long, value_name = "NAME")]
    pub report: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the checklist and write the JSON report (default).
    Verify,

    /// Print the full SHA-256 of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },

    /// Print the effective configuration as TOML.
    ShowConfig,
}

/// Parent of the directory containing the running executable.
pub fn default_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locate running executable")?;
    let exe_dir = exe
        .parent()
        .context("running executable has no parent directory")?;
    Ok(exe_dir.parent().unwrap_or(exe_dir).to_path_buf())
}

fn load_config(path: Option<&Path>) -> Result<PreflightConfig> {
    let cfg = config::load(path)?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl Cli {
    /// Parse arguments, dispatch, and return the process exit code.
    pub fn run_from_args() -> Result<i32> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<i32> {
        let cfg = load_config(self.config.as_deref())?;

        match self.command.unwrap_or(CliCommand::Verify) {
            CliCommand::Verify => {
                let root = match self.root {
                    Some(root) => root,
                    None => default_root()?,
                };
                let report = self.report.as_deref().unwrap_or(&cfg.report_filename);
                let mut stdout = std::io::stdout().lock();
                let passed = run_verify(&root, &cfg, report, &mut stdout)?;
                Ok(if passed { EXIT_PASSED } else { EXIT_FAILED })
            }
            CliCommand::Checksum { path } => {
                run_checksum(&path)?;
                Ok(EXIT_PASSED)
            }
            CliCommand::ShowConfig => {
                run_show_config(&cfg)?;
                Ok(EXIT_PASSED)
            }
        }
    }
}

#[cfg(test)]
mod tests;
