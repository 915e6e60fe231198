//! `preflight [verify]` – run the checklist and export the report.

use anyhow::{Context, Result};
use preflight_core::config::PreflightConfig;
use preflight_core::Verifier;
use std::io::Write;
use std::path::Path;

/// Run every check against `root`, write `report` into it, and return
/// whether no failure was recorded. Console output goes to `out`.
pub fn run_verify(
    root: &Path,
    cfg: &PreflightConfig,
    report: &str,
    out: &mut dyn Write,
) -> Result<bool> {
    let mut verifier = Verifier::with_manifest(root, cfg.manifest.clone())?;
    let passed = verifier
        .verify_all(out)
        .with_context(|| format!("verify {}", verifier.root().display()))?;
    verifier
        .export_report(Some(report))
        .context("export report")?;
    writeln!(out, "📄 Report saved to: {report}")?;
    Ok(passed)
}
