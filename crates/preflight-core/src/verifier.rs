//! Runs the checklist against a bundle root and renders the results.

use crate::checks::{CheckOutcome, Severity, CHECKS};
use crate::config::DEFAULT_REPORT_FILENAME;
use crate::error::{PreflightError, Result};
use crate::manifest::Manifest;
use crate::report::{CheckResults, Report};
use std::fmt::Write as _;
use std::io::Write;
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 60;

/// Success entries listed in the summary before eliding the rest.
const SUCCESS_PREVIEW: usize = 5;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// One verification run over a bundle root.
#[derive(Debug)]
pub struct Verifier {
    root: PathBuf,
    manifest: Manifest,
    results: CheckResults,
}

impl Verifier {
    /// Verifier for the default bundle layout. `root` is made absolute
    /// against the current directory (an empty path means the current
    /// directory itself); nothing under it is touched yet.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        Self::with_manifest(root, Manifest::default())
    }

    pub fn with_manifest(root: impl AsRef<Path>, manifest: Manifest) -> Result<Self> {
        let root = root.as_ref();
        let root = if root.as_os_str().is_empty() {
            std::env::current_dir().map_err(|e| PreflightError::io(root, e))?
        } else {
            std::path::absolute(root).map_err(|e| PreflightError::io(root, e))?
        };
        Ok(Self {
            root,
            manifest,
            results: CheckResults::default(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn results(&self) -> &CheckResults {
        &self.results
    }

    pub fn passed(&self) -> bool {
        self.results.passed()
    }

    /// Run every check in order, narrating to `out`, then print the summary.
    /// Returns whether no failure was recorded; warnings do not count.
    pub fn verify_all(&mut self, out: &mut dyn Write) -> Result<bool> {
        let title = format!(
            "\n{rule}\n🔍 {} - Installation Verification\n{rule}\n\n",
            self.manifest.product_name,
            rule = rule()
        );
        out.write_all(title.as_bytes())
            .map_err(PreflightError::Console)?;

        tracing::info!(root = %self.root.display(), "starting verification");
        for (i, check) in CHECKS.iter().enumerate() {
            let sep = if i == 0 { "" } else { "\n" };
            writeln!(out, "{sep}{}", check.heading).map_err(PreflightError::Console)?;
            let outcome = (check.run)(&self.root, &self.manifest)?;
            for line in &outcome.narration {
                writeln!(out, "{line}").map_err(PreflightError::Console)?;
            }
            self.absorb(outcome);
        }

        out.write_all(self.render_report().as_bytes())
            .map_err(PreflightError::Console)?;

        tracing::info!(
            success = self.results.success.len(),
            warnings = self.results.warnings.len(),
            issues = self.results.issues.len(),
            "verification finished"
        );
        Ok(self.passed())
    }

    fn absorb(&mut self, outcome: CheckOutcome) {
        for finding in outcome.findings {
            let list = match finding.severity {
                Severity::Success => &mut self.results.success,
                Severity::Warning => &mut self.results.warnings,
                Severity::Failure => &mut self.results.issues,
            };
            list.push(finding.message);
        }
    }

    /// Textual summary: counts, the first few successes, every warning and
    /// issue, then a pass/fail banner.
    pub fn render_report(&self) -> String {
        let r = &self.results;
        let mut s = String::new();
        let _ = write!(s, "\n{rule}\n📊 VERIFICATION REPORT\n{rule}\n\n", rule = rule());

        if !r.success.is_empty() {
            let _ = writeln!(s, "✓ Success: {} checks passed", r.success.len());
            for item in r.success.iter().take(SUCCESS_PREVIEW) {
                let _ = writeln!(s, "  {item}");
            }
            if r.success.len() > SUCCESS_PREVIEW {
                let _ = writeln!(s, "  ... and {} more", r.success.len() - SUCCESS_PREVIEW);
            }
        }

        if !r.warnings.is_empty() {
            let _ = writeln!(s, "\n⚠ Warnings: {}", r.warnings.len());
            for item in &r.warnings {
                let _ = writeln!(s, "  {item}");
            }
        }

        if !r.issues.is_empty() {
            let _ = writeln!(s, "\n✗ Issues: {}", r.issues.len());
            for item in &r.issues {
                let _ = writeln!(s, "  {item}");
            }
        }

        let banner = if r.passed() {
            "✅ ALL CHECKS PASSED - Ready for installation!"
        } else {
            "❌ INSTALLATION CANNOT PROCEED - Fix issues above"
        };
        let _ = write!(s, "\n{rule}\n{banner}\n{rule}\n\n", rule = rule());
        s
    }

    /// Serialize the current results to `root/filename` (default
    /// `setup-report.json`), replacing any existing file.
    pub fn export_report(&self, filename: Option<&str>) -> Result<PathBuf> {
        let path = self.root.join(filename.unwrap_or(DEFAULT_REPORT_FILENAME));
        let report = Report::from_results(&self.results);
        report.write_to(&path)?;
        tracing::info!(path = %path.display(), status = ?report.status, "report written");
        Ok(path)
    }
}
