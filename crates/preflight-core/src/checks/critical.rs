use super::{path_exists, CheckOutcome, Finding};
use crate::error::{PreflightError, Result};
use crate::manifest::Manifest;
use std::path::Path;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Every critical artifact must exist; present ones report their size in MB.
pub fn check_critical_files(root: &Path, manifest: &Manifest) -> Result<CheckOutcome> {
    let mut out = CheckOutcome::default();
    for file in &manifest.critical_files {
        let path = root.join(file);
        if path_exists(&path)? {
            let len = path
                .metadata()
                .map_err(|e| PreflightError::io(&path, e))?
                .len();
            let size_mb = len as f64 / BYTES_PER_MB;
            tracing::debug!(file = %file, bytes = len, "critical file present");
            out.record(
                Finding::success(format!("✓ {file} ({size_mb:.2} MB)")),
                format!("  ✓ {file}"),
            );
        } else {
            tracing::warn!(file = %file, "critical file missing");
            out.record(
                Finding::failure(format!("✗ Missing: {file}")),
                format!("  ✗ MISSING: {file}"),
            );
        }
    }
    Ok(out)
}
