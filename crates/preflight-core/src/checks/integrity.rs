use super::{path_exists, CheckOutcome, Finding};
use crate::checksum;
use crate::error::Result;
use crate::manifest::Manifest;
use std::path::Path;

/// Hash the main executable and record the leading digest characters.
/// A missing executable is narrated only; nothing is recorded.
pub fn check_integrity(root: &Path, manifest: &Manifest) -> Result<CheckOutcome> {
    let mut out = CheckOutcome::default();
    let exe = root.join(&manifest.main_executable);
    if !path_exists(&exe)? {
        tracing::info!(path = %exe.display(), "main executable not found, skipping digest");
        out.narrate("  ⚠ Cannot verify main executable (not found)".to_string());
        return Ok(out);
    }

    let digest = checksum::sha256_path(&exe)?;
    tracing::info!(path = %exe.display(), sha256 = %digest, "main executable hashed");
    out.record(
        Finding::success(format!(
            "✓ Integrity check passed (SHA256: {}...)",
            checksum::display_prefix(&digest)
        )),
        "  ✓ Main executable integrity OK".to_string(),
    );
    Ok(out)
}
