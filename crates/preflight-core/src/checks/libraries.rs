use super::{path_exists, CheckOutcome, Finding};
use crate::error::Result;
use crate::manifest::Manifest;
use std::path::Path;

/// Look up each library in the search dirs.
///
/// The first dir holding a library records the success; later hits are only
/// narrated. A library found nowhere is a warning when optional and is
/// otherwise not recorded at all.
pub fn check_libraries(root: &Path, manifest: &Manifest) -> Result<CheckOutcome> {
    let mut out = CheckOutcome::default();
    for lib in &manifest.libraries {
        let mut found = false;
        for dir in &manifest.library_dirs {
            if !path_exists(&root.join(&dir.path).join(lib))? {
                continue;
            }
            let line = format!("  ✓ {lib} [{}]", dir.label);
            if found {
                out.narrate(line);
            } else {
                out.record(Finding::success(format!("✓ {lib} ({}/)", dir.label)), line);
                found = true;
            }
        }

        if found {
            continue;
        }
        if manifest.is_optional_library(lib) {
            tracing::warn!(library = %lib, "optional library missing");
            out.record(
                Finding::warning(format!("⚠ {lib} not critical but recommended")),
                format!("  ⚠ {lib} (optional)"),
            );
        } else {
            tracing::debug!(library = %lib, "library missing, not recorded");
        }
    }
    Ok(out)
}
