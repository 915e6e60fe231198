use super::{path_exists, CheckOutcome, Finding};
use crate::error::Result;
use crate::manifest::Manifest;
use std::path::Path;

/// Every configuration/manifest file must exist.
pub fn check_config_files(root: &Path, manifest: &Manifest) -> Result<CheckOutcome> {
    let mut out = CheckOutcome::default();
    for config in &manifest.config_files {
        if path_exists(&root.join(config))? {
            out.record(
                Finding::success(format!("✓ {config}")),
                format!("  ✓ {config}"),
            );
        } else {
            tracing::warn!(file = %config, "config file missing");
            out.record(
                Finding::failure(format!("✗ Missing config: {config}")),
                format!("  ✗ MISSING: {config}"),
            );
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::touch;
    use crate::checks::{Finding, Severity};

    #[test]
    fn missing_config_is_named_in_failure() {
        let dir = tempfile::tempdir().unwrap();
        let m = Manifest::default();
        for c in &m.config_files {
            if c != "vite.config.ts" {
                touch(dir.path(), c, 2);
            }
        }

        let out = check_config_files(dir.path(), &m).unwrap();
        assert_eq!(out.findings.len(), 4);
        let failures: Vec<&Finding> = out
            .findings
            .iter()
            .filter(|f| f.severity == Severity::Failure)
            .collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].message, "✗ Missing config: vite.config.ts");
        assert_eq!(out.findings[0].message, "✓ package.json");
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_parent_is_a_fault_not_a_missing_file() {
        use crate::checks::test_support::with_locked_dir;
        use crate::error::PreflightError;

        let dir = tempfile::tempdir().unwrap();
        let m = Manifest::default();
        for c in &m.config_files {
            touch(dir.path(), c, 2);
        }

        let Some(res) = with_locked_dir(dir.path(), "app", || check_config_files(dir.path(), &m))
        else {
            return;
        };
        match res {
            Err(PreflightError::Io { path, .. }) => {
                assert_eq!(path, dir.path().join("app/renderer/index.html"))
            }
            other => panic!("expected Io fault, got {other:?}"),
        }
    }
}
