use super::{CheckOutcome, Finding};
use crate::error::{PreflightError, Result};
use crate::manifest::Manifest;
use std::fs;
use std::path::Path;

/// Names of root entries matching `*.{extension}`, one level deep, sorted.
pub fn find_executables(root: &Path, extension: &str) -> Result<Vec<String>> {
    let suffix = format!(".{extension}");
    let entries = fs::read_dir(root).map_err(|e| PreflightError::io(root, e))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PreflightError::io(root, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(&suffix) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// More than one top-level executable yields a single count warning.
pub fn check_duplicates(root: &Path, manifest: &Manifest) -> Result<CheckOutcome> {
    let ext = &manifest.executable_extension;
    let label = ext.to_uppercase();
    let exes = find_executables(root, ext)?;
    let mut out = CheckOutcome::default();

    if exes.len() > 1 {
        tracing::warn!(count = exes.len(), "duplicate executables at root");
        out.findings.push(Finding::warning(format!(
            "⚠ Found {} {label} files - consider cleanup",
            exes.len()
        )));
        for name in &exes {
            out.narrate(format!("  ⚠ {name} - Consider removing duplicates"));
        }
    } else {
        out.record(
            Finding::success(format!("✓ No duplicate {label} files")),
            "  ✓ No duplicates found".to_string(),
        );
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::touch;

    #[test]
    fn two_executables_give_one_count_warning() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Knoux-Clipboard-AI-FIXED.exe", 1);
        touch(dir.path(), "Knoux-Clipboard-AI-old.exe", 1);
        touch(dir.path(), "nested/ignored.exe", 1);
        touch(dir.path(), "readme.txt", 1);

        let out = check_duplicates(dir.path(), &Manifest::default()).unwrap();
        assert_eq!(
            out.findings,
            vec![Finding::warning("⚠ Found 2 EXE files - consider cleanup")]
        );
        assert_eq!(
            out.narration,
            vec![
                "  ⚠ Knoux-Clipboard-AI-FIXED.exe - Consider removing duplicates".to_string(),
                "  ⚠ Knoux-Clipboard-AI-old.exe - Consider removing duplicates".to_string(),
            ]
        );
    }

    #[test]
    fn zero_or_one_executable_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let m = Manifest::default();
        let none = check_duplicates(dir.path(), &m).unwrap();
        assert_eq!(none.findings, vec![Finding::success("✓ No duplicate EXE files")]);

        touch(dir.path(), "only.exe", 1);
        let one = check_duplicates(dir.path(), &m).unwrap();
        assert_eq!(one.findings, vec![Finding::success("✓ No duplicate EXE files")]);
        assert_eq!(one.narration, vec!["  ✓ No duplicates found".to_string()]);
    }

    #[test]
    fn unreadable_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        assert!(find_executables(&missing, "exe").is_err());
    }
}
