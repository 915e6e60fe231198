use crate::error::{PreflightError, Result};
use crate::manifest::Manifest;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Report filename written into the root when none is configured.
pub const DEFAULT_REPORT_FILENAME: &str = "setup-report.json";

/// Global configuration, optionally loaded from a TOML file named on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreflightConfig {
    /// Name of the JSON report written into the root directory.
    pub report_filename: String,
    /// Bundle layout; any table left out keeps its built-in default.
    pub manifest: Manifest,
}

impl Default for PreflightConfig {
    fn default() -> Self {
        Self {
            report_filename: DEFAULT_REPORT_FILENAME.to_string(),
            manifest: Manifest::default(),
        }
    }
}

impl PreflightConfig {
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Parse a config file at an explicit path.
pub fn load_from(path: &Path) -> Result<PreflightConfig> {
    let data = fs::read_to_string(path).map_err(|e| PreflightError::io(path, e))?;
    toml::from_str(&data).map_err(|source| PreflightError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Config from an explicitly named file, or the built-in tables.
///
/// Nothing is looked up implicitly, so a run without a path depends only on
/// the defaults and the root it is pointed at.
pub fn load(path: Option<&Path>) -> Result<PreflightConfig> {
    match path {
        Some(path) => {
            tracing::info!("loading config from {}", path.display());
            load_from(path)
        }
        None => {
            tracing::debug!("no config given, using built-in tables");
            Ok(PreflightConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PreflightConfig::default();
        assert_eq!(cfg.report_filename, "setup-report.json");
        assert_eq!(cfg.manifest, Manifest::default());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PreflightConfig::default();
        let toml = cfg.to_toml().unwrap();
        let parsed: PreflightConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_manifest_keeps_defaults() {
        let toml = r#"
            report_filename = "linux-report.json"

            [manifest]
            executable_extension = "AppImage"
            main_executable = "Knoux-Clipboard-AI.AppImage"
            libraries = ["libffmpeg.so"]
            optional_libraries = ["libffmpeg.so"]

            [[manifest.library_dirs]]
            label = "lib"
            path = "usr/lib"
        "#;
        let cfg: PreflightConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.report_filename, "linux-report.json");
        assert_eq!(cfg.manifest.executable_extension, "AppImage");
        assert_eq!(cfg.manifest.libraries, vec!["libffmpeg.so".to_string()]);
        assert_eq!(cfg.manifest.library_dirs.len(), 1);
        assert_eq!(cfg.manifest.library_dirs[0].path, "usr/lib");
        assert_eq!(cfg.manifest.config_files, Manifest::default().config_files);
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "report_filename = [").unwrap();
        match load_from(&path) {
            Err(PreflightError::ConfigParse { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected ConfigParse, got {other:?}"),
        }
    }

    #[test]
    fn load_without_path_is_default() {
        assert_eq!(load(None).unwrap(), PreflightConfig::default());
    }

    #[test]
    fn load_with_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("linux.toml");
        fs::write(&path, "report_filename = \"linux.json\"\n").unwrap();
        let cfg = load(Some(&path)).unwrap();
        assert_eq!(cfg.report_filename, "linux.json");
        assert_eq!(cfg.manifest, Manifest::default());
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, PreflightError::Io { .. }));
    }
}
