//! Tables of artifacts the bundle must ship.
//!
//! The constants describe the default Windows x64 bundle. A [`Manifest`] built
//! from them can be replaced wholesale from `config.toml` to target another
//! platform without touching the checks.

use serde::{Deserialize, Serialize};

/// Artifacts whose absence blocks installation (paths relative to root).
pub const CRITICAL_FILES: &[&str] = &[
    "Knoux-Clipboard-AI-FIXED.exe",
    "dist/ffmpeg.dll",
    "release/Knoux-Clipboard-AI-win32-x64/Knoux-Clipboard-AI.exe",
];

/// Shared libraries looked up in [`LIBRARY_DIRS`].
pub const REQUIRED_LIBRARIES: &[&str] = &["ffmpeg.dll", "msvcp140.dll", "vcruntime140.dll"];

/// Libraries whose absence is downgraded to a warning.
pub const OPTIONAL_LIBRARIES: &[&str] = &["ffmpeg.dll"];

/// `(label, path)` pairs searched for libraries, in precedence order.
pub const LIBRARY_DIRS: &[(&str, &str)] = &[
    ("dist", "dist"),
    ("release", "release/Knoux-Clipboard-AI-win32-x64"),
];

/// Configuration and manifest files the bundle must contain.
pub const CONFIG_FILES: &[&str] = &[
    "package.json",
    "app/renderer/index.html",
    "vite.config.ts",
    "main.js",
];

pub const EXECUTABLE_EXTENSION: &str = "exe";

/// Shown in the console title banner.
pub const PRODUCT_NAME: &str = "Knoux Clipboard AI";

/// Executable whose digest is reported by the integrity check.
pub const MAIN_EXECUTABLE: &str = "Knoux-Clipboard-AI-FIXED.exe";

/// Directory probed for shared libraries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryDir {
    /// Short tag shown in results, e.g. `dist`.
    pub label: String,
    /// Path relative to root.
    pub path: String,
}

/// Everything the checks need to know about the bundle layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    pub product_name: String,
    pub critical_files: Vec<String>,
    pub libraries: Vec<String>,
    pub optional_libraries: Vec<String>,
    pub config_files: Vec<String>,
    /// Extension (without the dot) counted by the duplicate check.
    pub executable_extension: String,
    pub main_executable: String,
    /// Kept last so it serializes as trailing `[[manifest.library_dirs]]` tables.
    pub library_dirs: Vec<LibraryDir>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            product_name: PRODUCT_NAME.to_string(),
            critical_files: owned(CRITICAL_FILES),
            libraries: owned(REQUIRED_LIBRARIES),
            optional_libraries: owned(OPTIONAL_LIBRARIES),
            config_files: owned(CONFIG_FILES),
            executable_extension: EXECUTABLE_EXTENSION.to_string(),
            main_executable: MAIN_EXECUTABLE.to_string(),
            library_dirs: LIBRARY_DIRS
                .iter()
                .map(|(label, path)| LibraryDir {
                    label: label.to_string(),
                    path: path.to_string(),
                })
                .collect(),
        }
    }
}

impl Manifest {
    pub fn is_optional_library(&self, name: &str) -> bool {
        self.optional_libraries.iter().any(|l| l == name)
    }
}
