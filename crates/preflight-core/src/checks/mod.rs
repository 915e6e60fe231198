//! Individual checklist steps.
//!
//! Each check reads the filesystem under the root and returns a
//! [`CheckOutcome`]: classified findings destined for the persisted results,
//! plus console narration lines that are printed but never persisted.

mod config_files;
mod critical;
mod duplicates;
mod integrity;
mod libraries;

use crate::error::{PreflightError, Result};
use crate::manifest::Manifest;
use std::io;
use std::path::Path;

pub use config_files::check_config_files;
pub use critical::check_critical_files;
pub use duplicates::{check_duplicates, find_executables};
pub use integrity::check_integrity;
pub use libraries::check_libraries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Failure,
}

/// One classified result line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Failure,
            message: message.into(),
        }
    }
}

/// What a single check produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub findings: Vec<Finding>,
    /// Console-only lines, already indented.
    pub narration: Vec<String>,
}

impl CheckOutcome {
    fn record(&mut self, finding: Finding, line: String) {
        self.findings.push(finding);
        self.narration.push(line);
    }

    fn narrate(&mut self, line: String) {
        self.narration.push(line);
    }
}

/// Whether `path` exists. A missing entry, or a file where a directory was
/// expected along the way, counts as absent; any other error (permission
/// denied, for one) is a fault.
pub fn path_exists(path: &Path) -> Result<bool> {
    match path.try_exists() {
        Ok(found) => Ok(found),
        Err(e) if e.kind() == io::ErrorKind::NotADirectory => Ok(false),
        Err(e) => Err(PreflightError::io(path, e)),
    }
}


/// A checklist step: console heading plus the function that runs it.
pub struct Check {
    pub heading: &'static str,
    pub run: fn(&Path, &Manifest) -> Result<CheckOutcome>,
}

/// The checklist in execution order.
pub const CHECKS: &[Check] = &[
    Check {
        heading: "📦 Checking critical files...",
        run: check_critical_files,
    },
    Check {
        heading: "🔧 Checking DLL dependencies...",
        run: check_libraries,
    },
    Check {
        heading: "⚙️  Checking configuration files...",
        run: check_config_files,
    },
    Check {
        heading: "🔄 Checking for duplicates...",
        run: check_duplicates,
    },
    Check {
        heading: "🔐 Verifying file integrity...",
        run: check_integrity,
    },
];
