//! Persisted JSON summary of one verification run.

use crate::error::{PreflightError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Report format version written into every report.
pub const REPORT_VERSION: &str = "1.0.0";

/// Findings of a run, split by class, in execution order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckResults {
    pub success: Vec<String>,
    pub warnings: Vec<String>,
    pub issues: Vec<String>,
}

impl CheckResults {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Passed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// RFC 3339 UTC time the report was generated.
    pub timestamp: String,
    pub version: String,
    pub status: ReportStatus,
    pub success: Vec<String>,
    pub warnings: Vec<String>,
    pub issues: Vec<String>,
}

impl Report {
    pub fn from_results(results: &CheckResults) -> Self {
        let status = if results.passed() {
            ReportStatus::Passed
        } else {
            ReportStatus::Failed
        };
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            version: REPORT_VERSION.to_string(),
            status,
            success: results.success.clone(),
            warnings: results.warnings.clone(),
            issues: results.issues.clone(),
        }
    }

    /// Pretty JSON with 2-space indentation.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report to `path`, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| PreflightError::io(path, e))
    }
}
