//! Error type shared by the checks, config loader and report writer.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, PreflightError>;

/// Faults that abort a verification run. Missing artifacts are findings,
/// not errors; only I/O and encoding problems end up here.
#[derive(Debug, thiserror::Error)]
pub enum PreflightError {
    #[error("{}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("write console output")]
    Console(#[source] std::io::Error),

    #[error("invalid config {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("encode config")]
    ConfigEncode(#[from] toml::ser::Error),

    #[error("encode report")]
    ReportEncode(#[from] serde_json::Error),
}

impl PreflightError {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PreflightError::Io {
            path: path.into(),
            source,
        }
    }
}
