//! Tracing setup for the verifier binary.
//!
//! Logs go to a per-app file under the XDG state dir, or to stderr when that
//! file cannot be opened. Stdout is reserved for the console report.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where and how verbosely one application logs.
#[derive(Debug, Clone)]
pub struct LogSettings {
    /// XDG prefix and log file stem, e.g. `preflight`.
    pub app: String,
    /// Filter used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
    /// Filter for the stderr fallback, kept quiet so the report stays readable.
    pub fallback_filter: String,
}

impl LogSettings {
    pub fn for_app(app: &str) -> Self {
        let crate_target = app.replace('-', "_");
        Self {
            app: app.to_string(),
            default_filter: format!("info,{crate_target}=debug,{crate_target}_core=debug"),
            fallback_filter: "warn".to_string(),
        }
    }

    /// `$XDG_STATE_HOME/<app>/<app>.log`.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix(&self.app)
            .context("locate XDG state directory")?;
        Ok(xdg_dirs.get_state_home().join(format!("{}.log", self.app)))
    }
}

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install a file-backed subscriber and return the log path.
/// On failure (e.g. state dir unwritable) nothing is installed, so the caller
/// can fall back to [`init_stderr`].
pub fn init(settings: &LogSettings) -> Result<PathBuf> {
    let path = settings.log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_or(&settings.default_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {e}"))?;

    tracing::info!(app = %settings.app, "logging to {}", path.display());
    Ok(path)
}

/// Stderr-only subscriber for when [`init`] fails.
pub fn init_stderr(settings: &LogSettings) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or(&settings.fallback_filter))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
