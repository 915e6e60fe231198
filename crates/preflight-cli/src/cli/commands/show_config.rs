//! `preflight show-config` – print the effective configuration.

use anyhow::Result;
use preflight_core::config::PreflightConfig;

pub fn run_show_config(cfg: &PreflightConfig) -> Result<()> {
    print!("{}", cfg.to_toml()?);
    Ok(())
}
