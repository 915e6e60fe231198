//! CLI command handlers, one per file.

mod checksum;
mod show_config;
mod verify;

pub use checksum::run_checksum;
pub use show_config::run_show_config;
pub use verify::run_verify;
