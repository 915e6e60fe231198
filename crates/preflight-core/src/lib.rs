pub mod checks;
pub mod checksum;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod report;
pub mod verifier;

pub use error::{PreflightError, Result};
pub use verifier::Verifier;
