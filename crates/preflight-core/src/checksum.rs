//! SHA-256 of bundle files, computed by streaming fixed-size chunks.

use crate::error::{PreflightError, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 4096;

/// Number of hex characters of a digest shown in check results.
pub const DISPLAY_PREFIX_LEN: usize = 8;

/// Compute SHA-256 of a file and return the digest as lowercase hex.
/// The file handle is dropped on every return path.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).map_err(|e| PreflightError::io(path, e))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f.read(&mut buf).map_err(|e| PreflightError::io(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Leading characters of a hex digest used for display.
pub fn display_prefix(digest: &str) -> &str {
    digest.get(..DISPLAY_PREFIX_LEN).unwrap_or(digest)
}
