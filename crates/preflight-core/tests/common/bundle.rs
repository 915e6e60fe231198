//! Builds bundle layouts on disk for verification tests.

#![allow(dead_code)]

use preflight_core::manifest::Manifest;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const MB: u64 = 1024 * 1024;

/// Temp bundle root plus the manifest it is checked against.
pub struct Bundle {
    pub dir: TempDir,
    pub manifest: Manifest,
}

impl Bundle {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            manifest: Manifest::default(),
        }
    }

    /// Every critical and config path present, libraries only in `dist/`.
    pub fn complete() -> Self {
        let b = Self::empty();
        let sizes = [10 * MB, MB / 2, 20 * MB];
        for (file, len) in b.manifest.critical_files.iter().zip(sizes) {
            b.sized(file, len);
        }
        for lib in &b.manifest.libraries {
            let rel = format!("dist/{lib}");
            // dist/ffmpeg.dll doubles as a critical artifact; keep its size.
            if !b.root().join(&rel).exists() {
                b.touch(&rel);
            }
        }
        for cfg in &b.manifest.config_files {
            b.touch(cfg);
        }
        b
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn touch(&self, rel: &str) {
        self.write(rel, b"x");
    }

    /// Sparse file of `len` bytes.
    pub fn sized(&self, rel: &str, len: u64) {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::File::create(&path).unwrap().set_len(len).unwrap();
    }

    pub fn write(&self, rel: &str, body: &[u8]) {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.root().join(rel)).unwrap();
    }
}
