//! Common test utilities and fixtures for datadir integration tests

// Not every helper is used by every test module
#![allow(dead_code)]

use assert_cmd::Command;
use datadir::DataDirectory;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A data directory rooted in a fresh temporary directory.
///
/// The base is a `data/` child of the temp dir so tests can also observe
/// construction of a missing base.
pub struct TestDataDir {
    temp: TempDir,
    pub dir: DataDirectory,
}

impl TestDataDir {
    pub fn new() -> Self {
        datadir::test_utils::init_test_logging(None);
        let temp = TempDir::new().unwrap();
        let dir = DataDirectory::new(temp.path().join("data")).unwrap();
        Self {
            temp,
            dir,
        }
    }

    /// The temporary directory holding the base
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Absolute path of `relative` under the base
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.base_path().join(relative)
    }

    /// Write a file directly, bypassing the data directory
    pub fn write_raw(&self, relative: &str, content: impl AsRef<[u8]>) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// The `datadir` binary pointed at this base, with no config file
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("datadir").unwrap();
        cmd.env_remove("DATADIR_CONFIG")
            .env("NO_COLOR", "1")
            .current_dir(self.root())
            .arg("--base")
            .arg(self.dir.base_path());
        cmd
    }
}
