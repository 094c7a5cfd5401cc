//! Shared fixtures for asset-gen integration tests.
//!
//! Each test gets its own `TestContext` backed by a temporary directory,
//! so tests never touch the real `source.md` or `asset.json`.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use asset_gen::config::{BuildArgs, OutputFormat, ShowArgs};
use tempfile::TempDir;

/// A listing with one animal card and two fruit cards.
pub const SAMPLE_SOURCE: &str = "\
![animal-3.png](img/a3.png)
![2s_1p.png](img/f1.png)

![5b.png](img/f2.png)
";

pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `source.md` and return its path.
    pub fn write_source(&self, content: &str) -> PathBuf {
        let path = self.path("source.md");
        fs::write(&path, content).expect("failed to write source");
        path
    }

    pub fn build_args(&self, format: OutputFormat) -> BuildArgs {
        BuildArgs {
            source: self.path("source.md"),
            output: self.path("asset.json"),
            format,
            quiet: true,
        }
    }

    pub fn show_args(&self) -> ShowArgs {
        ShowArgs {
            manifest: self.path("asset.json"),
        }
    }

    pub fn output(&self) -> Option<String> {
        fs::read_to_string(self.path("asset.json")).ok()
    }
}
