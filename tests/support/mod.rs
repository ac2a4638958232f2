#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Scratch directory holding a database path and a (possibly absent) config.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn db(&self) -> PathBuf {
        self.dir.path().join("customers.db")
    }

    pub fn config(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// `clientele` pointed at this workspace's config and database.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("clientele").expect("binary built");
        cmd.current_dir(self.path())
            .env_remove("CLIENTELE_DATABASE")
            .env_remove("RUST_LOG")
            .arg("--color")
            .arg("never")
            .arg("--config")
            .arg(self.config())
            .arg("--db")
            .arg(self.db());
        cmd
    }
}
