//! Shared test utilities for sentmd integration tests.
//!
//! Each test gets its own temp directory holding a copy of `tests/data`, so
//! the default resource names (`vader_lexicon.txt`, `SmartStoplist.txt`)
//! resolve from the working directory and no user config leaks in.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create sandbox");
        let data = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("data");
        for entry in fs::read_dir(&data).expect("read fixtures") {
            let entry = entry.expect("fixture entry");
            fs::copy(entry.path(), dir.path().join(entry.file_name())).expect("copy fixture");
        }
        fs::create_dir_all(dir.path().join("xdg")).expect("create config home");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, body: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, body).expect("write sandbox file");
        path
    }

    /// `sentmd` running inside the sandbox with progress and user config off.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sentmd"));
        cmd.current_dir(self.dir.path())
            .env("SENTMD_NO_PROGRESS", "1")
            .env("XDG_CONFIG_HOME", self.dir.path().join("xdg"))
            .env("HOME", self.dir.path())
            .env_remove("RUST_LOG");
        cmd
    }
}
