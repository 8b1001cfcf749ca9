//! Shared testing utilities for viteconf CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated app directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    app_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an `app/` config directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let app_dir = root.path().join("app");
        fs::create_dir_all(&app_dir).expect("Failed to create test app directory");

        Self { root, app_dir }
    }

    /// Path to the app directory used for CLI invocations.
    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    /// Build a command for invoking the compiled `viteconf` binary within the
    /// app directory, with the driver variables scrubbed so the inherited
    /// environment cannot leak into assertions.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("viteconf").expect("Failed to locate viteconf binary");
        cmd.current_dir(&self.app_dir)
            .env_remove("TAURI_PLATFORM")
            .env_remove("TAURI_DEBUG");
        cmd
    }
}
