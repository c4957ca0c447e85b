//! Shared test utilities for integration and E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_config("providers: [claude]\n");
//!     fixture.command().arg("init").assert().success();
//! }
//! ```

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// A test fixture providing a temporary project directory and a separate
/// temporary home directory.
///
/// Home isolation matters: some providers (codex) write global prompt files
/// under the home root, and a test must never touch the real one. The
/// `command()` helper wires both roots into the spawned CLI.
pub struct TestFixture {
    project: assert_fs::TempDir,
    home: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new fixture with empty project and home directories.
    pub fn new() -> Self {
        Self {
            project: assert_fs::TempDir::new().expect("Failed to create project temp dir"),
            home: assert_fs::TempDir::new().expect("Failed to create home temp dir"),
        }
    }

    /// Add a `.spectr.yaml` configuration file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.project
            .child(".spectr.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Add a project file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.project
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// The project directory.
    pub fn project(&self) -> &assert_fs::TempDir {
        &self.project
    }

    /// The isolated home directory.
    #[allow(dead_code)]
    pub fn home(&self) -> &assert_fs::TempDir {
        &self.home
    }

    /// A `spectr` command rooted in the fixture's project directory with
    /// the isolated home wired in and colors disabled for stable output.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("spectr");
        cmd.current_dir(self.project.path())
            .env("SPECTR_HOME", self.home.path())
            .env_remove("SPECTR_CONFIG")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
