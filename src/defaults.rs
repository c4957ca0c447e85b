//! Default values for spectr configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::path::{Path, PathBuf};

/// Name of the optional per-project configuration file.
pub const CONFIG_FILE: &str = ".spectr.yaml";

/// Returns the default root for home-scoped artifacts.
///
/// This is the user's home directory; tools like Codex keep their global
/// prompts there. Falls back to the current directory if the home directory
/// cannot be determined.
///
/// This can be overridden by the `--home-dir` CLI flag or the
/// `SPECTR_HOME` environment variable.
pub fn default_home_root() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the default config file path inside a project directory.
pub fn default_config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(CONFIG_FILE)
}
