//! # Configuration Schema and Parsing
//!
//! This module defines the data structures that represent the `.spectr.yaml`
//! configuration file, as well as the logic for parsing it. The file is
//! optional; a project without one behaves as if it contained an empty
//! provider list and the default workspace directory.
//!
//! ## Key Components
//!
//! - **`Config`**: the parsed file. `providers` is the provider set used
//!   when the CLI names none, `dir` is the workspace directory name every
//!   generated pointer references.
//!
//! - **Derived paths**: helpers like `agents_doc` and `specs_dir` resolve
//!   workspace-relative artifact paths from `dir`, so renderers and
//!   initializers never concatenate path strings themselves.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path;

/// Workspace directory name used when the config does not set one.
pub const DEFAULT_DIR: &str = "spectr";

fn default_dir() -> String {
    DEFAULT_DIR.to_string()
}

/// Parsed `.spectr.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Providers to scaffold when the CLI does not name any.
    #[serde(default)]
    pub providers: Vec<String>,

    /// Name of the spectr workspace directory inside the project.
    #[serde(default = "default_dir")]
    pub dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            providers: Vec::new(),
            dir: default_dir(),
        }
    }
}

impl Config {
    /// Parse a YAML string into a validated config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParse {
            message: e.to_string(),
            hint: Some("expected fields: providers (list of names), dir (string)".to_string()),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field contents beyond what serde checks.
    pub fn validate(&self) -> Result<()> {
        if self.dir.trim().is_empty() {
            return Err(Error::ConfigParse {
                message: "dir must not be empty".to_string(),
                hint: Some(format!("omit the field to use the default '{}'", DEFAULT_DIR)),
            });
        }
        if path::escapes_root(&self.dir) {
            return Err(Error::ConfigParse {
                message: format!("dir escapes the project root: {}", self.dir),
                hint: Some("use a directory name relative to the project".to_string()),
            });
        }
        for name in &self.providers {
            if name.trim().is_empty() {
                return Err(Error::ConfigParse {
                    message: "providers entries must not be empty".to_string(),
                    hint: Some("run 'spectr list' to see the available names".to_string()),
                });
            }
        }
        Ok(())
    }

    /// The normalized workspace directory.
    pub fn workspace_dir(&self) -> String {
        path::normalize(&self.dir)
    }

    /// Path of the directory holding ratified specs.
    pub fn specs_dir(&self) -> String {
        format!("{}/specs", self.workspace_dir())
    }

    /// Path of the directory holding in-flight change proposals.
    pub fn changes_dir(&self) -> String {
        format!("{}/changes", self.workspace_dir())
    }

    /// Path of the full workflow instruction document.
    pub fn agents_doc(&self) -> String {
        format!("{}/AGENTS.md", self.workspace_dir())
    }

    /// Path of the user-owned project context stub.
    pub fn project_doc(&self) -> String {
        format!("{}/project.md", self.workspace_dir())
    }
}
