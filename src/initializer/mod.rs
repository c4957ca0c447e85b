//! Initialization units
//!
//! Everything spectr scaffolds is expressed as a unit implementing the
//! [`Initializer`] trait: ensure a directory, seed a file once, sync a
//! marker-bounded block, or regenerate a wholly owned file. Providers
//! construct units; the resolve engine deduplicates and orders them; the
//! driver runs them. Units are idempotent, so a second run over an
//! unchanged tree reports nothing.
//!
//! The unit set is closed. Each kind lives in its own submodule and
//! carries its kind tag in its dedup key, so two kinds targeting the same
//! path are distinct identities.

pub mod command;
pub mod dir;
pub mod marker_file;
pub mod seed;
pub mod skill;

pub use command::{CommandEntry, WriteCommand};
pub use dir::EnsureDir;
pub use marker_file::SyncMarkerFile;
pub use seed::SeedFile;
pub use skill::WriteSkill;

use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::filesystem::Vfs;

/// Which root an initializer writes under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    /// The project directory being scaffolded.
    Project,
    /// The user's home directory, for tools with global-only artifacts.
    Home,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Project => "project",
            Scope::Home => "home",
        }
    }
}

/// Execution phase of a unit.
///
/// Units run phase by phase; within a phase the contribution order is
/// preserved exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// Directory creation.
    Directories,
    /// Instruction and seed files.
    Files,
    /// Slash-command and skill generation.
    Commands,
}

/// Accumulated record of what a run changed.
///
/// Paths are relative to the scope root they were written under. An empty
/// result means the unit observed nothing to change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InitResult {
    /// Artifacts that did not exist before.
    pub created: Vec<String>,
    /// Artifacts whose content was rewritten.
    pub updated: Vec<String>,
}

impl InitResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_created<S: Into<String>>(&mut self, path: S) {
        self.created.push(path.into());
    }

    pub fn record_updated<S: Into<String>>(&mut self, path: S) {
        self.updated.push(path.into());
    }

    /// Fold another result into this one, preserving report order.
    pub fn merge(&mut self, other: InitResult) {
        self.created.extend(other.created);
        self.updated.extend(other.updated);
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.updated.is_empty()
    }

    pub fn len(&self) -> usize {
        self.created.len() + self.updated.len()
    }
}

/// Content renderer injected into file-producing units.
///
/// Renderers close over nothing but the config, so a unit's output is a
/// pure function of the config it runs with.
pub type Renderer = Box<dyn Fn(&Config) -> Result<String> + Send + Sync>;

/// A single idempotent scaffolding unit.
pub trait Initializer: Send + Sync {
    /// Stable identity for deduplication, or `None` for units that always
    /// run. The identity string embeds the unit kind, so different kinds
    /// over one path never collide.
    fn key(&self) -> Option<String>;

    /// Which root the unit writes under.
    fn scope(&self) -> Scope;

    /// Which phase the unit runs in.
    fn phase(&self) -> Phase;

    /// Short human-readable description for logs and reports.
    fn describe(&self) -> String;

    /// Whether the unit's artifacts are already in place. Advisory; `init`
    /// stays idempotent whether or not this is consulted.
    fn is_setup(&self, project: &dyn Vfs, home: &dyn Vfs, config: &Config) -> bool;

    /// Apply the unit.
    fn init(
        &self,
        project: &mut dyn Vfs,
        home: &mut dyn Vfs,
        config: &Config,
    ) -> Result<InitResult>;
}

/// Wrap a renderer failure with the artifact path and unit kind.
pub(crate) fn render_error(path: &str, kind: &str, source: Error) -> Error {
    Error::Render {
        path: path.to_string(),
        kind: kind.to_string(),
        message: source.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_as_str() {
        assert_eq!(Scope::Project.as_str(), "project");
        assert_eq!(Scope::Home.as_str(), "home");
    }

    #[test]
    fn test_phase_order() {
        assert!(Phase::Directories < Phase::Files);
        assert!(Phase::Files < Phase::Commands);
    }

    #[test]
    fn test_result_starts_empty() {
        let result = InitResult::new();
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn test_result_merge_preserves_order() {
        let mut first = InitResult::new();
        first.record_created("a.md");
        first.record_updated("b.md");

        let mut second = InitResult::new();
        second.record_created("c.md");

        first.merge(second);
        assert_eq!(first.created, vec!["a.md", "c.md"]);
        assert_eq!(first.updated, vec!["b.md"]);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_result_serializes_to_json() {
        let mut result = InitResult::new();
        result.record_created("CLAUDE.md");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"created\":[\"CLAUDE.md\"]"));
        assert!(json.contains("\"updated\":[]"));
    }

    #[test]
    fn test_render_error_wraps_path_and_kind() {
        let inner = Error::Filesystem {
            message: "boom".to_string(),
        };
        let wrapped = render_error("CLAUDE.md", "config", inner);
        let display = format!("{}", wrapped);
        assert!(display.contains("CLAUDE.md"));
        assert!(display.contains("config initializer"));
        assert!(display.contains("boom"));
    }
}
