//! Marker-managed instruction files

use crate::config::Config;
use crate::error::Result;
use crate::filesystem::Vfs;
use crate::marker::{self, MarkerState};
use crate::merge::{self, MergeOutcome};
use crate::path;

use super::{render_error, InitResult, Initializer, Phase, Renderer, Scope};

const KIND: &str = "config";

/// Keeps the managed block of an instruction file in sync.
///
/// The rendered body is merged into the file's marker-bounded block; user
/// content around the block survives untouched. A corrupt marker structure
/// aborts the unit instead of risking that content.
pub struct SyncMarkerFile {
    path: String,
    scope: Scope,
    render: Renderer,
}

impl SyncMarkerFile {
    pub fn new<S: Into<String>>(scope: Scope, file_path: S, render: Renderer) -> Self {
        Self {
            path: path::normalize(&file_path.into()),
            scope,
            render,
        }
    }

    /// The managed file's scope-relative path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Initializer for SyncMarkerFile {
    fn key(&self) -> Option<String> {
        Some(format!("{}:{}", KIND, self.path))
    }

    fn scope(&self) -> Scope {
        self.scope
    }

    fn phase(&self) -> Phase {
        Phase::Files
    }

    fn describe(&self) -> String {
        format!("managed file {} ({})", self.path, self.scope.as_str())
    }

    fn is_setup(&self, project: &dyn Vfs, home: &dyn Vfs, _config: &Config) -> bool {
        let fs = match self.scope {
            Scope::Project => project,
            Scope::Home => home,
        };
        match fs.read_to_string(&self.path) {
            Ok(Some(text)) => matches!(marker::locate(&text), MarkerState::Open { .. }),
            _ => false,
        }
    }

    fn init(
        &self,
        project: &mut dyn Vfs,
        home: &mut dyn Vfs,
        config: &Config,
    ) -> Result<InitResult> {
        let fs: &mut dyn Vfs = match self.scope {
            Scope::Project => &mut *project,
            Scope::Home => &mut *home,
        };

        let body = (self.render)(config).map_err(|e| render_error(&self.path, KIND, e))?;
        let existing = fs.read_to_string(&self.path)?;
        let merged = merge::merge(&self.path, existing.as_deref(), &body)?;

        let mut result = InitResult::new();
        match merged.outcome {
            MergeOutcome::Created => {
                fs.write(&self.path, &merged.content)?;
                result.record_created(&self.path);
            }
            MergeOutcome::Updated => {
                fs.write(&self.path, &merged.content)?;
                result.record_updated(&self.path);
            }
            MergeOutcome::Unchanged => {}
        }
        Ok(result)
    }
}
