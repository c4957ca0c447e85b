//! One-time seed files

use crate::config::Config;
use crate::error::Result;
use crate::filesystem::Vfs;
use crate::path;

use super::{render_error, InitResult, Initializer, Phase, Renderer, Scope};

const KIND: &str = "file";

/// Writes a file once and never touches it again.
///
/// Used for documents the user takes ownership of after creation, like the
/// project context stub. An existing file is left alone even when its
/// content has drifted from what would be rendered today.
pub struct SeedFile {
    path: String,
    scope: Scope,
    render: Renderer,
}

impl SeedFile {
    pub fn new<S: Into<String>>(scope: Scope, file_path: S, render: Renderer) -> Self {
        Self {
            path: path::normalize(&file_path.into()),
            scope,
            render,
        }
    }
}

impl Initializer for SeedFile {
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
        format!("seed file {} ({})", self.path, self.scope.as_str())
    }

    fn is_setup(&self, project: &dyn Vfs, home: &dyn Vfs, _config: &Config) -> bool {
        let fs = match self.scope {
            Scope::Project => project,
            Scope::Home => home,
        };
        fs.exists(&self.path)
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

        let mut result = InitResult::new();
        if !fs.exists(&self.path) {
            let content =
                (self.render)(config).map_err(|e| render_error(&self.path, KIND, e))?;
            fs.write(&self.path, &content)?;
            result.record_created(&self.path);
        }
        Ok(result)
    }
}
