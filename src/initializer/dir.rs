//! Directory creation units

use crate::config::Config;
use crate::error::Result;
use crate::filesystem::Vfs;
use crate::path;

use super::{InitResult, Initializer, Phase, Scope};

/// Ensures a directory exists under its scope root.
///
/// Runs in the directories phase so the files and commands phases can rely
/// on their parents being present.
pub struct EnsureDir {
    path: String,
    scope: Scope,
}

impl EnsureDir {
    pub fn new<S: Into<String>>(scope: Scope, dir_path: S) -> Self {
        Self {
            path: path::normalize(&dir_path.into()),
            scope,
        }
    }
}

impl Initializer for EnsureDir {
    fn key(&self) -> Option<String> {
        Some(format!("dir:{}", self.path))
    }

    fn scope(&self) -> Scope {
        self.scope
    }

    fn phase(&self) -> Phase {
        Phase::Directories
    }

    fn describe(&self) -> String {
        format!("directory {} ({})", self.path, self.scope.as_str())
    }

    fn is_setup(&self, project: &dyn Vfs, home: &dyn Vfs, _config: &Config) -> bool {
        let fs = match self.scope {
            Scope::Project => project,
            Scope::Home => home,
        };
        fs.is_dir(&self.path)
    }

    fn init(
        &self,
        project: &mut dyn Vfs,
        home: &mut dyn Vfs,
        _config: &Config,
    ) -> Result<InitResult> {
        let fs: &mut dyn Vfs = match self.scope {
            Scope::Project => &mut *project,
            Scope::Home => &mut *home,
        };

        let mut result = InitResult::new();
        if !fs.is_dir(&self.path) {
            fs.create_dir_all(&self.path)?;
            result.record_created(&self.path);
        }
        Ok(result)
    }
}
