//! Skill file generation

use crate::config::Config;
use crate::error::Result;
use crate::filesystem::Vfs;
use crate::path;

use super::{render_error, InitResult, Initializer, Phase, Renderer, Scope};

const KIND: &str = "skill";

/// Generates a wholly owned skill file, regenerating it on drift.
///
/// Skills live inside their own directory (created in the directories
/// phase); this unit owns only the file itself.
pub struct WriteSkill {
    path: String,
    scope: Scope,
    render: Renderer,
}

impl WriteSkill {
    pub fn new<S: Into<String>>(scope: Scope, file_path: S, render: Renderer) -> Self {
        Self {
            path: path::normalize(&file_path.into()),
            scope,
            render,
        }
    }
}

impl Initializer for WriteSkill {
    fn key(&self) -> Option<String> {
        Some(format!("{}:{}", KIND, self.path))
    }

    fn scope(&self) -> Scope {
        self.scope
    }

    fn phase(&self) -> Phase {
        Phase::Commands
    }

    fn describe(&self) -> String {
        format!("skill {} ({})", self.path, self.scope.as_str())
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

        let content = (self.render)(config).map_err(|e| render_error(&self.path, KIND, e))?;

        let mut result = InitResult::new();
        match fs.read_to_string(&self.path)? {
            Some(existing) if existing == content => {}
            Some(_) => {
                fs.write(&self.path, &content)?;
                result.record_updated(&self.path);
            }
            None => {
                fs.write(&self.path, &content)?;
                result.record_created(&self.path);
            }
        }
        Ok(result)
    }
}
