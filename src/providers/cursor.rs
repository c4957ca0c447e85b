//! Cursor provider

use crate::config::Config;
use crate::initializer::{EnsureDir, Initializer, Scope, SyncMarkerFile};

use super::{pointer, Provider};

/// Cursor: a managed rule file under `.cursor/rules`.
pub struct Cursor;

impl Provider for Cursor {
    fn name(&self) -> &'static str {
        "cursor"
    }

    fn display_name(&self) -> &'static str {
        "Cursor"
    }

    fn initializers(&self, _config: &Config) -> Vec<Box<dyn Initializer>> {
        vec![
            Box::new(EnsureDir::new(Scope::Project, ".cursor/rules")),
            Box::new(SyncMarkerFile::new(
                Scope::Project,
                ".cursor/rules/spectr.mdc",
                pointer(),
            )),
        ]
    }
}
