//! Pointer-only providers
//!
//! Most supported tools need exactly one managed instruction file, so
//! they share one implementation parameterized by a table entry. Note
//! that several tools read the same file; their entries collide on
//! purpose and the resolve engine keeps whichever provider ranks first.

use crate::config::Config;
use crate::initializer::{EnsureDir, Initializer, Scope};
use crate::initializer::SyncMarkerFile;

use super::{pointer, Provider};

/// A tool whose whole integration is one managed instruction file.
#[derive(Debug, Clone, Copy)]
pub struct PointerProvider {
    name: &'static str,
    display_name: &'static str,
    file: &'static str,
}

const POINTER_PROVIDERS: &[PointerProvider] = &[
    PointerProvider {
        name: "gemini",
        display_name: "Gemini CLI",
        file: "GEMINI.md",
    },
    PointerProvider {
        name: "copilot",
        display_name: "GitHub Copilot",
        file: ".github/copilot-instructions.md",
    },
    PointerProvider {
        name: "windsurf",
        display_name: "Windsurf",
        file: ".windsurf/rules/spectr.md",
    },
    PointerProvider {
        name: "cline",
        display_name: "Cline",
        file: ".clinerules/spectr.md",
    },
    PointerProvider {
        name: "roo",
        display_name: "Roo Code",
        file: ".roo/rules/spectr.md",
    },
    PointerProvider {
        name: "zed",
        display_name: "Zed",
        file: "AGENTS.md",
    },
    PointerProvider {
        name: "opencode",
        display_name: "opencode",
        file: "AGENTS.md",
    },
    PointerProvider {
        name: "jules",
        display_name: "Jules",
        file: "AGENTS.md",
    },
    PointerProvider {
        name: "amp",
        display_name: "Amp",
        file: "AGENT.md",
    },
    PointerProvider {
        name: "qwen",
        display_name: "Qwen Code",
        file: "QWEN.md",
    },
    PointerProvider {
        name: "kilo",
        display_name: "Kilo Code",
        file: ".kilocode/rules/spectr.md",
    },
    PointerProvider {
        name: "goose",
        display_name: "Goose",
        file: ".goosehints",
    },
];

/// The built-in pointer-provider table, in priority order.
pub fn pointer_providers() -> Vec<PointerProvider> {
    POINTER_PROVIDERS.to_vec()
}

impl Provider for PointerProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn display_name(&self) -> &'static str {
        self.display_name
    }

    fn initializers(&self, _config: &Config) -> Vec<Box<dyn Initializer>> {
        let mut units: Vec<Box<dyn Initializer>> = Vec::with_capacity(2);
        if let Some((parent, _)) = self.file.rsplit_once('/') {
            units.push(Box::new(EnsureDir::new(Scope::Project, parent)));
        }
        units.push(Box::new(SyncMarkerFile::new(
            Scope::Project,
            self.file,
            pointer(),
        )));
        units
    }
}
