//! OpenAI Codex CLI provider

use crate::config::Config;
use crate::initializer::{EnsureDir, Initializer, Scope, SyncMarkerFile, WriteCommand};

use super::{pointer, render, Provider};

/// Codex CLI: project instructions plus global prompts.
///
/// Codex has no per-project prompt directory; its custom prompts live
/// under `~/.codex/prompts`, so the command set is home-scoped.
pub struct Codex;

impl Provider for Codex {
    fn name(&self) -> &'static str {
        "codex"
    }

    fn display_name(&self) -> &'static str {
        "OpenAI Codex CLI"
    }

    fn initializers(&self, _config: &Config) -> Vec<Box<dyn Initializer>> {
        vec![
            Box::new(SyncMarkerFile::new(Scope::Project, "AGENTS.md", pointer())),
            Box::new(EnsureDir::new(Scope::Home, ".codex/prompts")),
            Box::new(WriteCommand::new(
                Scope::Home,
                ".codex/prompts",
                "spectr-",
                render::command_entries(),
            )),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory() {
        let units = Codex.initializers(&Config::default());
        let keys: Vec<String> = units.iter().filter_map(|u| u.key()).collect();
        assert_eq!(
            keys,
            vec![
                "config:AGENTS.md",
                "dir:.codex/prompts",
                "command:.codex/prompts:spectr-",
            ]
        );
    }

    #[test]
    fn test_prompts_are_home_scoped() {
        let units = Codex.initializers(&Config::default());
        let scopes: Vec<Scope> = units.iter().map(|u| u.scope()).collect();
        assert_eq!(scopes, vec![Scope::Project, Scope::Home, Scope::Home]);
    }
}
