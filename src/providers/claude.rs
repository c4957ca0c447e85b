//! Claude Code provider

use crate::config::Config;
use crate::initializer::{EnsureDir, Initializer, Scope, SyncMarkerFile, WriteCommand, WriteSkill};

use super::{pointer, render, Provider};

/// Claude Code: project instructions, slash commands and a skill.
pub struct Claude;

impl Provider for Claude {
    fn name(&self) -> &'static str {
        "claude"
    }

    fn display_name(&self) -> &'static str {
        "Claude Code"
    }

    fn initializers(&self, _config: &Config) -> Vec<Box<dyn Initializer>> {
        vec![
            Box::new(SyncMarkerFile::new(Scope::Project, "CLAUDE.md", pointer())),
            Box::new(EnsureDir::new(Scope::Project, ".claude/commands")),
            Box::new(WriteCommand::new(
                Scope::Project,
                ".claude/commands",
                "spectr-",
                render::command_entries(),
            )),
            Box::new(EnsureDir::new(Scope::Project, ".claude/skills/spectr")),
            Box::new(WriteSkill::new(
                Scope::Project,
                ".claude/skills/spectr/SKILL.md",
                Box::new(|config: &Config| Ok(render::skill_body(config))),
            )),
        ]
    }
}
