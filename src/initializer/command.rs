//! Slash-command file generation

use crate::config::Config;
use crate::error::Result;
use crate::filesystem::Vfs;
use crate::path;

use super::{render_error, InitResult, Initializer, Phase, Renderer, Scope};

const KIND: &str = "command";

/// One command file inside a [`WriteCommand`] set.
pub struct CommandEntry {
    /// Bare command name, without prefix or extension.
    pub name: String,
    pub render: Renderer,
}

impl CommandEntry {
    pub fn new<S: Into<String>>(name: S, render: Renderer) -> Self {
        Self {
            name: name.into(),
            render,
        }
    }
}

/// Generates a prefixed set of slash-command files into one directory.
///
/// Command files are wholly owned by spectr and regenerated whenever their
/// rendered content drifts. The dedup key covers the directory plus the
/// filename prefix, so differently prefixed sets can share a directory.
pub struct WriteCommand {
    dir: String,
    prefix: String,
    scope: Scope,
    entries: Vec<CommandEntry>,
}

impl WriteCommand {
    pub fn new<S: Into<String>, P: Into<String>>(
        scope: Scope,
        dir: S,
        prefix: P,
        entries: Vec<CommandEntry>,
    ) -> Self {
        Self {
            dir: path::normalize(&dir.into()),
            prefix: prefix.into(),
            scope,
            entries,
        }
    }

    fn entry_path(&self, entry: &CommandEntry) -> String {
        format!("{}/{}{}.md", self.dir, self.prefix, entry.name)
    }
}

impl Initializer for WriteCommand {
    fn key(&self) -> Option<String> {
        Some(format!("{}:{}:{}", KIND, self.dir, self.prefix))
    }

    fn scope(&self) -> Scope {
        self.scope
    }

    fn phase(&self) -> Phase {
        Phase::Commands
    }

    fn describe(&self) -> String {
        format!(
            "commands {}/{}* ({})",
            self.dir,
            self.prefix,
            self.scope.as_str()
        )
    }

    fn is_setup(&self, project: &dyn Vfs, home: &dyn Vfs, _config: &Config) -> bool {
        let fs = match self.scope {
            Scope::Project => project,
            Scope::Home => home,
        };
        self.entries.iter().all(|e| fs.exists(&self.entry_path(e)))
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
        for entry in &self.entries {
            let file_path = self.entry_path(entry);
            let content =
                (entry.render)(config).map_err(|e| render_error(&file_path, KIND, e))?;

            match fs.read_to_string(&file_path)? {
                Some(existing) if existing == content => {}
                Some(_) => {
                    fs.write(&file_path, &content)?;
                    result.record_updated(&file_path);
                }
                None => {
                    fs.write(&file_path, &content)?;
                    result.record_created(&file_path);
                }
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::filesystem::MemoryFs;

    fn fixed(content: &'static str) -> Renderer {
        Box::new(move |_| Ok(content.to_string()))
    }

    fn sample_set() -> WriteCommand {
        WriteCommand::new(
            Scope::Project,
            ".claude/commands",
            "spectr-",
            vec![
                CommandEntry::new("proposal", fixed("proposal body\n")),
                CommandEntry::new("apply", fixed("apply body\n")),
            ],
        )
    }

    #[test]
    fn test_generates_all_command_files() {
        let mut project = MemoryFs::new();
        let mut home = MemoryFs::new();

        let result = sample_set()
            .init(&mut project, &mut home, &Config::default())
            .unwrap();

        assert_eq!(
            result.created,
            vec![
                ".claude/commands/spectr-proposal.md",
                ".claude/commands/spectr-apply.md"
            ]
        );
        assert_eq!(
            project.contents(".claude/commands/spectr-apply.md"),
            Some("apply body\n")
        );
    }

    #[test]
    fn test_unchanged_files_report_nothing() {
        let mut project = MemoryFs::new();
        let mut home = MemoryFs::new();
        let set = sample_set();

        set.init(&mut project, &mut home, &Config::default())
            .unwrap();
        let result = set
            .init(&mut project, &mut home, &Config::default())
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_drifted_file_is_regenerated() {
        let mut project = MemoryFs::new();
        let mut home = MemoryFs::new();
        project.add_file(".claude/commands/spectr-proposal.md", "hand edited\n");

        let result = sample_set()
            .init(&mut project, &mut home, &Config::default())
            .unwrap();

        assert_eq!(result.updated, vec![".claude/commands/spectr-proposal.md"]);
        assert_eq!(result.created, vec![".claude/commands/spectr-apply.md"]);
        assert_eq!(
            project.contents(".claude/commands/spectr-proposal.md"),
            Some("proposal body\n")
        );
    }

    #[test]
    fn test_home_scope() {
        let mut project = MemoryFs::new();
        let mut home = MemoryFs::new();
        let set = WriteCommand::new(
            Scope::Home,
            ".codex/prompts",
            "spectr-",
            vec![CommandEntry::new("apply", fixed("body\n"))],
        );

        set.init(&mut project, &mut home, &Config::default())
            .unwrap();
        assert!(home.exists(".codex/prompts/spectr-apply.md"));
        assert!(project.is_empty());
    }

    #[test]
    fn test_render_failure_names_the_file() {
        let mut project = MemoryFs::new();
        let mut home = MemoryFs::new();
        let failing: Renderer = Box::new(|_| {
            Err(Error::Filesystem {
                message: "broken".to_string(),
            })
        });
        let set = WriteCommand::new(
            Scope::Project,
            ".claude/commands",
            "spectr-",
            vec![CommandEntry::new("archive", failing)],
        );

        let err = set
            .init(&mut project, &mut home, &Config::default())
            .unwrap_err();
        match err {
            Error::Render { path, kind, .. } => {
                assert_eq!(path, ".claude/commands/spectr-archive.md");
                assert_eq!(kind, "command");
            }
            other => panic!("expected Render, got {:?}", other),
        }
    }

    #[test]
    fn test_is_setup_requires_every_entry() {
        let mut project = MemoryFs::new();
        let home = MemoryFs::new();
        let set = sample_set();
        let config = Config::default();

        assert!(!set.is_setup(&project, &home, &config));
        project.add_file(".claude/commands/spectr-proposal.md", "x");
        assert!(!set.is_setup(&project, &home, &config));
        project.add_file(".claude/commands/spectr-apply.md", "x");
        assert!(set.is_setup(&project, &home, &config));
    }

    #[test]
    fn test_key_covers_dir_and_prefix() {
        let set = sample_set();
        assert_eq!(
            set.key(),
            Some("command:.claude/commands:spectr-".to_string())
        );
        assert_eq!(set.phase(), Phase::Commands);
    }
}
