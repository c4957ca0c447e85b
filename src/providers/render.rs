//! Rendered artifact content
//!
//! Plain string builders for everything spectr writes: the instruction
//! pointer block, the workflow document, the project stub, slash-command
//! bodies and the skill body. There is no template engine; every renderer
//! is a pure function of the config, which is what makes runs idempotent.

use crate::config::Config;
use crate::initializer::CommandEntry;

/// Workflow commands every command-capable tool gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Proposal,
    Apply,
    Archive,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::Proposal, Command::Apply, Command::Archive];

    /// Bare command name; file names add the `spectr-` prefix around it.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Proposal => "proposal",
            Command::Apply => "apply",
            Command::Archive => "archive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Proposal => "Draft a spectr change proposal",
            Command::Apply => "Implement an approved spectr change",
            Command::Archive => "Archive a deployed spectr change",
        }
    }
}

/// Body of the instruction pointer block shared by every instruction file.
pub fn instruction_pointer(config: &Config) -> String {
    format!(
        "# spectr instructions\n\
         \n\
         This project manages changes through spectr specs.\n\
         \n\
         Before touching code:\n\
         \n\
         1. Read `{agents}` for the full workflow.\n\
         2. Check `{changes}/` for an open proposal covering your task.\n\
         3. Check `{specs}/` for the current behavior contracts.\n\
         \n\
         If your tool exposes the spectr commands, use them to draft,\n\
         implement and archive changes.",
        agents = config.agents_doc(),
        changes = config.changes_dir(),
        specs = config.specs_dir(),
    )
}

/// Body of the managed block in the workspace workflow document.
pub fn workflow_doc(config: &Config) -> String {
    format!(
        "# spectr workflow\n\
         \n\
         spectr keeps specs and code in lockstep. Specs describe what the\n\
         system does; change proposals describe what should differ. Code\n\
         changes land together with the spec change that justifies them.\n\
         \n\
         ## Layout\n\
         \n\
         - `{project}` - project conventions, owned by you\n\
         - `{specs}/` - ratified capability specs, one directory per capability\n\
         - `{changes}/` - in-flight proposals, one directory per change\n\
         \n\
         ## The loop\n\
         \n\
         1. **Propose.** Create `{changes}/<name>/` with `proposal.md` (why),\n\
         \x20  `tasks.md` (how) and spec deltas under `specs/`.\n\
         2. **Apply.** Implement the tasks in order, checking them off as\n\
         \x20  they land.\n\
         3. **Archive.** After deployment, fold the deltas into `{specs}/`\n\
         \x20  and move the change directory to `{changes}/archive/`.\n\
         \n\
         ## Rules\n\
         \n\
         - Never edit a ratified spec directly; go through a change.\n\
         - Keep proposals small enough to review in one sitting.\n\
         - A task is done only when its tests pass.",
        project = config.project_doc(),
        specs = config.specs_dir(),
        changes = config.changes_dir(),
    )
}

/// The user-owned project context stub, written once.
pub fn project_stub(config: &Config) -> String {
    format!(
        "# Project Context\n\
         \n\
         Describe what an assistant needs to know about this project:\n\
         tech stack, conventions, constraints, and anything the specs in\n\
         `{specs}/` do not capture.\n\
         \n\
         ## Tech stack\n\
         \n\
         (fill in)\n\
         \n\
         ## Conventions\n\
         \n\
         (fill in)\n",
        specs = config.specs_dir(),
    )
}

/// Body of one slash-command file.
pub fn command_body(config: &Config, command: Command) -> String {
    let steps = match command {
        Command::Proposal => format!(
            "Draft a change proposal under `{changes}/`.\n\
             \n\
             1. Pick a short kebab-case name for the change.\n\
             2. Create `proposal.md` explaining why the change is needed\n\
             \x20  and what it affects.\n\
             3. Create `tasks.md` with an ordered checklist of\n\
             \x20  implementation steps.\n\
             4. Add spec deltas under `specs/`, one file per affected\n\
             \x20  capability.\n\
             \n\
             Stop after drafting; do not implement anything yet.",
            changes = config.changes_dir(),
        ),
        Command::Apply => format!(
            "Implement the tasks of an approved change from `{changes}/`.\n\
             \n\
             1. Read `proposal.md` and the spec deltas of the change.\n\
             2. Work through `tasks.md` in order, checking items off as\n\
             \x20  they land.\n\
             3. Keep edits scoped to what the proposal covers.",
            changes = config.changes_dir(),
        ),
        Command::Archive => format!(
            "Archive a change whose code has shipped.\n\
             \n\
             1. Fold the change's spec deltas into `{specs}/`.\n\
             2. Move the change directory into `{changes}/archive/`.\n\
             3. Leave the rest of the tree untouched.",
            specs = config.specs_dir(),
            changes = config.changes_dir(),
        ),
    };

    format!(
        "---\ndescription: {description}\n---\n\n{steps}\n",
        description = command.description(),
        steps = steps,
    )
}

/// Body of the Claude skill file.
pub fn skill_body(config: &Config) -> String {
    format!(
        "---\n\
         name: spectr\n\
         description: Spec-driven change workflow for this project\n\
         ---\n\
         \n\
         # spectr\n\
         \n\
         Use this skill when asked to plan, implement or archive a change.\n\
         \n\
         Read `{agents}` for the full workflow. In short: propose under\n\
         `{changes}/`, implement against the proposal, and archive into\n\
         `{specs}/` once deployed.\n",
        agents = config.agents_doc(),
        changes = config.changes_dir(),
        specs = config.specs_dir(),
    )
}

/// The standard command set as initializer entries.
pub fn command_entries() -> Vec<CommandEntry> {
    Command::ALL
        .iter()
        .map(|command| {
            let command = *command;
            CommandEntry::new(
                command.name(),
                Box::new(move |config: &Config| Ok(command_body(config, command))),
            )
        })
        .collect()
}
