//! # Init Command Implementation
//!
//! This module implements the `init` subcommand, which scaffolds assistant
//! configuration artifacts into the project (and, for some tools, the home
//! directory).
//!
//! ## Functionality
//!
//! - **Provider selection**: via `--providers`, `--all`, an interactive
//!   picker, or the `providers` list in `.spectr.yaml`.
//! - **Dry run**: stages every write in memory and reports what would
//!   change without touching the filesystem.
//! - **Partial reporting**: when a unit fails, everything already written
//!   is still reported before the error.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, MultiSelect};

use spectr::defaults;
use spectr::driver::{self, CancelFlag, RunOutcome};
use spectr::filesystem::{DiskFs, OverlayFs};
use spectr::output::{emoji, OutputConfig};
use spectr::providers::{base_initializers, Provider, Registry};
use spectr::resolve::resolve;
use spectr::suggestions;

/// Scaffold assistant configuration into the project
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Comma-separated provider names to scaffold
    #[arg(short, long, value_name = "NAMES", value_delimiter = ',')]
    pub providers: Vec<String>,

    /// Scaffold every supported tool
    #[arg(long, conflicts_with = "providers")]
    pub all: bool,

    /// Pick providers from an interactive menu
    #[arg(short, long, conflicts_with_all = ["providers", "all"])]
    pub interactive: bool,

    /// Project directory to scaffold (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Root directory for home-scoped artifacts
    #[arg(long, value_name = "DIR", env = "SPECTR_HOME")]
    pub home_dir: Option<PathBuf>,

    /// Path to the .spectr.yaml configuration file
    #[arg(short, long, value_name = "FILE", env = "SPECTR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Show what would be written without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `init` command.
pub fn execute(args: InitArgs, output: &OutputConfig) -> Result<()> {
    let project_dir = match args.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let home_dir = args.home_dir.unwrap_or_else(defaults::default_home_root);

    let config = super::load_config(&project_dir, args.config.as_deref())?;
    let registry = Registry::builtin();

    let selected = if args.interactive {
        pick_interactive(&registry)?
    } else {
        super::select_providers(&registry, &args.providers, args.all, &config)?
    };
    if selected.is_empty() {
        return Err(suggestions::no_providers_selected());
    }

    if !args.quiet {
        println!(
            "{} Scaffolding {} tool(s) into {}",
            emoji(output, "🎯", "=>"),
            selected.len(),
            project_dir.display()
        );
        if args.dry_run {
            println!(
                "{} DRY RUN MODE - No changes will be made",
                emoji(output, "🔎", "--")
            );
        }
        println!();
    }

    let mut units = base_initializers(&config);
    for provider in &selected {
        units.extend(provider.initializers(&config));
    }
    let plan = resolve(units);
    log::info!("executing {} units after resolution", plan.len());

    let mut project = DiskFs::new(&project_dir);
    let mut home = DiskFs::new(&home_dir);
    let cancel = CancelFlag::new();

    let outcome = if args.dry_run {
        let mut staged_project = OverlayFs::new(&project);
        let mut staged_home = OverlayFs::new(&home);
        driver::execute(
            &plan,
            &mut staged_project,
            &mut staged_home,
            &config,
            &cancel,
        )
    } else {
        driver::execute(&plan, &mut project, &mut home, &config, &cancel)
    };

    if !args.quiet {
        report(&outcome, output, args.dry_run);
    }

    finish(outcome)
}

/// Interactive provider picker.
fn pick_interactive(registry: &Registry) -> Result<Vec<&dyn Provider>> {
    let providers: Vec<&dyn Provider> = registry.all().collect();
    let labels: Vec<String> = providers
        .iter()
        .map(|p| format!("{} ({})", p.display_name(), p.name()))
        .collect();

    println!("Welcome to spectr!");
    let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Select the tools to scaffold (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;

    Ok(chosen.into_iter().map(|index| providers[index]).collect())
}

/// Print what the run changed, including partial progress after a failure.
fn report(outcome: &RunOutcome, output: &OutputConfig, dry_run: bool) {
    let result = &outcome.result;
    for path in &result.created {
        println!("  {} {}", emoji(output, "✨", "[new]"), path);
    }
    for path in &result.updated {
        println!("  {} {}", emoji(output, "♻️", "[upd]"), path);
    }

    if outcome.is_ok() {
        if result.is_empty() {
            println!(
                "{} Everything already up to date",
                emoji(output, "✅", "[ok]")
            );
        } else if dry_run {
            println!(
                "{} {} file(s) would change",
                emoji(output, "✅", "[ok]"),
                result.len()
            );
        } else {
            println!(
                "{} {} file(s) written",
                emoji(output, "✅", "[ok]"),
                result.len()
            );
        }
    } else if !result.is_empty() {
        println!(
            "{} Initialization failed after {} change(s)",
            emoji(output, "❌", "[failed]"),
            result.len()
        );
    }
}

/// Translate the run outcome into the process result, attaching a repair
/// hint for marker corruption.
fn finish(outcome: RunOutcome) -> Result<()> {
    match outcome.error {
        None => Ok(()),
        Some(error) => match suggestions::repair_hint(&error) {
            Some(hint) => Err(anyhow::anyhow!("{error}\n{hint}")),
            None => Err(error.into()),
        },
    }
}
