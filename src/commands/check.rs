//! # Check Command Implementation
//!
//! This module implements the `check` subcommand, a read-only report of how
//! much of the selected tooling is already scaffolded.
//!
//! ## Functionality
//!
//! - **Setup status**: every selected provider's units are probed with
//!   `IsSetup`; units whose artifacts are missing or whose managed block is
//!   not well-formed are listed.
//! - **Tree scan** (`--scan`): walks the project tree and classifies the
//!   marker structure of every file that contains a sentinel, flagging
//!   corrupt blocks the next `init` would refuse to touch.
//! - **JSON output** (`--json`): serializes the full report for scripting.
//!
//! The command never writes; a non-zero exit signals that something is
//! missing or corrupt.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use walkdir::WalkDir;

use spectr::config::Config;
use spectr::defaults;
use spectr::filesystem::DiskFs;
use spectr::marker::{self, MarkerState};
use spectr::output::{emoji, status_glyph, OutputConfig};
use spectr::providers::{base_initializers, Provider, Registry};

/// Directories never worth scanning for managed files.
const SCAN_SKIP: &[&str] = &[".git", "target", "node_modules", ".venv"];

/// Report setup status and scan for corrupt marker blocks
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Comma-separated provider names to check (defaults to all)
    #[arg(short, long, value_name = "NAMES", value_delimiter = ',')]
    pub providers: Vec<String>,

    /// Check every supported tool
    #[arg(long, conflicts_with = "providers")]
    pub all: bool,

    /// Scan the project tree for files with marker blocks
    #[arg(long)]
    pub scan: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Project directory to check (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Root directory for home-scoped artifacts
    #[arg(long, value_name = "DIR", env = "SPECTR_HOME")]
    pub home_dir: Option<PathBuf>,

    /// Path to the .spectr.yaml configuration file
    #[arg(short, long, value_name = "FILE", env = "SPECTR_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Setup status of one provider (or the base workspace).
#[derive(Debug, Serialize)]
struct ProviderStatus {
    name: String,
    display_name: String,
    ready: bool,
    /// Descriptions of the units that are not in place.
    missing: Vec<String>,
}

/// One scanned file carrying at least one sentinel.
#[derive(Debug, Serialize)]
struct ScanFinding {
    path: String,
    state: &'static str,
    corrupt: bool,
}

/// The full check report.
#[derive(Debug, Serialize)]
struct CheckReport {
    providers: Vec<ProviderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scan: Option<Vec<ScanFinding>>,
}

impl CheckReport {
    fn all_ready(&self) -> bool {
        self.providers.iter().all(|p| p.ready)
    }

    fn corrupt_count(&self) -> usize {
        self.scan
            .as_ref()
            .map(|findings| findings.iter().filter(|f| f.corrupt).count())
            .unwrap_or(0)
    }
}

/// Execute the `check` command.
pub fn execute(args: CheckArgs, output: &OutputConfig) -> Result<()> {
    let project_dir = match args.project_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let home_dir = args.home_dir.unwrap_or_else(defaults::default_home_root);

    let config = super::load_config(&project_dir, args.config.as_deref())?;
    let registry = Registry::builtin();

    let mut selected =
        super::select_providers(&registry, &args.providers, args.all, &config)?;
    if selected.is_empty() {
        // A status report over nothing is useless; default to everything.
        selected = registry.all().collect();
    }

    let project = DiskFs::new(&project_dir);
    let home = DiskFs::new(&home_dir);

    let mut statuses = vec![workspace_status(&project, &home, &config)];
    for provider in &selected {
        statuses.push(provider_status(*provider, &project, &home, &config));
    }

    let report = CheckReport {
        providers: statuses,
        scan: args.scan.then(|| scan_tree(&project_dir)),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, output);
    }

    if !report.all_ready() {
        anyhow::bail!("Some tools are not fully set up; run 'spectr init' to scaffold them");
    }
    if report.corrupt_count() > 0 {
        anyhow::bail!(
            "{} file(s) have corrupt marker blocks; repair them by hand before running 'spectr init'",
            report.corrupt_count()
        );
    }
    Ok(())
}

/// Status of the base workspace units.
fn workspace_status(project: &DiskFs, home: &DiskFs, config: &Config) -> ProviderStatus {
    let missing: Vec<String> = base_initializers(config)
        .iter()
        .filter(|unit| !unit.is_setup(project, home, config))
        .map(|unit| unit.describe())
        .collect();
    ProviderStatus {
        name: "workspace".to_string(),
        display_name: "spectr workspace".to_string(),
        ready: missing.is_empty(),
        missing,
    }
}

/// Status of one provider's units.
fn provider_status(
    provider: &dyn Provider,
    project: &DiskFs,
    home: &DiskFs,
    config: &Config,
) -> ProviderStatus {
    let missing: Vec<String> = provider
        .initializers(config)
        .iter()
        .filter(|unit| !unit.is_setup(project, home, config))
        .map(|unit| unit.describe())
        .collect();
    ProviderStatus {
        name: provider.name().to_string(),
        display_name: provider.display_name().to_string(),
        ready: missing.is_empty(),
        missing,
    }
}

/// Walk the project tree and classify every file containing a sentinel.
fn scan_tree(project_dir: &Path) -> Vec<ScanFinding> {
    let mut findings = Vec::new();

    let walker = WalkDir::new(project_dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            !(entry.file_type().is_dir()
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| SCAN_SKIP.contains(&name)))
        });

    for entry in walker.flatten() {
        if !entry.file_type().is_file() {
            continue;
        }
        // Binary or unreadable files cannot carry a managed block.
        let Ok(content) = std::fs::read_to_string(entry.path()) else {
            continue;
        };
        if !marker::contains_marker(&content) {
            continue;
        }

        let state = marker::locate(&content);
        let relative = entry
            .path()
            .strip_prefix(project_dir)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        findings.push(ScanFinding {
            path: relative,
            state: state_name(&state),
            corrupt: state.corruption().is_some(),
        });
    }

    findings
}

fn state_name(state: &MarkerState) -> &'static str {
    match state {
        MarkerState::Absent => "absent",
        MarkerState::Open { .. } => "open",
        other => other.corruption().unwrap_or("unknown"),
    }
}

fn print_report(report: &CheckReport, output: &OutputConfig) {
    println!("{} spectr check", emoji(output, "🔍", "::"));
    println!();

    for status in &report.providers {
        println!(
            "{} {} ({})",
            status_glyph(output, status.ready),
            status.display_name,
            status.name
        );
        for unit in &status.missing {
            println!("      missing: {}", unit);
        }
    }

    if let Some(findings) = &report.scan {
        println!();
        println!(
            "Scan: {} file(s) carry marker blocks, {} corrupt",
            findings.len(),
            report.corrupt_count()
        );
        for finding in findings {
            if finding.corrupt {
                println!(
                    "  {} {}: {}",
                    emoji(output, "⚠️", "[corrupt]"),
                    finding.path,
                    finding.state
                );
            } else {
                println!("  {} {}: ok", status_glyph(output, true), finding.path);
            }
        }
    }
}
