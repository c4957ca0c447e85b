//! # List Command Implementation
//!
//! This module implements the `list` subcommand, which prints the registry
//! of supported tools so users know what to pass to `init --providers`.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use spectr::output::{emoji, OutputConfig};
use spectr::providers::Registry;

/// List the supported tools
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit the list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListEntry {
    name: &'static str,
    display_name: &'static str,
}

/// Execute the `list` command.
pub fn execute(args: ListArgs, output: &OutputConfig) -> Result<()> {
    let registry = Registry::builtin();
    let entries: Vec<ListEntry> = registry
        .all()
        .map(|provider| ListEntry {
            name: provider.name(),
            display_name: provider.display_name(),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{} {} supported tool(s)",
        emoji(output, "📋", "::"),
        entries.len()
    );
    println!();
    for entry in &entries {
        println!("  {:<12} {}", entry.name, entry.display_name);
    }
    println!();
    println!("Run 'spectr init --providers <name,...>' to scaffold a selection.");
    Ok(())
}
