//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use spectr::output::OutputConfig;

use crate::commands;

/// spectr - Scaffold AI assistant configuration without clobbering your files
#[derive(Parser, Debug)]
#[command(name = "spectr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scaffold assistant configuration into the project
    Init(commands::init::InitArgs),

    /// Report setup status and scan for corrupt marker blocks
    Check(commands::check::CheckArgs),

    /// List the supported tools
    List(commands::list::ListArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        env_logger::Builder::new()
            .parse_filters(&self.log_level)
            .init();

        let output = OutputConfig::from_env_and_flag(&self.color);

        match self.command {
            Commands::Init(args) => commands::init::execute(args, &output),
            Commands::Check(args) => commands::check::execute(args, &output),
            Commands::List(args) => commands::list::execute(args, &output),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}
