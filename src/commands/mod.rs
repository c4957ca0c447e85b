//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `spectr` command-line tool. Each subcommand is defined in its own file to
//! keep the logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and
//!   options, derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic.
//!
//! The `execute` function is the main entry point for the command and is
//! responsible for orchestrating the necessary operations, calling into the
//! `spectr` library to perform the core logic.

pub mod check;
pub mod completions;
pub mod init;
pub mod list;

use std::fs;
use std::path::Path;

use anyhow::Result;

use spectr::config::Config;
use spectr::defaults;
use spectr::providers::{Provider, Registry};
use spectr::suggestions;

/// Load the project configuration.
///
/// An explicitly given path must exist; the default `.spectr.yaml` inside
/// the project directory is optional and its absence yields the defaults.
pub(crate) fn load_config(project_dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(suggestions::config_not_found(path));
            }
            path.to_path_buf()
        }
        None => {
            let path = defaults::default_config_path(project_dir);
            if !path.exists() {
                return Ok(Config::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)?;
    Ok(Config::from_yaml(&content)?)
}

/// Resolve the provider selection from flags and config.
///
/// Explicit `--providers` names win over the config file's list; `--all`
/// selects the whole registry. Names are matched case-insensitively and an
/// unknown name fails with a did-you-mean hint.
pub(crate) fn select_providers<'r>(
    registry: &'r Registry,
    requested: &[String],
    all: bool,
    config: &Config,
) -> Result<Vec<&'r dyn Provider>> {
    if all {
        return Ok(registry.all().collect());
    }

    let names: &[String] = if requested.is_empty() {
        &config.providers
    } else {
        requested
    };

    let mut selected = Vec::with_capacity(names.len());
    for name in names {
        let normalized = name.trim().to_lowercase();
        match registry.get(&normalized) {
            Some(provider) => selected.push(provider),
            None => return Err(suggestions::unknown_provider(&normalized, &registry.names())),
        }
    }
    Ok(selected)
}
