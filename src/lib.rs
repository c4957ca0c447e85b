//! # spectr Library
//!
//! This library provides the core functionality for scaffolding AI coding
//! assistant configuration into a project. It is designed to be used by the
//! `spectr` command-line tool but can also be integrated into other
//! applications that need marker-safe file synchronization.
//!
//! ## Quick Example
//!
//! ```
//! use spectr::merge::{merge, MergeOutcome};
//!
//! // Create the managed block in a fresh file
//! let created = merge("CLAUDE.md", None, "Read spectr/AGENTS.md first.").unwrap();
//! assert_eq!(created.outcome, MergeOutcome::Created);
//! assert!(created.content.starts_with("<!-- spectr:start -->"));
//!
//! // Re-merging the same body changes nothing
//! let again = merge("CLAUDE.md", Some(&created.content), "Read spectr/AGENTS.md first.").unwrap();
//! assert_eq!(again.outcome, MergeOutcome::Unchanged);
//! ```
//!
//! ## Core Concepts
//!
//! The library is built around a few key concepts:
//!
//! - **Markers (`marker`, `merge`)**: a managed file carries one block
//!   delimited by sentinel comments; only that block is ever rewritten, and
//!   any hand-made corruption of the sentinels aborts the merge instead of
//!   risking user content.
//! - **Initializers (`initializer`)**: idempotent units of scaffolding work
//!   (ensure a directory, seed a file, sync a marker block, regenerate a
//!   command or skill file), each with a stable identity and a scope.
//! - **Providers (`providers`)**: one entry per supported tool, each
//!   contributing the initializers its artifacts need.
//! - **Resolution (`resolve`)**: collapses duplicate contributions
//!   (first-write-wins) and orders the survivors into safe phases.
//! - **Execution (`driver`, `filesystem`)**: runs the resolved plan
//!   sequentially against pluggable filesystems, accumulating a change
//!   report that survives mid-run failures.
//!
//! ## Execution Flow
//!
//! 1. Parse the optional `.spectr.yaml` (`config`).
//! 2. Collect `providers::base_initializers` plus each selected provider's
//!    units.
//! 3. `resolve::resolve` the combined list into an execution plan.
//! 4. `driver::execute` the plan against the project and home filesystems.
//! 5. Report the accumulated `InitResult`.

pub mod config;
pub mod defaults;
pub mod driver;
pub mod error;
pub mod filesystem;
pub mod initializer;
pub mod marker;
pub mod merge;
pub mod output;
pub mod path;
pub mod providers;
pub mod resolve;
pub mod suggestions;

#[cfg(test)]
mod sync_proptest;
