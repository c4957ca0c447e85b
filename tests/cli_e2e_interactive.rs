//! End-to-end tests for the `init --interactive` picker using TTY simulation.
//!
//! These tests use the `rexpect` crate to simulate an interactive terminal
//! session, which is required because `dialoguer` prompts need a real TTY.
//!
//! **Platform limitation**: `rexpect` only works on Unix-like systems
//! (Linux, macOS, WSL). These tests are automatically skipped on Windows.
//!
//! See: <https://github.com/console-rs/dialoguer/issues/95>

#![cfg(unix)]

use std::process::Command;

use rexpect::session::{spawn_command, PtySession};
use tempfile::TempDir;

/// Create a new PTY session running `spectr init -i` with the project and
/// home roots pointed at the given temporary directories.
fn spawn_interactive_init(
    project: &TempDir,
    home: &TempDir,
) -> Result<PtySession, rexpect::error::Error> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_spectr"));
    cmd.arg("init")
        .arg("--interactive")
        .current_dir(project.path())
        .env("SPECTR_HOME", home.path())
        .env_remove("SPECTR_CONFIG");

    spawn_command(cmd, Some(30_000)) // 30 second timeout
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_interactive_empty_selection_fails() {
    let project = TempDir::new().expect("Failed to create temp dir");
    let home = TempDir::new().expect("Failed to create temp dir");

    let mut session =
        spawn_interactive_init(&project, &home).expect("Failed to spawn interactive session");

    session
        .exp_string("Welcome to spectr!")
        .expect("Should see welcome message");
    session
        .exp_string("Select the tools to scaffold")
        .expect("Should see picker prompt");

    // Confirm without toggling anything.
    session.send_line("").expect("Failed to send enter");

    session
        .exp_string("No providers selected")
        .expect("Should see empty-selection error");

    session.exp_eof().expect("Process should exit");

    assert!(
        !project.path().join("CLAUDE.md").exists(),
        "Nothing should be scaffolded"
    );
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_interactive_select_first_tool() {
    let project = TempDir::new().expect("Failed to create temp dir");
    let home = TempDir::new().expect("Failed to create temp dir");

    let mut session =
        spawn_interactive_init(&project, &home).expect("Failed to spawn interactive session");

    session
        .exp_string("Welcome to spectr!")
        .expect("Should see welcome message");
    session
        .exp_string("Select the tools to scaffold")
        .expect("Should see picker prompt");

    // Toggle the first entry (claude) with space, then confirm.
    session.send(" ").expect("Failed to send space");
    session.flush().expect("Failed to flush");
    session.send_line("").expect("Failed to send enter");

    session
        .exp_string("Scaffolding 1 tool(s)")
        .expect("Should see run header");
    session
        .exp_string("file(s) written")
        .expect("Should see success summary");

    session.exp_eof().expect("Process should exit");

    assert!(
        project.path().join("CLAUDE.md").exists(),
        "Claude pointer file should be scaffolded"
    );
    assert!(
        project.path().join("spectr/AGENTS.md").exists(),
        "Workspace instructions should be scaffolded"
    );
}
