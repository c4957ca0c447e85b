//! # Error Suggestions
//!
//! This module provides helper functions for generating helpful error
//! messages with hints and suggestions. Following CLI recommendations,
//! errors should tell users what went wrong AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("Unknown provider: {}", name);
//!
//! // Use:
//! return Err(suggestions::unknown_provider(name, &registry.names()));
//! ```

use std::path::Path;

use crate::error::Error;

/// Generate an error for when an explicitly given config file is missing.
///
/// Includes hints about:
/// - Creating a new config file
/// - Using the -c/--config flag
/// - Using the SPECTR_CONFIG environment variable
pub fn config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Configuration file not found: {path}\n\n\
         hint: Create a .spectr.yaml file in your project root\n\
         hint: Use -c/--config to specify a different path\n\
         hint: Set SPECTR_CONFIG environment variable",
        path = path.display()
    )
}

/// Generate an error for an unknown provider name.
///
/// Includes a did-you-mean suggestion and the list of valid names.
pub fn unknown_provider(name: &str, known: &[&str]) -> anyhow::Error {
    let suggestion = find_similar(name, known);
    let did_you_mean = suggestion
        .map(|s| format!("\nhint: Did you mean '{s}'?"))
        .unwrap_or_default();

    anyhow::anyhow!(
        "Unknown provider: {name}{did_you_mean}\n\n\
         Valid providers are: {names}\n\
         hint: Run 'spectr list' to see every supported tool",
        names = known.join(", ")
    )
}

/// Generate an error for a run with nothing to scaffold.
///
/// Includes hints about every way to select providers.
pub fn no_providers_selected() -> anyhow::Error {
    anyhow::anyhow!(
        "No providers selected\n\n\
         hint: Use --providers <name,...> to pick tools explicitly\n\
         hint: Use --all to scaffold every supported tool\n\
         hint: Use --interactive to pick from a menu\n\
         hint: Or list providers in .spectr.yaml"
    )
}

/// A repair hint for marker-corruption errors, if this is one.
///
/// The library error already names the file and the corruption; the hint
/// tells the user what edit makes the file mergeable again.
pub fn repair_hint(error: &Error) -> Option<&'static str> {
    match error {
        Error::OrphanEnd { .. } => Some(
            "hint: Delete the stray end marker line, or add a start marker above the content it should manage",
        ),
        Error::NestedStart { .. } => Some(
            "hint: Remove the inner start marker so the block has exactly one start and one end",
        ),
        Error::MultipleStarts { .. } => {
            Some("hint: Keep one start marker and close it with an end marker")
        }
        Error::UnclosedStart { .. } => {
            Some("hint: Add an end marker after the managed content")
        }
        _ => None,
    }
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0usize; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}
