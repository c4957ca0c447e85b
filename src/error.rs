//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `spectr` application. It uses the `thiserror` library to create a
//! comprehensive `Error` enum that covers all anticipated failure modes,
//! providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures and ensure
//!   type safety.
//!
//! The `Error` enum covers:
//!
//! - Configuration parsing errors.
//! - The four marker-corruption conditions a managed file can be in
//!   (orphaned end, nested start, multiple starts, unclosed start). Each
//!   one names the offending file so the user can repair it by hand.
//! - Renderer failures while producing artifact content.
//! - Path normalization and root-escape errors.
//! - Filesystem operations.
//! - Interrupted runs.
//! - I/O errors.
//! - YAML and JSON serialization errors.

use thiserror::Error;

/// Main error type for spectr operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing the `.spectr.yaml` configuration file.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An end marker was found with no start marker preceding it.
    #[error("Corrupt managed block in {path}: orphaned end marker (no start marker precedes it)")]
    OrphanEnd { path: String },

    /// A second start marker was found before the first block was closed.
    #[error("Corrupt managed block in {path}: nested start marker inside an unclosed block")]
    NestedStart { path: String },

    /// Two or more start markers were found and none of them is closed.
    #[error("Corrupt managed block in {path}: multiple start markers without an end marker")]
    MultipleStarts { path: String },

    /// A start marker was found with no end marker anywhere after it.
    #[error("Corrupt managed block in {path}: start marker without a matching end marker")]
    UnclosedStart { path: String },

    /// A renderer failed while producing the content for an artifact.
    #[error("Render error for {path} ({kind} initializer): {message}")]
    Render {
        path: String,
        kind: String,
        message: String,
    },

    /// An artifact path resolved outside its scope root.
    #[error("Path escapes the target root: {path}")]
    PathEscape { path: String },

    /// An error occurred with a path-related operation.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// An error occurred with a filesystem operation.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// The run was cancelled before all initializers completed.
    #[error("Initialization interrupted")]
    Interrupted,

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
