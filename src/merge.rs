//! Marker-bounded content merging
//!
//! The merger owns exactly one region of a managed file: the block between
//! the start and end sentinels. Everything before the block and everything
//! after it belongs to the user and is carried through byte-for-byte. The
//! merge itself is a pure string transformation; reading and writing files
//! is the caller's concern.
//!
//! Three shapes of input are handled:
//!
//! - no existing file: the output is just the canonical block,
//! - an existing file without markers: the block is appended after exactly
//!   one blank line,
//! - an existing file with a well-formed block: the enclosed content is
//!   replaced in place.
//!
//! Corrupt marker structures abort with a typed error instead of guessing;
//! a wrong guess here would destroy user content on the next run.

use crate::error::{Error, Result};
use crate::marker::{self, MarkerState, END_MARKER, START_MARKER};

/// How a merge changed the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The file did not exist before.
    Created,
    /// The file existed and its bytes changed.
    Updated,
    /// The file existed and already had exactly this content.
    Unchanged,
}

impl MergeOutcome {
    /// Whether the caller needs to write the result back.
    pub fn changed(&self) -> bool {
        !matches!(self, MergeOutcome::Unchanged)
    }
}

/// Result of a merge: the full new file content plus what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    pub content: String,
    pub outcome: MergeOutcome,
}

/// The block with canonical sentinels and single-newline body framing,
/// without a trailing newline.
fn framed(body: &str) -> String {
    format!("{}\n{}\n{}", START_MARKER, body, END_MARKER)
}

/// Merge `body` into the managed block of a file.
///
/// `existing` is `None` when the file does not exist yet. `path` is used
/// only for error reporting. Output sentinels are always the canonical
/// lowercase form, so a merge over a hand-recased block rewrites it.
pub fn merge(path: &str, existing: Option<&str>, body: &str) -> Result<Merged> {
    let text = match existing {
        None => {
            return Ok(Merged {
                content: format!("{}\n", framed(body)),
                outcome: MergeOutcome::Created,
            });
        }
        Some(text) => text,
    };

    match marker::locate(text) {
        MarkerState::Absent => {
            let trimmed = text.trim_end_matches('\n');
            let content = if trimmed.is_empty() {
                format!("{}\n", framed(body))
            } else {
                format!("{}\n\n{}\n", trimmed, framed(body))
            };
            Ok(Merged {
                content,
                outcome: MergeOutcome::Updated,
            })
        }
        MarkerState::Open { start, end } => {
            let prefix = &text[..start.start];
            let suffix = &text[end.end..];
            let content = format!("{}{}{}", prefix, framed(body), suffix);
            let outcome = if content == text {
                MergeOutcome::Unchanged
            } else {
                MergeOutcome::Updated
            };
            Ok(Merged { content, outcome })
        }
        MarkerState::OrphanEnd => Err(Error::OrphanEnd {
            path: path.to_string(),
        }),
        MarkerState::NestedStart => Err(Error::NestedStart {
            path: path.to_string(),
        }),
        MarkerState::MultipleStarts => Err(Error::MultipleStarts {
            path: path.to_string(),
        }),
        MarkerState::UnclosedStart => Err(Error::UnclosedStart {
            path: path.to_string(),
        }),
    }
}
