//! Sentinel detection for managed blocks
//!
//! A managed file carries at most one spectr block, delimited by an HTML
//! comment pair. Detection is case-insensitive so hand-edited casing does
//! not orphan a block, but output always uses the canonical lowercase
//! sentinels below.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Canonical start sentinel written to managed files.
pub const START_MARKER: &str = "<!-- spectr:start -->";

/// Canonical end sentinel written to managed files.
pub const END_MARKER: &str = "<!-- spectr:end -->";

static START_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!-- spectr:start -->").unwrap());

static END_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!-- spectr:end -->").unwrap());

/// Classification of a buffer with respect to the managed block.
///
/// The `Open` spans are byte ranges of the sentinel occurrences themselves,
/// so the merger can splice the enclosed region without re-scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerState {
    /// No sentinels anywhere in the buffer.
    Absent,
    /// Exactly one well-formed block. The first start sentinel and the
    /// first end sentinel after it are authoritative; any later material,
    /// including further well-formed blocks, is suffix.
    Open {
        start: Range<usize>,
        end: Range<usize>,
    },
    /// An end sentinel appears before any start sentinel.
    OrphanEnd,
    /// A second start sentinel appears before the first block is closed.
    NestedStart,
    /// Two or more start sentinels, none of them closed.
    MultipleStarts,
    /// A single start sentinel with no end sentinel after it.
    UnclosedStart,
}

impl MarkerState {
    /// Short description of the corruption, or `None` for usable states.
    pub fn corruption(&self) -> Option<&'static str> {
        match self {
            MarkerState::Absent | MarkerState::Open { .. } => None,
            MarkerState::OrphanEnd => Some("orphaned end marker"),
            MarkerState::NestedStart => Some("nested start marker"),
            MarkerState::MultipleStarts => Some("multiple start markers"),
            MarkerState::UnclosedStart => Some("unclosed start marker"),
        }
    }
}

/// Check whether a buffer contains any sentinel at all.
///
/// Cheap prefilter for tree scans; `locate` gives the full classification.
pub fn contains_marker(buffer: &str) -> bool {
    START_PATTERN.is_match(buffer) || END_PATTERN.is_match(buffer)
}

/// Classify a buffer's marker structure.
///
/// Sentinels are recognized anywhere in the buffer, not only on their own
/// lines. The first start sentinel and the first end sentinel after it
/// define the block; every other combination is one of the corrupt states.
pub fn locate(buffer: &str) -> MarkerState {
    let starts: Vec<Range<usize>> = START_PATTERN
        .find_iter(buffer)
        .map(|m| m.range())
        .collect();
    let ends: Vec<Range<usize>> = END_PATTERN.find_iter(buffer).map(|m| m.range()).collect();

    let first_start = match starts.first() {
        Some(range) => range.clone(),
        None => {
            return if ends.is_empty() {
                MarkerState::Absent
            } else {
                MarkerState::OrphanEnd
            };
        }
    };

    // An end ahead of the first start has no start to pair with.
    if let Some(first_end) = ends.first() {
        if first_end.start < first_start.start {
            return MarkerState::OrphanEnd;
        }
    }

    match ends.iter().find(|e| e.start >= first_start.end) {
        None => {
            if starts.len() > 1 {
                MarkerState::MultipleStarts
            } else {
                MarkerState::UnclosedStart
            }
        }
        Some(closing) => {
            if starts.iter().skip(1).any(|s| s.start < closing.start) {
                MarkerState::NestedStart
            } else {
                MarkerState::Open {
                    start: first_start,
                    end: closing.clone(),
                }
            }
        }
    }
}
