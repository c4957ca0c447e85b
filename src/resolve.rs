//! Deduplication and ordering of initialization units
//!
//! Providers contribute units independently and in bulk; several tools
//! legitimately claim the same artifact (three assistants all reading
//! `AGENTS.md`). This engine turns the raw contribution list into the
//! execution plan: duplicates collapse to their first contribution and the
//! surviving units are grouped into phases.
//!
//! The whole pass is pure. It never touches a filesystem and cannot fail;
//! dropped duplicates are only visible in the debug log.

use std::collections::HashSet;

use crate::initializer::{Initializer, Scope};

/// Deduplicate and order contributed units.
///
/// Identity is the unit's `(scope, key)` pair; the first unit with a given
/// identity wins and later ones are dropped. Units without a key always
/// survive. Surviving units are then grouped by phase, directories first,
/// then files, then commands. The sort is stable, so within a phase the
/// contribution order is preserved exactly.
pub fn resolve(units: Vec<Box<dyn Initializer>>) -> Vec<Box<dyn Initializer>> {
    let mut seen: HashSet<(Scope, String)> = HashSet::new();
    let mut kept: Vec<Box<dyn Initializer>> = Vec::with_capacity(units.len());

    for unit in units {
        match unit.key() {
            Some(key) => {
                if seen.insert((unit.scope(), key)) {
                    kept.push(unit);
                } else {
                    log::debug!("skipping duplicate unit: {}", unit.describe());
                }
            }
            None => kept.push(unit),
        }
    }

    kept.sort_by_key(|unit| unit.phase());
    kept
}
