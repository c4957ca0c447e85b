//! Property-based tests for the marker merge and resolve cores.
//!
//! These tests use proptest to generate random inputs and verify that the
//! synchronization invariants hold for all possible inputs, not just the
//! hand-picked cases in the per-module test suites.

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use crate::config::Config;
    use crate::error::Result;
    use crate::filesystem::Vfs;
    use crate::initializer::{InitResult, Initializer, Phase, Scope};
    use crate::marker::{self, MarkerState, END_MARKER, START_MARKER};
    use crate::merge::{merge, MergeOutcome};
    use crate::path;
    use crate::resolve::resolve;

    /// Text that cannot accidentally contain a sentinel.
    fn safe_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 #*.\n-]{0,200}"
    }

    /// The start sentinel in an arbitrary casing.
    fn cased_start() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("<!-- spectr:start -->"),
            Just("<!-- SPECTR:START -->"),
            Just("<!-- Spectr:Start -->"),
            Just("<!-- sPeCtR:StArT -->"),
        ]
    }

    /// The end sentinel in an arbitrary casing.
    fn cased_end() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("<!-- spectr:end -->"),
            Just("<!-- SPECTR:END -->"),
            Just("<!-- Spectr:End -->"),
            Just("<!-- sPeCtR:eNd -->"),
        ]
    }

    proptest! {
        /// Property: merging twice with the same body is a no-op the second
        /// time, for any starting file content without markers.
        #[test]
        fn merge_is_idempotent(existing in safe_text(), body in safe_text()) {
            let first = merge("AGENTS.md", Some(&existing), &body).unwrap();
            let second = merge("AGENTS.md", Some(&first.content), &body).unwrap();
            prop_assert_eq!(second.outcome, MergeOutcome::Unchanged);
            prop_assert_eq!(second.content, first.content);
        }

        /// Property: creating a file and then re-merging is also a no-op.
        #[test]
        fn merge_create_then_remerge_is_unchanged(body in safe_text()) {
            let created = merge("AGENTS.md", None, &body).unwrap();
            prop_assert_eq!(created.outcome, MergeOutcome::Created);
            let again = merge("AGENTS.md", Some(&created.content), &body).unwrap();
            prop_assert_eq!(again.outcome, MergeOutcome::Unchanged);
        }

        /// Property: splicing never modifies prefix or suffix bytes, for
        /// any marker casing in the existing file.
        #[test]
        fn merge_preserves_prefix_and_suffix(
            prefix in safe_text(),
            old_body in safe_text(),
            suffix in safe_text(),
            new_body in safe_text(),
            start in cased_start(),
            end in cased_end(),
        ) {
            let existing = format!("{prefix}{start}\n{old_body}\n{end}{suffix}");
            let merged = merge("AGENTS.md", Some(&existing), &new_body).unwrap();
            prop_assert!(merged.content.starts_with(&prefix));
            prop_assert!(merged.content.ends_with(&suffix));
        }

        /// Property: re-locating markers in any merge output yields `Open`
        /// with exactly the written body between the sentinels, and the
        /// sentinels themselves in canonical lowercase.
        #[test]
        fn merge_output_round_trips(existing in safe_text(), body in safe_text()) {
            let merged = merge("AGENTS.md", Some(&existing), &body).unwrap();
            match marker::locate(&merged.content) {
                MarkerState::Open { start, end } => {
                    prop_assert_eq!(&merged.content[start.clone()], START_MARKER);
                    prop_assert_eq!(&merged.content[end.clone()], END_MARKER);
                    prop_assert_eq!(
                        &merged.content[start.end..end.start],
                        format!("\n{body}\n")
                    );
                }
                other => prop_assert!(false, "expected Open, got {:?}", other),
            }
        }

        /// Property: recased sentinels are always detected as a block and
        /// rewritten in canonical form.
        #[test]
        fn merge_canonicalizes_any_casing(
            body in safe_text(),
            start in cased_start(),
            end in cased_end(),
        ) {
            let existing = format!("{start}\n{body}\n{end}\n");
            let merged = merge("AGENTS.md", Some(&existing), &body).unwrap();
            prop_assert!(merged.content.starts_with(START_MARKER));
            prop_assert!(merged.content.contains(END_MARKER));
            match marker::locate(&merged.content) {
                MarkerState::Open { .. } => {}
                other => prop_assert!(false, "expected Open, got {:?}", other),
            }
        }

        /// Property: resolution keeps exactly one unit per distinct
        /// `(scope, key)` and always the earliest contribution.
        #[test]
        fn resolve_keeps_first_of_each_key(
            keys in prop::collection::vec(0usize..5, 0..30),
        ) {
            let units: Vec<Box<dyn Initializer>> = keys
                .iter()
                .enumerate()
                .map(|(position, key)| IndexedUnit::boxed(position, *key))
                .collect();

            let resolved = resolve(units);

            let distinct: std::collections::HashSet<usize> = keys.iter().copied().collect();
            prop_assert_eq!(resolved.len(), distinct.len());

            for unit in &resolved {
                let unit_key: usize = unit.describe().split(':').nth(1).unwrap().parse().unwrap();
                let position: usize = unit.describe().split(':').next().unwrap().parse().unwrap();
                let earliest = keys.iter().position(|k| *k == unit_key).unwrap();
                prop_assert_eq!(position, earliest);
            }
        }

        /// Property: normalization is idempotent and never leaves `.` or
        /// empty segments behind.
        #[test]
        fn normalize_is_idempotent(input in "[a-zA-Z0-9./\\\\]{0,40}") {
            let once = path::normalize(&input);
            prop_assert_eq!(&path::normalize(&once), &once);
            for segment in once.split('/') {
                prop_assert_ne!(segment, ".");
                if !once.is_empty() {
                    prop_assert!(!segment.is_empty());
                }
            }
        }

        /// Property: a normalized non-escaping path never re-escapes.
        #[test]
        fn normalized_paths_do_not_escape_twice(input in "[a-zA-Z0-9./]{0,40}") {
            if !path::escapes_root(&input) {
                prop_assert!(!path::escapes_root(&path::normalize(&input)));
            }
        }
    }

    /// Test unit whose description encodes its input position and key.
    struct IndexedUnit {
        position: usize,
        key: usize,
    }

    impl IndexedUnit {
        fn boxed(position: usize, key: usize) -> Box<dyn Initializer> {
            Box::new(Self { position, key })
        }
    }

    impl Initializer for IndexedUnit {
        fn key(&self) -> Option<String> {
            Some(format!("config:file-{}.md", self.key))
        }

        fn scope(&self) -> Scope {
            Scope::Project
        }

        fn phase(&self) -> Phase {
            Phase::Files
        }

        fn describe(&self) -> String {
            format!("{}:{}", self.position, self.key)
        }

        fn is_setup(&self, _: &dyn Vfs, _: &dyn Vfs, _: &Config) -> bool {
            false
        }

        fn init(&self, _: &mut dyn Vfs, _: &mut dyn Vfs, _: &Config) -> Result<InitResult> {
            Ok(InitResult::new())
        }
    }
}
