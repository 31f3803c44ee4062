//! Property-based tests for path-list normalization.

use proptest::prelude::*;

use super::{FileSystem, MemoryFileSystem, PathNormalizer};
use crate::invocation::Policy;
use crate::logging::NullSink;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-cA-C]{1,3}"
}

// Entries drawn from a small alphabet so duplicates and case clashes are common.
fn entry_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(segment_strategy(), 1..3),
        "[/\\\\]{0,2}",
    )
        .prop_map(|(parts, tail)| format!("/{}{tail}", parts.join("/")))
}

fn raw_list_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![entry_strategy(), Just(String::new())], 0..10)
        .prop_map(|entries| entries.join(":"))
}

fn file_system() -> MemoryFileSystem {
    MemoryFileSystem::new()
        .with_dir("/a/b")
        .with_dir("/B/c")
        .with_dir("/c")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // normalize(serialize(normalize(x))) == normalize(x)
    #[test]
    fn normalization_idempotent(raw in raw_list_strategy(), match_case in any::<bool>()) {
        let fs = file_system();
        let policy = Policy { match_case, ..Policy::default() };
        let normalizer = PathNormalizer::new(&fs, &NullSink, &policy, ':');

        let once = normalizer.normalize(&raw);
        let twice = normalizer.normalize(&normalizer.serialize(&once));
        prop_assert_eq!(once, twice);
    }

    // Without keep flags, the result has only existing, unique, trimmed entries.
    #[test]
    fn normalized_entries_are_clean(raw in raw_list_strategy()) {
        let fs = file_system();
        let policy = Policy::default();
        let normalizer = PathNormalizer::new(&fs, &NullSink, &policy, ':');

        let entries = normalizer.normalize(&raw);
        let mut keys = std::collections::HashSet::new();
        for entry in &entries {
            prop_assert!(!entry.is_empty());
            prop_assert!(!entry.ends_with('/') && !entry.ends_with('\\'));
            prop_assert!(fs.is_dir(std::path::Path::new(entry)));
            prop_assert!(keys.insert(entry.to_lowercase()));
        }
    }

    // With every keep flag and no case fixing, only trimming changes entries.
    #[test]
    fn keep_everything_only_trims(raw in raw_list_strategy()) {
        let fs = file_system();
        let policy = Policy {
            match_case: false,
            keep_orphans: true,
            keep_duplicates: true,
            ..Policy::default()
        };
        let normalizer = PathNormalizer::new(&fs, &NullSink, &policy, ':');

        let expected: Vec<String> = raw
            .split(':')
            .map(super::trim_entry)
            .filter(|entry| !entry.is_empty())
            .map(String::from)
            .collect();
        prop_assert_eq!(normalizer.normalize(&raw), expected);
    }
}
