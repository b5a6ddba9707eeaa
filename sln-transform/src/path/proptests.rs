//! Property-based tests for the path algebra.
//!
//! Note: `normalize` and `relative` carry their own quick property tests.
//! This module runs the cross-cutting properties with many more cases.

use super::normalize::normalize;
use super::FilePath;
use proptest::prelude::*;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn absolute_dir_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 0..6)
        .prop_map(|parts| format!("C:\\{}", parts.join("\\")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // normalize(a\b\..\c) == normalize(a\c)
    #[test]
    fn parent_pair_collapses(a in path_component_strategy(), b in path_component_strategy(), c in path_component_strategy()) {
        prop_assert_eq!(normalize(&format!("{a}\\{b}\\..\\{c}")), normalize(&format!("{a}\\{c}")));
    }

    // A.relative_to(B).to_absolute(B) == A for files under B
    #[test]
    fn relative_then_absolute_round_trip(
        base in absolute_dir_strategy(),
        tail in prop::collection::vec(path_component_strategy(), 1..5),
    ) {
        let base_dir = FilePath::new_directory(&base);
        let target = base_dir.file(&tail.join("\\"));
        prop_assert_eq!(target.relative_to(&base_dir).to_absolute(&base_dir), target);
    }

    // Equality ignores case
    #[test]
    fn equality_case_insensitive(base in absolute_dir_strategy()) {
        prop_assert_eq!(
            FilePath::new_directory(&base.to_uppercase()),
            FilePath::new_directory(&base.to_lowercase())
        );
    }

    // Equality is reflexive and survives a clone
    #[test]
    fn equality_reflexive(base in absolute_dir_strategy()) {
        let path = FilePath::new_directory(&base);
        prop_assert_eq!(path.clone(), path);
    }

    // The parent of a child directory is the original directory
    #[test]
    fn parent_of_child(base in absolute_dir_strategy(), name in path_component_strategy()) {
        let dir = FilePath::new_directory(&base);
        prop_assert_eq!(dir.directory(&name).parent(), Some(dir));
    }
}
