//! Property-based tests for section ordering.
//!
//! Random page sets and preferred orders are generated to check that the
//! ordering invariants hold regardless of input shape.

#[cfg(test)]
mod proptest_tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use crate::order::{locale_cmp, section_of, top_level_sections};

    fn page_paths() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(
            prop_oneof![
                "[a-zA-Z]{1,6}/[a-z]{1,6}\\.mdx",
                "[a-zA-Z]{1,6}/[a-z]{1,4}/[a-z]{1,6}\\.mdx",
                "[a-z]{1,6}\\.mdx",
            ],
            0..30,
        )
    }

    fn preferred_order() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-zA-Z]{1,6}", 0..5).prop_map(|names| {
            let mut seen = BTreeSet::new();
            names
                .into_iter()
                .filter(|n| seen.insert(n.clone()))
                .collect()
        })
    }

    proptest! {
        /// Property: every input section appears exactly once
        #[test]
        fn sections_are_unique_and_complete(paths in page_paths(), order in preferred_order()) {
            let sections = top_level_sections(paths.iter().map(String::as_str), &order);

            let unique: BTreeSet<&String> = sections.iter().collect();
            prop_assert_eq!(unique.len(), sections.len());

            let expected: BTreeSet<&str> = paths.iter().filter_map(|p| section_of(p)).collect();
            let actual: BTreeSet<&str> = sections.iter().map(String::as_str).collect();
            prop_assert_eq!(expected, actual);
        }

        /// Property: preferred sections precede the rest, in preferred order
        #[test]
        fn preferred_sections_come_first(paths in page_paths(), order in preferred_order()) {
            let sections = top_level_sections(paths.iter().map(String::as_str), &order);

            let in_order: Vec<&String> = sections.iter().filter(|s| order.contains(s)).collect();
            let split = in_order.len();
            for s in &sections[..split] {
                prop_assert!(order.contains(s), "{} should be a preferred section", s);
            }

            let positions: Vec<usize> = in_order
                .iter()
                .filter_map(|s| order.iter().position(|o| o == *s))
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        /// Property: remaining sections are alphabetical
        #[test]
        fn unnamed_sections_are_alphabetical(paths in page_paths(), order in preferred_order()) {
            let sections = top_level_sections(paths.iter().map(String::as_str), &order);

            let rest: Vec<&String> = sections.iter().filter(|s| !order.contains(s)).collect();
            prop_assert!(rest.windows(2).all(|w| locale_cmp(w[0], w[1]).is_lt()));
        }

        /// Property: input order does not affect the result
        #[test]
        fn ordering_ignores_input_order(paths in page_paths(), order in preferred_order()) {
            let forward = top_level_sections(paths.iter().map(String::as_str), &order);
            let backward = top_level_sections(paths.iter().rev().map(String::as_str), &order);
            prop_assert_eq!(forward, backward);
        }
    }
}
