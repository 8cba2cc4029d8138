//! Property-based tests for rule building and application.

use proptest::prelude::*;
use taboo_core::{apply_iter, apply_rules, apply_rules_with_stats, build_rules, RuleSet};

/// Small alphabet so adjacencies repeat often.
fn tokens() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..6, 0..40)
}

/// Check that `sub` can be obtained from `full` by deleting elements.
fn is_subsequence(sub: &[u8], full: &[u8]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|token| rest.any(|t| t == token))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_result_is_subsequence(example in tokens(), input in tokens()) {
        let rules = build_rules(example);
        let result = apply_rules(&rules, input.clone());

        prop_assert!(result.len() <= input.len());
        prop_assert!(is_subsequence(&result, &input));
    }

    #[test]
    fn prop_self_application_is_subsequence(example in tokens()) {
        let rules = build_rules(example.clone());
        let result = apply_rules(&rules, example.clone());

        prop_assert!(is_subsequence(&result, &example));
        // The first token always survives.
        prop_assert_eq!(result.first(), example.first());
    }

    #[test]
    fn prop_build_is_deterministic(example in tokens()) {
        prop_assert_eq!(build_rules(example.clone()), build_rules(example));
    }

    #[test]
    fn prop_no_forbidden_adjacency_in_result(example in tokens(), input in tokens()) {
        let rules = build_rules(example);
        let result = apply_rules(&rules, input);

        for pair in result.windows(2) {
            prop_assert!(!rules.is_forbidden(&pair[0], &pair[1]));
        }
    }

    #[test]
    fn prop_rules_cover_every_example_pair(example in tokens()) {
        let rules = build_rules(example.clone());

        for pair in example.windows(2) {
            prop_assert!(rules.is_forbidden(&pair[0], &pair[1]));
        }
        prop_assert!(rules.pair_count() <= example.len().saturating_sub(1));
    }

    #[test]
    fn prop_merge_is_monotonic(left in tokens(), right in tokens()) {
        let before = build_rules(left);
        let mut merged = before.clone();
        merged.merge(build_rules(right));

        for (prev, forbidden) in &before {
            let grown = merged.forbidden_successors(prev);
            prop_assert!(grown.is_some_and(|set| set.is_superset(forbidden)));
        }
    }

    #[test]
    fn prop_lazy_matches_eager(example in tokens(), input in tokens()) {
        let rules = build_rules(example);
        let (eager, stats) = apply_rules_with_stats(&rules, input.clone());
        let lazy: Vec<u8> = apply_iter(&rules, input.clone()).collect();

        prop_assert_eq!(&lazy, &eager);
        prop_assert_eq!(stats.kept, eager.len());
        prop_assert_eq!(stats.total(), input.len());
    }

    #[test]
    fn prop_single_token_always_kept(example in tokens(), token in 0u8..6) {
        let rules = build_rules(example);
        prop_assert_eq!(apply_rules(&rules, [token]), vec![token]);
    }

    #[test]
    fn prop_empty_rules_keep_everything(input in tokens()) {
        let rules = RuleSet::new();
        prop_assert_eq!(apply_rules(&rules, input.clone()), input);
    }
}
