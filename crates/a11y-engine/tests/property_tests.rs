//! Property-based tests for the severity pipeline
//!
//! Covers policy normalization, aggregation totals, sort stability and the
//! pass/fail rule using proptest.

use a11y_engine::{aggregate, evaluate, sort_by_severity, SeverityPolicy};
use a11y_types::{Impact, ViolationRecord};
use proptest::prelude::*;

// ============================================================
// Strategies
// ============================================================

fn impact() -> impl Strategy<Value = Impact> {
    prop_oneof![
        Just(Impact::Critical),
        Just(Impact::Serious),
        Just(Impact::Moderate),
        Just(Impact::Minor),
    ]
}

/// Impact names as a user would type them, including junk
fn impact_name() -> impl Strategy<Value = String> {
    prop_oneof![
        impact().prop_map(|i| i.to_string()),
        Just("Critical".to_string()),
        Just("blocker".to_string()),
        "[a-z]{0,8}",
    ]
}

fn violations() -> impl Strategy<Value = Vec<ViolationRecord>> {
    prop::collection::vec(prop::option::weighted(0.9, impact()), 0..30).prop_map(|impacts| {
        impacts
            .into_iter()
            .enumerate()
            .map(|(i, impact)| ViolationRecord {
                id: format!("rule-{}", i),
                impact,
                help: String::new(),
                description: String::new(),
                help_url: String::new(),
                tags: vec![],
                nodes: vec![],
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================================
    // Severity Policy
    // ============================================================

    #[test]
    fn normalized_sets_are_disjoint(
        included in prop::collection::vec(impact_name(), 0..6),
        warn in prop::collection::vec(impact_name(), 0..6),
    ) {
        let policy = SeverityPolicy::normalize(&included, &warn);
        for impact in policy.only_warn() {
            prop_assert!(!policy.included().contains(impact));
        }
    }

    #[test]
    fn included_impacts_are_never_lost(
        included in prop::collection::vec(impact(), 0..4),
        warn in prop::collection::vec(impact(), 0..4),
    ) {
        let included_names: Vec<String> = included.iter().map(|i| i.to_string()).collect();
        let warn_names: Vec<String> = warn.iter().map(|i| i.to_string()).collect();
        let policy = SeverityPolicy::normalize(&included_names, &warn_names);
        for impact in &included {
            prop_assert!(policy.included().contains(impact));
        }
        for impact in &warn {
            prop_assert!(policy.is_analyzed(*impact));
        }
    }

    // ============================================================
    // Aggregation
    // ============================================================

    #[test]
    fn aggregate_sums_analyzed_violations(
        list in violations(),
        included in prop::collection::vec(impact_name(), 0..4),
        warn in prop::collection::vec(impact_name(), 0..4),
    ) {
        let policy = SeverityPolicy::normalize(&included, &warn);
        let agg = aggregate(&list, &policy);
        let expected = list
            .iter()
            .filter(|v| v.impact.is_some_and(|i| policy.is_analyzed(i)))
            .count();
        prop_assert_eq!(agg.total(), expected);
    }

    #[test]
    fn sort_is_stable(mut list in violations()) {
        let original = list.clone();
        sort_by_severity(&mut list);

        prop_assert_eq!(list.len(), original.len());
        for pair in list.windows(2) {
            prop_assert!(pair[0].rank() <= pair[1].rank());
            if pair[0].rank() == pair[1].rank() {
                let a = original.iter().position(|v| v.id == pair[0].id).unwrap();
                let b = original.iter().position(|v| v.id == pair[1].id).unwrap();
                prop_assert!(a < b, "{} moved after {}", pair[0].id, pair[1].id);
            }
        }
    }

    // ============================================================
    // Outcome
    // ============================================================

    #[test]
    fn fails_iff_included_violation_exists(
        list in violations(),
        included in prop::collection::vec(impact_name(), 0..4),
        warn in prop::collection::vec(impact_name(), 0..4),
    ) {
        let policy = SeverityPolicy::normalize(&included, &warn);
        let agg = aggregate(&list, &policy);
        let outcome = evaluate(&agg, &policy, &list);
        let has_included = list
            .iter()
            .any(|v| v.impact.is_some_and(|i| policy.included().contains(&i)));
        prop_assert_eq!(!outcome.passed(), has_included);
    }
}
