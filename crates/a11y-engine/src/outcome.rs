//! Pass / warn / fail verdict for a check

use a11y_types::{Impact, ViolationRecord};
use serde::Serialize;

use crate::aggregate::Aggregate;
use crate::policy::SeverityPolicy;

/// Verdict of a single accessibility check. `Warn` is a passing verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Warn {
        warned_impacts: Vec<Impact>,
        counts: Aggregate,
    },
    Fail {
        failed_impacts: Vec<Impact>,
        counts: Aggregate,
        message: String,
    },
}

impl Outcome {
    pub fn passed(&self) -> bool {
        !matches!(self, Outcome::Fail { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Fail { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Pass => "PASSED",
            Outcome::Warn { .. } => "PASSED WITH WARNINGS",
            Outcome::Fail { .. } => "FAILED",
        }
    }
}

/// Decide the verdict. Only violations with an included impact fail the
/// check; warn-only impacts never do.
pub fn evaluate(
    aggregate: &Aggregate,
    policy: &SeverityPolicy,
    violations: &[ViolationRecord],
) -> Outcome {
    let failing = violations
        .iter()
        .filter(|v| v.impact.is_some_and(|impact| policy.included().contains(&impact)))
        .count();

    if failing > 0 {
        return Outcome::Fail {
            failed_impacts: policy.included().to_vec(),
            counts: *aggregate,
            message: failure_message(failing, policy.included()),
        };
    }

    let warned: Vec<Impact> = policy
        .only_warn()
        .iter()
        .copied()
        .filter(|impact| aggregate.count(*impact).value().unwrap_or(0) > 0)
        .collect();

    if warned.is_empty() {
        Outcome::Pass
    } else {
        Outcome::Warn {
            warned_impacts: warned,
            counts: *aggregate,
        }
    }
}

/// Assertion message surfaced to the host test framework
pub fn failure_message(count: usize, included: &[Impact]) -> String {
    let levels = included
        .iter()
        .map(|impact| impact.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} accessibility {} {} detected with impact levels: [{}]",
        count,
        if count == 1 { "violation" } else { "violations" },
        if count == 1 { "was" } else { "were" },
        levels
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;

    fn violation(impact: Impact) -> ViolationRecord {
        ViolationRecord {
            id: format!("rule-{}", impact),
            impact: Some(impact),
            help: String::new(),
            description: String::new(),
            help_url: String::new(),
            tags: vec![],
            nodes: vec![],
        }
    }

    fn run(included: &[&str], warn: &[&str], violations: &[ViolationRecord]) -> Outcome {
        let policy = SeverityPolicy::normalize(included, warn);
        let agg = aggregate(violations, &policy);
        evaluate(&agg, &policy, violations)
    }

    #[test]
    fn test_single_critical_fails() {
        let outcome = run(&["critical", "serious"], &[], &[violation(Impact::Critical)]);
        assert!(!outcome.passed());
        assert_eq!(
            outcome.message(),
            Some("1 accessibility violation was detected with impact levels: [critical, serious]")
        );
    }

    #[test]
    fn test_plural_message() {
        let outcome = run(
            &["serious", "critical"],
            &[],
            &[violation(Impact::Critical), violation(Impact::Serious)],
        );
        assert_eq!(
            outcome.message(),
            Some("2 accessibility violations were detected with impact levels: [critical, serious]")
        );
    }

    #[test]
    fn test_warn_only_passes() {
        let outcome = run(&[], &["critical", "serious"], &[violation(Impact::Critical)]);
        assert!(outcome.passed());
        match outcome {
            Outcome::Warn {
                warned_impacts,
                counts,
            } => {
                assert_eq!(warned_impacts, vec![Impact::Critical]);
                assert_eq!(counts.count(Impact::Critical).value(), Some(1));
            }
            other => panic!("Expected Warn, got {:?}", other),
        }
    }

    #[test]
    fn test_no_violations_passes() {
        assert_eq!(run(&["critical"], &["minor"], &[]), Outcome::Pass);
    }

    #[test]
    fn test_empty_policy_passes() {
        let outcome = run(&[], &[], &[violation(Impact::Critical)]);
        assert_eq!(outcome, Outcome::Pass);
    }

    #[test]
    fn test_not_analyzed_impacts_do_not_fail() {
        let outcome = run(&["critical"], &[], &[violation(Impact::Minor)]);
        assert_eq!(outcome, Outcome::Pass);
    }

    #[test]
    fn test_serialized_status_tag() {
        let outcome = run(&["critical"], &[], &[violation(Impact::Critical)]);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "fail");
        assert_eq!(json["failed_impacts"], serde_json::json!(["critical"]));
    }
}
