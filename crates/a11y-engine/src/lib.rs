//! Severity classification for accessibility scan results
//!
//! Turns raw axe-core violation records plus a user severity policy into
//! per-impact counts and a pass / warn / fail verdict, and builds the
//! narration text for speech summaries.

pub mod aggregate;
pub mod outcome;
pub mod policy;
pub mod session;
pub mod styling;
pub mod voice;

pub use aggregate::{aggregate, sort_by_severity, Aggregate, ImpactCount};
pub use outcome::{evaluate, failure_message, Outcome};
pub use policy::{ImpactRole, SeverityPolicy};
pub use session::{CheckReport, CheckSession, SpecCounts, SpecSession, SpecSummary, TestRecord};
pub use styling::{ImpactStyle, ImpactStyling};
pub use voice::{TestRun, TestState};

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_types::{CheckOptions, ContextSpec, Impact, ViolationRecord};

    fn violation(impact: Impact) -> ViolationRecord {
        ViolationRecord {
            id: "color-contrast".to_string(),
            impact: Some(impact),
            help: "Elements must meet minimum color contrast ratio thresholds".to_string(),
            description: String::new(),
            help_url: String::new(),
            tags: vec!["wcag2aa".to_string()],
            nodes: vec![],
        }
    }

    fn session(included: &[&str], warn: &[&str]) -> CheckSession {
        CheckSession::new(
            ContextSpec::Document,
            CheckOptions {
                included_impacts: included.iter().map(|s| s.to_string()).collect(),
                only_warn_impacts: warn.iter().map(|s| s.to_string()).collect(),
                ..CheckOptions::default()
            },
        )
    }

    #[test]
    fn test_scenario_critical_fails() {
        let report = session(&["critical", "serious"], &[]).run(vec![violation(Impact::Critical)]);
        let message = report.outcome.message().unwrap();
        assert!(message.contains("1 accessibility violation was detected with impact levels: [critical, serious]"));
    }

    #[test]
    fn test_scenario_warn_only() {
        let report = session(&[], &["critical", "serious"]).run(vec![violation(Impact::Critical)]);
        assert!(report.outcome.passed());
        assert_eq!(report.aggregate.count(Impact::Critical), ImpactCount::Counted(1));
    }

    #[test]
    fn test_scenario_overlap() {
        let s = session(&["moderate"], &["moderate", "minor"]);
        assert_eq!(s.policy().only_warn(), &[Impact::Minor]);
    }
}
