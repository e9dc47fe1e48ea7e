//! Check and spec sessions
//!
//! A [`CheckSession`] carries everything one accessibility check needs
//! (context, options, normalized policy, styling, attempt number) and is
//! created fresh for every check, including host-level retries.
//! A [`SpecSession`] accumulates per-test results across a spec run and is
//! driven by explicit lifecycle calls from the host.

use std::collections::BTreeMap;

use a11y_types::{CheckOptions, ContextSpec, ScanRequest, ViolationRecord};
use serde::Serialize;
use tracing::{debug, info};

use crate::aggregate::{aggregate, sort_by_severity, Aggregate};
use crate::outcome::{evaluate, Outcome};
use crate::policy::SeverityPolicy;
use crate::styling::ImpactStyling;
use crate::voice::{self, TestRun, TestState, ViolationNarration};

/// State for a single accessibility check
#[derive(Debug, Clone)]
pub struct CheckSession {
    context: ContextSpec,
    options: CheckOptions,
    policy: SeverityPolicy,
    styling: ImpactStyling,
    attempt: u32,
}

/// Result of running the pipeline over one scan
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Violations sorted by severity (stable)
    pub violations: Vec<ViolationRecord>,
    pub aggregate: Aggregate,
    pub outcome: Outcome,
}

impl CheckSession {
    pub fn new(context: ContextSpec, options: CheckOptions) -> Self {
        let policy = SeverityPolicy::from_options(&options);
        let styling = ImpactStyling::with_overrides(&options.impact_styling);
        Self {
            context,
            options,
            policy,
            styling,
            attempt: 0,
        }
    }

    /// Zero-based host retry index, used only to disambiguate artifact names
    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = attempt;
        self
    }

    pub fn context(&self) -> &ContextSpec {
        &self.context
    }

    pub fn options(&self) -> &CheckOptions {
        &self.options
    }

    pub fn policy(&self) -> &SeverityPolicy {
        &self.policy
    }

    pub fn styling(&self) -> &ImpactStyling {
        &self.styling
    }

    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Options to hand to the scanner
    pub fn scan_request(&self) -> ScanRequest {
        self.policy.scan_request(&self.options)
    }

    /// Aggregate, sort and evaluate the scanner's violations.
    ///
    /// Violations outside the analyzed impacts are dropped; they never reach
    /// the report, the log or the rollup.
    pub fn run(&self, mut violations: Vec<ViolationRecord>) -> CheckReport {
        let received = violations.len();
        violations.retain(|v| v.impact.is_some_and(|impact| self.policy.is_analyzed(impact)));
        if violations.len() < received {
            debug!(
                dropped = received - violations.len(),
                "Ignoring violations outside the analyzed impacts"
            );
        }
        let aggregate = aggregate(&violations, &self.policy);
        sort_by_severity(&mut violations);
        let outcome = evaluate(&aggregate, &self.policy, &violations);
        debug!(
            violations = violations.len(),
            analyzed = aggregate.total(),
            verdict = outcome.label(),
            "Accessibility check evaluated"
        );
        CheckReport {
            violations,
            aggregate,
            outcome,
        }
    }
}

/// What the spec rollup keeps for each finished test
#[derive(Debug, Clone, Serialize)]
pub struct TestRecord {
    pub run: TestRun,
    /// Whether the test ran an accessibility check that produced violations
    pub had_violations: bool,
    pub summary_voice: String,
    pub violations_voice: Vec<ViolationNarration>,
}

impl TestRecord {
    /// Build the record for a test that ran an accessibility check
    pub fn from_check(run: TestRun, session: &CheckSession, report: &CheckReport) -> Self {
        Self {
            summary_voice: voice::summarize(&run, session.policy(), &report.aggregate),
            violations_voice: voice::violation_narration(&report.violations),
            had_violations: !report.violations.is_empty(),
            run,
        }
    }
}

/// Test counts for a spec run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SpecCounts {
    pub tests: usize,
    pub passed: usize,
    pub failed_accessibility: usize,
    pub failed: usize,
    pub pending: usize,
    pub skipped: usize,
}

/// Final rollup handed back to the host at the end of a spec
#[derive(Debug, Clone, Serialize)]
pub struct SpecSummary {
    pub spec_name: String,
    pub counts: SpecCounts,
    pub voice: String,
    pub tests: BTreeMap<String, TestRecord>,
}

/// Per-spec accumulator driven by explicit lifecycle calls
#[derive(Debug, Default)]
pub struct SpecSession {
    spec_name: String,
    counts: SpecCounts,
    tests: BTreeMap<String, TestRecord>,
}

impl SpecSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all results for a new spec
    pub fn on_session_start(&mut self, spec_name: &str) {
        self.spec_name = spec_name.to_string();
        self.counts = SpecCounts::default();
        self.tests.clear();
    }

    /// Record a finished test. A failed test that carried violations counts
    /// as an accessibility failure.
    pub fn on_check_complete(&mut self, record: TestRecord) {
        self.counts.tests += 1;
        match &record.run.state {
            TestState::Passed => self.counts.passed += 1,
            TestState::Failed { .. } if record.had_violations => {
                self.counts.failed_accessibility += 1
            }
            TestState::Failed { .. } | TestState::Unknown => self.counts.failed += 1,
            TestState::Skipped => self.counts.skipped += 1,
            TestState::Pending => self.counts.pending += 1,
        }
        self.tests.insert(record.run.title.clone(), record);
    }

    /// Close the spec. `pending` counts tests the host never ran.
    pub fn on_session_end(&mut self, pending: usize) -> SpecSummary {
        self.counts.pending += pending;
        self.counts.tests += pending;

        let mut summary = SpecSummary {
            spec_name: std::mem::take(&mut self.spec_name),
            counts: self.counts,
            voice: String::new(),
            tests: std::mem::take(&mut self.tests),
        };
        summary.voice = voice::spec_narration(&summary);
        self.counts = SpecCounts::default();

        info!(
            spec = %summary.spec_name,
            tests = summary.counts.tests,
            passed = summary.counts.passed,
            failed_accessibility = summary.counts.failed_accessibility,
            "Spec session closed"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11y_types::Impact;

    fn violation(id: &str, impact: Impact) -> ViolationRecord {
        ViolationRecord {
            id: id.to_string(),
            impact: Some(impact),
            help: format!("{} help", id),
            description: String::new(),
            help_url: String::new(),
            tags: vec![],
            nodes: vec![],
        }
    }

    #[test]
    fn test_run_sorts_and_evaluates() {
        let session = CheckSession::new(ContextSpec::Document, CheckOptions::default());
        let report = session.run(vec![
            violation("landmark", Impact::Moderate),
            violation("contrast", Impact::Serious),
            violation("alt", Impact::Critical),
        ]);
        let ids: Vec<_> = report.violations.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["alt", "contrast", "landmark"]);
        assert!(!report.outcome.passed());
        assert_eq!(report.aggregate.total(), 2);
    }

    #[test]
    fn test_sessions_do_not_share_state() {
        let strict = CheckSession::new(
            ContextSpec::Document,
            CheckOptions {
                included_impacts: vec!["minor".to_string()],
                ..CheckOptions::default()
            },
        );
        let lenient = CheckSession::new(ContextSpec::Document, CheckOptions::default());
        let violations = vec![violation("region", Impact::Minor)];

        assert!(!strict.run(violations.clone()).outcome.passed());
        assert!(lenient.run(violations).outcome.passed());
    }

    #[test]
    fn test_run_drops_unanalyzed_violations() {
        let session = CheckSession::new(ContextSpec::Document, CheckOptions::default());
        let report = session.run(vec![
            violation("region", Impact::Minor),
            violation("alt", Impact::Critical),
        ]);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].impact, Some(Impact::Critical));
    }

    #[test]
    fn test_unanalyzed_violations_do_not_mark_accessibility_failure() {
        let session = CheckSession::new(ContextSpec::Document, CheckOptions::default());
        let report = session.run(vec![violation("region", Impact::Minor)]);
        assert!(report.violations.is_empty());

        let mut spec = SpecSession::new();
        spec.on_session_start("home.cy.js");
        spec.on_check_complete(TestRecord::from_check(
            TestRun {
                title: "login".to_string(),
                state: TestState::Failed {
                    reason: "Timed out retrying".to_string(),
                },
                attempt: 0,
            },
            &session,
            &report,
        ));
        spec.on_check_complete(TestRecord {
            run: TestRun {
                title: "mystery".to_string(),
                state: TestState::Unknown,
                attempt: 0,
            },
            had_violations: false,
            summary_voice: String::new(),
            violations_voice: vec![],
        });
        let summary = spec.on_session_end(0);
        assert_eq!(summary.counts.failed_accessibility, 0);
        assert_eq!(summary.counts.failed, 2);
    }

    #[test]
    fn test_attempt_is_carried() {
        let session = CheckSession::new(ContextSpec::Document, CheckOptions::default()).with_attempt(2);
        assert_eq!(session.attempt(), 2);
    }

    #[test]
    fn test_spec_rollup() {
        let session = CheckSession::new(ContextSpec::Document, CheckOptions::default());
        let mut spec = SpecSession::new();
        spec.on_session_start("home.cy.js");

        let clean = session.run(vec![]);
        spec.on_check_complete(TestRecord::from_check(
            TestRun {
                title: "clean page".to_string(),
                state: TestState::Passed,
                attempt: 0,
            },
            &session,
            &clean,
        ));

        let broken = session.run(vec![violation("alt", Impact::Critical)]);
        spec.on_check_complete(TestRecord::from_check(
            TestRun {
                title: "broken page".to_string(),
                state: TestState::Failed {
                    reason: broken.outcome.message().unwrap_or_default().to_string(),
                },
                attempt: 0,
            },
            &session,
            &broken,
        ));

        let summary = spec.on_session_end(1);
        assert_eq!(summary.spec_name, "home.cy.js");
        assert_eq!(
            summary.counts,
            SpecCounts {
                tests: 3,
                passed: 1,
                failed_accessibility: 1,
                failed: 0,
                pending: 1,
                skipped: 0,
            }
        );
        assert!(summary.voice.starts_with("The spec with name home.cy.js ran 3 tests in total"));
        assert!(summary.tests["broken page"]
            .summary_voice
            .contains("1 critical violation!"));
    }

    #[test]
    fn test_session_start_resets() {
        let mut spec = SpecSession::new();
        spec.on_session_start("a.cy.js");
        spec.on_check_complete(TestRecord {
            run: TestRun {
                title: "t".to_string(),
                state: TestState::Skipped,
                attempt: 0,
            },
            had_violations: false,
            summary_voice: String::new(),
            violations_voice: vec![],
        });
        spec.on_session_start("b.cy.js");
        let summary = spec.on_session_end(0);
        assert_eq!(summary.counts, SpecCounts::default());
        assert!(summary.tests.is_empty());
    }
}
