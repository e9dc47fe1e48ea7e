//! Narration text for speech synthesis
//!
//! Pure string templating over check results. The host decides whether and
//! when to speak the text.

use a11y_types::{Impact, ViolationRecord};
use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregate;
use crate::policy::SeverityPolicy;
use crate::session::SpecSummary;

/// Final state of a test as reported by the host runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TestState {
    Passed,
    Failed { reason: String },
    Skipped,
    Pending,
    /// Any state the host runner does not map to the others
    Unknown,
}

/// Inputs describing one finished test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRun {
    pub title: String,
    pub state: TestState,
    /// Zero-based retry index
    #[serde(default)]
    pub attempt: u32,
}

/// Narration for one violated rule and its affected elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationNarration {
    pub key: String,
    pub impact: Option<Impact>,
    pub summary: String,
    /// `(selector, narration)` per affected element
    pub nodes: Vec<(String, String)>,
}

#[derive(Debug, Clone, Copy)]
enum Word {
    Violation,
    Warning,
    Was,
    Element,
    Test,
    Severity,
}

fn plural(word: Word, count: usize) -> &'static str {
    let one = count == 1;
    match word {
        Word::Violation => if one { "violation" } else { "violations" },
        Word::Warning => if one { "warning" } else { "warnings" },
        Word::Was => if one { "was" } else { "were" },
        Word::Element => if one { "element" } else { "elements" },
        Word::Test => if one { "test" } else { "tests" },
        Word::Severity => if one { "severity" } else { "severities" },
    }
}

/// `a`, `a or b`, `a, b or c`
pub fn join_with_or(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [rest @ .., last] => format!("{} or {}", rest.join(", "), last),
    }
}

/// Sentence summarizing a test's accessibility results
pub fn summarize(run: &TestRun, policy: &SeverityPolicy, aggregate: &Aggregate) -> String {
    let attempts = if run.attempt > 0 {
        format!(" after {} attempts", run.attempt + 1)
    } else {
        String::new()
    };
    let title = &run.title;
    let violations = aggregate.total_for(policy.included());
    let warnings = aggregate.total_for(policy.only_warn());
    let warned: Vec<&str> = policy.only_warn().iter().map(|i| i.as_str()).collect();

    match &run.state {
        TestState::Passed if warnings > 0 => format!(
            "The test with name. {}, passed{} with {} accessibility {} for {}: {}.",
            title,
            attempts,
            warnings,
            plural(Word::Warning, warnings),
            plural(Word::Severity, warned.len()),
            join_with_or(&warned)
        ),
        TestState::Passed => format!(
            "The test with name. {}, passed{} with no accessibility violations or any other errors.",
            title, attempts
        ),
        TestState::Skipped | TestState::Pending => format!(
            "The test with name. {}, was skipped because some error occurred.",
            title
        ),
        TestState::Unknown => format!(
            "The test with name, {}, failed{} for some reason.",
            title, attempts
        ),
        TestState::Failed { reason } => {
            let mut text = if violations == 0 {
                format!(
                    "The test with name, {}, failed{} for reasons other than accessibility violations. Failure cause: {}.",
                    title, attempts, reason
                )
            } else {
                let per_impact = aggregate
                    .analyzed()
                    .filter(|(impact, _)| policy.included().contains(impact))
                    .map(|(impact, n)| format!("{} {} {}!", n, impact, plural(Word::Violation, n)))
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(
                    "The test with name, {}, failed{} because {} accessibility {} {} detected: {}",
                    title,
                    attempts,
                    violations,
                    plural(Word::Violation, violations),
                    plural(Word::Was, violations),
                    per_impact
                )
            };
            if warnings > 0 {
                text.push_str(&format!(
                    " Also {} accessibility {} {} detected for {}: {}.",
                    warnings,
                    plural(Word::Warning, warnings),
                    plural(Word::Was, warnings),
                    plural(Word::Severity, warned.len()),
                    join_with_or(&warned)
                ));
            }
            text
        }
    }
}

/// Narration for a single affected element
pub fn element_narration(
    selector: &str,
    impact: &str,
    help: &str,
    description: &str,
    failure_summary: &str,
) -> String {
    format!(
        "The Document Object Model element with selector, \"{}\", was found with the {} violation: {}. {}. {}.",
        selector, impact, help, description, failure_summary
    )
}

/// Narration per violated rule, in the order given
pub fn violation_narration(violations: &[ViolationRecord]) -> Vec<ViolationNarration> {
    violations
        .iter()
        .map(|violation| {
            let impact = violation.impact.map(Impact::as_str).unwrap_or("unknown");
            let count = violation.nodes.len();
            let nodes = violation
                .nodes
                .iter()
                .map(|node| {
                    let selector = node.target.first().cloned().unwrap_or_default();
                    let text = element_narration(
                        &selector,
                        impact,
                        &violation.help,
                        &violation.description,
                        &node.failure_summary,
                    );
                    (selector, text)
                })
                .collect();
            ViolationNarration {
                key: format!("{} violation: {}", impact, violation.help).to_uppercase(),
                impact: violation.impact,
                summary: format!(
                    "{} Document Object Model {} {} found with the {} violation: {}. {}.",
                    count,
                    plural(Word::Element, count),
                    plural(Word::Was, count),
                    impact,
                    violation.help,
                    violation.description
                ),
                nodes,
            }
        })
        .collect()
}

/// Narration for a whole spec run
pub fn spec_narration(summary: &SpecSummary) -> String {
    let counts = &summary.counts;
    let skipped = counts.pending + counts.skipped;
    format!(
        "The spec with name {} ran {} {} in total: {} passed, {} failed due to accessibility errors, {} failed for other reasons, {} skipped or pending.",
        summary.spec_name,
        counts.tests,
        plural(Word::Test, counts.tests),
        counts.passed,
        counts.failed_accessibility,
        counts.failed,
        skipped
    )
}
