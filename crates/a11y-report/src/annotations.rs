//! Runner-log entries for a check
//!
//! One entry per violation, one per affected element, then one summary entry
//! per analyzed impact. Hosts render `name` as the entry label and `message`
//! as markdown; `selectors` lets them highlight the matching elements.

use a11y_engine::{Aggregate, ImpactRole, ImpactStyling, SeverityPolicy};
use a11y_types::ViolationRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    Violation,
    Element,
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub kind: LogKind,
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub selectors: Vec<String>,
}

/// Log entries for sorted violations followed by the per-impact totals
pub fn annotations(
    violations: &[ViolationRecord],
    styling: &ImpactStyling,
    aggregate: &Aggregate,
    policy: &SeverityPolicy,
) -> Vec<LogEntry> {
    let mut entries = Vec::new();

    for violation in violations {
        let Some(impact) = violation.impact else {
            continue;
        };
        entries.push(LogEntry {
            kind: LogKind::Violation,
            name: format!("[{}{}]", styling.icon(impact), impact.as_str().to_uppercase()),
            message: format!(
                "**{} _(Rule ID: {})_.** [More info]({})",
                violation.help.to_uppercase(),
                violation.id,
                violation.help_url
            ),
            selectors: violation.nodes.iter().flat_map(|n| n.target.clone()).collect(),
        });

        for node in &violation.nodes {
            entries.push(LogEntry {
                kind: LogKind::Element,
                name: format!("---({}Fixme)▶", styling.fixme_icon()),
                message: node.target.join(","),
                selectors: node.target.clone(),
            });
        }
    }

    entries.extend(summary_entries(styling, aggregate, policy));
    entries
}

fn summary_entries(
    styling: &ImpactStyling,
    aggregate: &Aggregate,
    policy: &SeverityPolicy,
) -> Vec<LogEntry> {
    aggregate
        .analyzed()
        .map(|(impact, count)| LogEntry {
            kind: LogKind::Summary,
            name: format!(
                "• {} {} {}:",
                impact.as_str().to_uppercase(),
                kind_label(policy.role(impact)),
                styling.icon(impact)
            ),
            message: count.to_string(),
            selectors: vec![],
        })
        .collect()
}

/// `VIOLATIONS` for failing impacts, `WARNINGS` for warn-only ones
pub fn kind_label(role: ImpactRole) -> &'static str {
    match role {
        ImpactRole::Warn => "WARNINGS",
        _ => "VIOLATIONS",
    }
}
