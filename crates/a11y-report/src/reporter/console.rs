//! Console reporter for check results
//!
//! Prints the per-impact totals followed by an ASCII table of violations.

use std::fmt::Write;

use a11y_types::ViolationRecord;
use anyhow::Result;
use serde::Serialize;

use super::CheckSummary;
use crate::annotations::kind_label;

const HEADERS: [&str; 6] = ["IMPACT", "RULEID", "TAGS", "SELECTORS", "DESCRIPTION", "MOREINFO"];

/// One row of the violations table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct TableRow {
    pub impact: String,
    pub ruleid: String,
    pub tags: String,
    pub selectors: String,
    pub description: String,
    pub moreinfo: String,
}

impl TableRow {
    fn cells(&self) -> [&str; 6] {
        [
            &self.impact,
            &self.ruleid,
            &self.tags,
            &self.selectors,
            &self.description,
            &self.moreinfo,
        ]
    }
}

/// Table rows for sorted violations
pub fn table_rows(violations: &[ViolationRecord]) -> Vec<TableRow> {
    violations
        .iter()
        .map(|v| TableRow {
            impact: v
                .impact
                .map(|impact| impact.as_str().to_uppercase())
                .unwrap_or_default(),
            ruleid: format!("{} ({})", v.id, v.help),
            tags: v.tags.join(", "),
            selectors: v
                .nodes
                .iter()
                .map(|node| node.target.join(","))
                .collect::<Vec<_>>()
                .join(", "),
            description: v.description.clone(),
            moreinfo: v.help_url.clone(),
        })
        .collect()
}

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn format(summary: &CheckSummary) -> Result<String> {
        let mut output = String::new();

        writeln!(output)?;
        writeln!(
            output,
            "************************ ACCESSIBILITY RESULTS FOR TEST \"{}\"",
            summary.test_title
        )?;
        writeln!(output)?;
        for (impact, count) in summary.report.aggregate.analyzed() {
            writeln!(
                output,
                "{} {}: {}",
                impact.as_str().to_uppercase(),
                kind_label(summary.policy.role(impact)),
                count
            )?;
        }
        writeln!(output)?;

        let rows = table_rows(&summary.report.violations);
        if !rows.is_empty() {
            Self::format_table(&mut output, &rows)?;
            writeln!(output)?;
        }

        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        let symbol = if summary.report.outcome.passed() { "✓" } else { "✗" };
        writeln!(output, "Accessibility Check: {} {}", symbol, summary.report.outcome.label())?;
        if let Some(message) = summary.report.outcome.message() {
            writeln!(output, "  • {}", message)?;
        }
        if let Some(artifact) = &summary.artifact {
            writeln!(output, "{}", artifact)?;
        }
        writeln!(output)?;
        Ok(output)
    }

    fn format_table(output: &mut String, rows: &[TableRow]) -> Result<()> {
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let rule = |left: &str, mid: &str, right: &str| -> String {
            let parts: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}", left, parts.join(mid), right)
        };

        writeln!(output, "{}", rule("┌", "┬", "┐"))?;
        Self::format_row(output, &widths, HEADERS)?;
        writeln!(output, "{}", rule("├", "┼", "┤"))?;
        for row in rows {
            Self::format_row(output, &widths, row.cells())?;
        }
        writeln!(output, "{}", rule("└", "┴", "┘"))?;
        Ok(())
    }

    fn format_row(output: &mut String, widths: &[usize; 6], cells: [&str; 6]) -> Result<()> {
        write!(output, "│")?;
        for (cell, width) in cells.iter().zip(widths) {
            let pad = width - cell.chars().count();
            write!(output, " {}{} │", cell, " ".repeat(pad))?;
        }
        writeln!(output)?;
        Ok(())
    }
}
