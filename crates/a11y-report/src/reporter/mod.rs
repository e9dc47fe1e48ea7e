//! Check result reporting
//!
//! Formats the outcome of a check for the terminal or for machine parsing.
//!
//! # Output Formats
//!
//! - **JSON**: Machine-readable format for CI integration
//! - **Console**: Results header, per-impact totals and a violations table
//!
//! # Example
//!
//! ```no_run
//! use a11y_report::reporter::{CheckSummary, OutputFormat, Reporter};
//!
//! # fn example(summary: CheckSummary) -> anyhow::Result<()> {
//! Reporter::new(OutputFormat::Console).report(&summary)?;
//! # Ok(())
//! # }
//! ```

mod console;
mod json;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use a11y_engine::{CheckReport, SeverityPolicy};
use anyhow::Result;
use serde::Serialize;

use crate::error::ReportError;

pub use console::{table_rows, ConsoleReporter, TableRow};
pub use json::JsonReporter;

/// Everything reported about one check
#[derive(Debug, Clone, Serialize)]
pub struct CheckSummary {
    pub spec_name: String,
    pub test_title: String,
    pub url: String,
    pub policy: SeverityPolicy,
    #[serde(flatten)]
    pub report: CheckReport,
    /// Publish message for the HTML report, when one was generated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<String>,
}

/// Output format for check results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON format for machine parsing
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Console summary and table
    #[default]
    Console,
}

impl FromStr for OutputFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "json-pretty" | "pretty" => Ok(OutputFormat::JsonPretty),
            "console" | "text" => Ok(OutputFormat::Console),
            other => Err(ReportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Reporter for check results
#[derive(Debug, Default)]
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report results to stdout
    pub fn report(&self, summary: &CheckSummary) -> Result<()> {
        let output = self.format_results(summary)?;
        print!("{}", output);
        io::stdout().flush()?;
        Ok(())
    }

    /// Write results to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, summary: &CheckSummary, path: P) -> Result<()> {
        let output = self.format_results(summary)?;
        fs::write(path, output)?;
        Ok(())
    }

    /// Format results as a string
    pub fn format_results(&self, summary: &CheckSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => JsonReporter::format(summary, false),
            OutputFormat::JsonPretty => JsonReporter::format(summary, true),
            OutputFormat::Console => ConsoleReporter::format(summary),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_summary() -> CheckSummary {
    use a11y_engine::CheckSession;
    use a11y_types::{AffectedNode, CheckOptions, ContextSpec, Impact, ViolationRecord};

    let session = CheckSession::new(
        ContextSpec::Document,
        CheckOptions {
            only_warn_impacts: vec!["minor".to_string()],
            ..CheckOptions::default()
        },
    );
    let report = session.run(vec![
        ViolationRecord {
            id: "region".to_string(),
            impact: Some(Impact::Minor),
            help: "All page content should be contained by landmarks".to_string(),
            description: "Ensures all page content is contained by landmarks".to_string(),
            help_url: "https://dequeuniversity.com/rules/axe/4.9/region".to_string(),
            tags: vec!["best-practice".to_string()],
            nodes: vec![AffectedNode {
                target: vec!["footer > p".to_string()],
                html: String::new(),
                failure_summary: String::new(),
                bounding_box: None,
            }],
        },
        ViolationRecord {
            id: "image-alt".to_string(),
            impact: Some(Impact::Critical),
            help: "Images must have alternate text".to_string(),
            description: "Ensures <img> elements have alternate text".to_string(),
            help_url: "https://dequeuniversity.com/rules/axe/4.9/image-alt".to_string(),
            tags: vec!["wcag2a".to_string(), "section508".to_string()],
            nodes: vec![
                AffectedNode {
                    target: vec!["#hero > img".to_string()],
                    html: String::new(),
                    failure_summary: String::new(),
                    bounding_box: None,
                },
                AffectedNode {
                    target: vec!["iframe".to_string(), "img.logo".to_string()],
                    html: String::new(),
                    failure_summary: String::new(),
                    bounding_box: None,
                },
            ],
        },
    ]);
    CheckSummary {
        spec_name: "home.cy.js".to_string(),
        test_title: "landing page".to_string(),
        url: "https://example.com".to_string(),
        policy: session.policy().clone(),
        report,
        artifact: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_json_format() {
        let output = Reporter::new(OutputFormat::Json)
            .format_results(&sample_summary())
            .unwrap();
        assert!(output.contains("\"spec_name\":\"home.cy.js\""));
        assert!(output.contains("\"status\":\"fail\""));
    }

    #[test]
    fn test_reporter_console_format() {
        let output = Reporter::new(OutputFormat::Console)
            .format_results(&sample_summary())
            .unwrap();
        assert!(output.contains("ACCESSIBILITY RESULTS FOR TEST \"landing page\""));
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Pretty".parse::<OutputFormat>().unwrap(), OutputFormat::JsonPretty);
        assert_eq!("console".parse::<OutputFormat>().unwrap(), OutputFormat::Console);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        Reporter::new(OutputFormat::JsonPretty)
            .write_to_file(&sample_summary(), &path)
            .unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("image-alt"));
    }

    #[test]
    fn test_default_format() {
        assert_eq!(Reporter::default().format, OutputFormat::Console);
    }
}
