//! JSON reporter for check results

use anyhow::Result;

use super::CheckSummary;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format check results as JSON
    ///
    /// # Arguments
    ///
    /// * `summary` - The check results to format
    /// * `pretty` - Whether to pretty-print the JSON
    pub fn format(summary: &CheckSummary, pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(summary)?
        } else {
            serde_json::to_string(summary)?
        };
        Ok(output)
    }
}
