//! Configuration loading
//!
//! A TOML file with two tables: `[report]` for where and how reports are
//! written, and `[options]` for the check options (same camelCase keys the
//! check command accepts).

use std::fs;
use std::path::{Path, PathBuf};

use a11y_types::{CheckOptions, ReportMode};
use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::artifacts::DEFAULT_FOLDER;

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub options: CheckOptions,
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportSettings {
    /// Root folder for report folders
    #[serde(default = "default_folder")]
    pub folder: PathBuf,
    /// Overrides `options.generateReport` when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ReportMode>,
    /// Width the screenshot is shown at, in CSS pixels
    #[serde(default = "default_display_width")]
    pub display_width: f64,
}

fn default_folder() -> PathBuf {
    PathBuf::from(DEFAULT_FOLDER)
}

fn default_display_width() -> f64 {
    1280.0
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            mode: None,
            display_width: default_display_width(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// Report mode after applying the `[report]` override
    pub fn report_mode(&self) -> ReportMode {
        self.report.mode.unwrap_or(self.options.generate_report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.report.folder, PathBuf::from("cypress/accessibility"));
        assert_eq!(config.report_mode(), ReportMode::Detailed);
        assert_eq!(config.options.included_impacts, vec!["critical", "serious"]);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [report]
            folder = "reports/a11y"
            mode = "basic"
            display_width = 960.0

            [options]
            includedImpacts = ["critical"]
            onlyWarnImpacts = ["serious", "moderate"]
            runOnly = ["wcag2a"]
            retries = 2

            [options.impactStyling.critical]
            icon = "🔴"

            [options.rules.color-contrast]
            enabled = false
        "#;
        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.report.folder, PathBuf::from("reports/a11y"));
        assert_eq!(config.report_mode(), ReportMode::Basic);
        assert_eq!(config.report.display_width, 960.0);
        assert_eq!(config.options.only_warn_impacts, vec!["serious", "moderate"]);
        assert_eq!(config.options.retries, 2);
        assert_eq!(
            config.options.impact_styling["critical"].icon.as_deref(),
            Some("🔴")
        );
        assert_eq!(
            config.options.rules.unwrap()["color-contrast"]["enabled"],
            serde_json::Value::Bool(false)
        );
    }

    #[test]
    fn test_generate_report_flag() {
        let config = Config::from_str("[options]\ngenerateReport = false").unwrap();
        assert_eq!(config.report_mode(), ReportMode::Off);
    }

    #[test]
    fn test_invalid_report_mode() {
        assert!(Config::from_str("[report]\nmode = \"fancy\"").is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a11y.toml");
        fs::write(&path, "[report]\nfolder = \"out\"").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.report.folder, PathBuf::from("out"));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/a11y.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
