//! Option bag accepted by an accessibility check
//!
//! Mirrors the options a caller passes to the check command. Scanner options
//! (`runOnly`, `rules`, `iframes`, ...) are carried through untouched to the
//! [`ScanRequest`]; `includedImpacts`, `onlyWarnImpacts`, `impactStyling` and
//! `generateReport` are interpreted by the pipeline itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Which HTML report, if any, to generate for a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Log only, no report file
    Off,
    /// Full interactive report with the annotated screenshot
    #[default]
    Detailed,
    /// Minimal single-page report
    Basic,
}

impl ReportMode {
    pub fn is_enabled(self) -> bool {
        self != ReportMode::Off
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReportModeRepr {
    Flag(bool),
    Name(String),
}

impl<'de> Deserialize<'de> for ReportMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match ReportModeRepr::deserialize(deserializer)? {
            ReportModeRepr::Flag(true) => Ok(ReportMode::Detailed),
            ReportModeRepr::Flag(false) => Ok(ReportMode::Off),
            ReportModeRepr::Name(name) => match name.to_ascii_lowercase().as_str() {
                "detailed" => Ok(ReportMode::Detailed),
                "basic" => Ok(ReportMode::Basic),
                other => Err(serde::de::Error::custom(format!(
                    "generateReport must be a boolean, \"basic\" or \"detailed\" (got \"{}\")",
                    other
                ))),
            },
        }
    }
}

impl Serialize for ReportMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ReportMode::Off => serializer.serialize_bool(false),
            ReportMode::Detailed => serializer.serialize_str("detailed"),
            ReportMode::Basic => serializer.serialize_str("basic"),
        }
    }
}

/// User override for one entry of the impact styling table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyleOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// Options for a single accessibility check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOptions {
    #[serde(default = "default_run_only")]
    pub run_only: Vec<String>,
    /// Impacts that fail the check. Kept as strings: unknown levels are tolerated.
    #[serde(default = "default_included_impacts")]
    pub included_impacts: Vec<String>,
    /// Impacts reported as warnings only
    #[serde(default)]
    pub only_warn_impacts: Vec<String>,
    /// Keyed by impact name or `fixme`
    #[serde(default)]
    pub impact_styling: BTreeMap<String, StyleOverride>,
    #[serde(default)]
    pub retries: u32,
    /// Milliseconds between scanner retries
    #[serde(default = "default_interval")]
    pub interval: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_types: Option<Vec<String>>,
    #[serde(default = "default_true")]
    pub selectors: bool,
    #[serde(default)]
    pub ancestry: bool,
    #[serde(default)]
    pub xpath: bool,
    #[serde(default)]
    pub absolute_paths: bool,
    #[serde(default = "default_true")]
    pub iframes: bool,
    #[serde(default)]
    pub element_ref: bool,
    #[serde(default = "default_frame_wait_time")]
    pub frame_wait_time: u64,
    #[serde(default = "default_true")]
    pub preload: bool,
    #[serde(default)]
    pub performance_timer: bool,
    #[serde(default = "default_ping_wait_time")]
    pub ping_wait_time: u64,
    #[serde(default)]
    pub generate_report: ReportMode,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            run_only: default_run_only(),
            included_impacts: default_included_impacts(),
            only_warn_impacts: Vec::new(),
            impact_styling: BTreeMap::new(),
            retries: 0,
            interval: default_interval(),
            rules: None,
            reporter: None,
            result_types: None,
            selectors: true,
            ancestry: false,
            xpath: false,
            absolute_paths: false,
            iframes: true,
            element_ref: false,
            frame_wait_time: default_frame_wait_time(),
            preload: true,
            performance_timer: false,
            ping_wait_time: default_ping_wait_time(),
            generate_report: ReportMode::default(),
        }
    }
}

fn default_run_only() -> Vec<String> {
    ["wcag2a", "wcag2aa", "wcag21a", "wcag21aa", "best-practice"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_included_impacts() -> Vec<String> {
    vec!["critical".to_string(), "serious".to_string()]
}

fn default_interval() -> u64 {
    1000
}

fn default_frame_wait_time() -> u64 {
    60_000
}

fn default_ping_wait_time() -> u64 {
    500
}

fn default_true() -> bool {
    true
}

/// Options handed to the scanner collaborator.
///
/// `included_impacts` is the union of failing and warn-only impacts so the
/// scanner reports both, and `skip_failures` is always set: pass/fail is
/// decided by the outcome evaluator, never by the scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub run_only: Vec<String>,
    pub included_impacts: Vec<String>,
    pub retries: u32,
    pub interval: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_types: Option<Vec<String>>,
    pub selectors: bool,
    pub ancestry: bool,
    pub xpath: bool,
    pub absolute_paths: bool,
    pub iframes: bool,
    pub element_ref: bool,
    pub frame_wait_time: u64,
    pub preload: bool,
    pub performance_timer: bool,
    pub ping_wait_time: u64,
    pub skip_failures: bool,
}
