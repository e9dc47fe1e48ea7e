use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity classification of a violation, as reported by axe-core.
///
/// Variants are declared in priority order, so the derived `Ord` sorts the most
/// severe impact first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Critical,
    Serious,
    Moderate,
    Minor,
}

impl Impact {
    /// All impacts, most severe first.
    pub const ALL: [Impact; 4] = [
        Impact::Critical,
        Impact::Serious,
        Impact::Moderate,
        Impact::Minor,
    ];

    /// Position in the priority ranking (0 = critical).
    pub fn rank(self) -> usize {
        match self {
            Impact::Critical => 0,
            Impact::Serious => 1,
            Impact::Moderate => 2,
            Impact::Minor => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Impact::Critical => "critical",
            Impact::Serious => "serious",
            Impact::Moderate => "moderate",
            Impact::Minor => "minor",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown impact level: {0}")]
pub struct ParseImpactError(pub String);

impl FromStr for Impact {
    type Err = ParseImpactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Ok(Impact::Critical),
            "serious" => Ok(Impact::Serious),
            "moderate" => Ok(Impact::Moderate),
            "minor" => Ok(Impact::Minor),
            _ => Err(ParseImpactError(s.to_string())),
        }
    }
}

/// Page rectangle of an element at scan time, in CSS pixels relative to the document
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// One DOM element matching a rule violation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedNode {
    /// CSS selectors (one per frame level)
    pub target: Vec<String>,
    #[serde(default)]
    pub html: String,
    #[serde(default)]
    pub failure_summary: String,
    /// Captured by the host right before the screenshot; absent means no overlay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
}

impl AffectedNode {
    /// Selector list joined the way it is shown to users
    pub fn selector(&self) -> String {
        self.target.join(", ")
    }

    /// True when the node targets the document root element
    pub fn targets_document_root(&self) -> bool {
        self.target.iter().any(|t| t.trim() == "html")
    }
}

/// A single accessibility rule failure, immutable once received from the scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationRecord {
    pub id: String,
    /// axe-core emits `null` for rules without an impact; those never match a policy
    #[serde(default)]
    pub impact: Option<Impact>,
    #[serde(default)]
    pub help: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub help_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub nodes: Vec<AffectedNode>,
}

impl ViolationRecord {
    pub fn has_impact(&self, impact: Impact) -> bool {
        self.impact == Some(impact)
    }

    /// Rank used for sorting; records without an impact sort after minor
    pub fn rank(&self) -> usize {
        self.impact.map(Impact::rank).unwrap_or(Impact::ALL.len())
    }
}

/// Page metrics reported by the host alongside the scan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetrics {
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_device_pixel_ratio")]
    pub device_pixel_ratio: f64,
}

fn default_device_pixel_ratio() -> f64 {
    1.0
}

/// Scan output as consumed by the pipeline: an axe-core results object
/// plus optional page metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResults {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub violations: Vec<ViolationRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<DocumentMetrics>,
}
