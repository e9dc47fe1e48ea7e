//! HTML report rendering
//!
//! Reports are self-contained HTML documents with embedded CSS and a few
//! lines of script for the expand / collapse controls. Rendering is a pure
//! function of its input: the generation timestamp is injected by the caller,
//! so the same input always yields byte-identical output.

mod basic;
mod detailed;
mod style;

use a11y_engine::{Aggregate, ImpactStyling, SeverityPolicy};
use a11y_types::{ContextSpec, ReportMode, ViolationRecord};
use serde::Serialize;

use crate::escape::{escape_html, single_quote_json};
use crate::overlay::Dimensions;

/// Descriptive metadata shown in the report header
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub spec_name: String,
    pub test_name: String,
    pub url: String,
    /// Pre-formatted generation timestamp
    pub generated_on: String,
    pub context: ContextSpec,
    pub run_only: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<serde_json::Value>,
}

/// Annotated screenshot placed next to the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenshotInfo {
    /// File name relative to the report
    pub file_name: String,
    /// Pixel size of the image file
    pub natural: Dimensions,
    /// Size of the box the image is shown in
    pub displayed: Dimensions,
}

impl ScreenshotInfo {
    /// Show the screenshot `display_width` pixels wide, keeping its aspect ratio
    pub fn scaled_to_width(file_name: impl Into<String>, natural: Dimensions, display_width: f64) -> Self {
        let height = if natural.width > 0.0 {
            natural.height * display_width / natural.width
        } else {
            0.0
        };
        Self {
            file_name: file_name.into(),
            natural,
            displayed: Dimensions::new(display_width, height),
        }
    }
}

/// Everything a template needs
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub context: &'a ReportContext,
    /// Violations sorted by severity
    pub violations: &'a [ViolationRecord],
    pub aggregate: &'a Aggregate,
    pub policy: &'a SeverityPolicy,
    pub styling: &'a ImpactStyling,
    pub device_pixel_ratio: f64,
    /// `None` when the screenshot could not be captured or moved
    pub screenshot: Option<&'a ScreenshotInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Template {
    Detailed,
    Basic,
}

/// Renders one of the two report templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRenderer {
    template: Template,
}

impl ReportRenderer {
    pub fn detailed() -> Self {
        Self {
            template: Template::Detailed,
        }
    }

    pub fn basic() -> Self {
        Self {
            template: Template::Basic,
        }
    }

    /// Renderer for a report mode, `None` when reports are turned off
    pub fn for_mode(mode: ReportMode) -> Option<Self> {
        match mode {
            ReportMode::Off => None,
            ReportMode::Detailed => Some(Self::detailed()),
            ReportMode::Basic => Some(Self::basic()),
        }
    }

    pub fn render(&self, input: &ReportInput<'_>) -> String {
        match self.template {
            Template::Detailed => detailed::render(input),
            Template::Basic => basic::render(input),
        }
    }
}

/// Human-readable rules configuration
fn rules_html(rules: &serde_json::Value) -> String {
    escape_html(&single_quote_json(&rules.to_string()))
}

fn px(value: f64) -> String {
    format!("{:.2}px", value)
}
