//! Icons and overlay styles per impact level

use std::collections::BTreeMap;

use a11y_types::{Impact, StyleOverride};
use serde::Serialize;
use tracing::warn;

/// Icon plus the SVG style applied to the overlay rectangle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpactStyle {
    pub icon: String,
    pub style: String,
}

impl ImpactStyle {
    fn new(icon: &str, style: &str) -> Self {
        Self {
            icon: icon.to_string(),
            style: style.to_string(),
        }
    }

    fn merge(&mut self, over: &StyleOverride) {
        if let Some(icon) = &over.icon {
            self.icon = icon.clone();
        }
        if let Some(style) = &over.style {
            self.style = style.clone();
        }
    }
}

/// Styling table: one entry per impact plus the `fixme` marker used for
/// affected elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpactStyling {
    impacts: [ImpactStyle; 4],
    fixme: ImpactStyle,
}

impl Default for ImpactStyling {
    fn default() -> Self {
        Self {
            impacts: [
                ImpactStyle::new(
                    "🟥",
                    "fill: #DE071B; fill-opacity: 0; stroke: #DE071B; stroke-width: 10;",
                ),
                ImpactStyle::new(
                    "🟧",
                    "fill: #FFA66A; fill-opacity: 0; stroke: #FFA66A; stroke-width: 10;",
                ),
                ImpactStyle::new(
                    "🟨",
                    "fill: #ECDE05; fill-opacity: 0; stroke: #ECDE05; stroke-width: 10;",
                ),
                ImpactStyle::new(
                    "🟦",
                    "fill: #4598FF; fill-opacity: 0; stroke: #4598FF; stroke-width: 10;",
                ),
            ],
            fixme: ImpactStyle::new("🛠️", ""),
        }
    }
}

impl ImpactStyling {
    /// Defaults with user overrides merged field by field
    pub fn with_overrides(overrides: &BTreeMap<String, StyleOverride>) -> Self {
        let mut styling = Self::default();
        for (key, over) in overrides {
            if key.eq_ignore_ascii_case("fixme") {
                styling.fixme.merge(over);
                continue;
            }
            match key.parse::<Impact>() {
                Ok(impact) => styling.impacts[impact.rank()].merge(over),
                Err(err) => warn!("Ignoring impactStyling entry: {}", err),
            }
        }
        styling
    }

    pub fn get(&self, impact: Impact) -> &ImpactStyle {
        &self.impacts[impact.rank()]
    }

    pub fn icon(&self, impact: Impact) -> &str {
        &self.get(impact).icon
    }

    pub fn fixme_icon(&self) -> &str {
        &self.fixme.icon
    }
}
