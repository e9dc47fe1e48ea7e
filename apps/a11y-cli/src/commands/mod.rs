pub mod check;
pub mod spec;

use std::fs;
use std::path::Path;

use a11y_report::Config;
use a11y_types::{ContextSpec, ScanResults};
use anyhow::{Context, Result};
use tracing::debug;

/// Config file if given, defaults otherwise
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration");
            Config::from_file(path)
        }
        None => Ok(Config::default()),
    }
}

/// Read an axe-core results file
pub fn load_scan(path: &Path) -> Result<ScanResults> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scan results: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse scan results: {}", path.display()))
}

/// Analysis context given as JSON on the command line; the whole document by default
pub fn parse_context(raw: Option<&str>) -> Result<ContextSpec> {
    match raw {
        Some(raw) => serde_json::from_str(raw)
            .or_else(|_| serde_json::from_value(serde_json::Value::String(raw.to_string())))
            .with_context(|| format!("Invalid analysis context: {}", raw)),
        None => Ok(ContextSpec::Document),
    }
}
