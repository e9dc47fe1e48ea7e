//! Severity policy: which impacts fail a check and which only warn

use a11y_types::{CheckOptions, Impact, ScanRequest};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How the policy treats a given impact level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactRole {
    Fail,
    Warn,
    NotAnalyzed,
}

/// Normalized severity policy.
///
/// Invariant: `included` and `only_warn` are disjoint, deduplicated, and in
/// priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityPolicy {
    included: Vec<Impact>,
    only_warn: Vec<Impact>,
}

impl SeverityPolicy {
    /// Build a policy from raw option strings. Unknown levels are dropped with a
    /// warning; an impact listed in both sets is kept only as failing.
    pub fn normalize<S: AsRef<str>>(included: &[S], only_warn: &[S]) -> Self {
        let included = parse_impacts(included, "includedImpacts");
        let only_warn = parse_impacts(only_warn, "onlyWarnImpacts")
            .into_iter()
            .filter(|impact| !included.contains(impact))
            .collect();
        Self {
            included,
            only_warn,
        }
    }

    pub fn from_options(options: &CheckOptions) -> Self {
        Self::normalize(&options.included_impacts, &options.only_warn_impacts)
    }

    pub fn included(&self) -> &[Impact] {
        &self.included
    }

    pub fn only_warn(&self) -> &[Impact] {
        &self.only_warn
    }

    /// Union of both sets, in priority order
    pub fn analyzed(&self) -> Vec<Impact> {
        Impact::ALL
            .into_iter()
            .filter(|impact| self.is_analyzed(*impact))
            .collect()
    }

    pub fn is_analyzed(&self, impact: Impact) -> bool {
        self.role(impact) != ImpactRole::NotAnalyzed
    }

    pub fn role(&self, impact: Impact) -> ImpactRole {
        if self.included.contains(&impact) {
            ImpactRole::Fail
        } else if self.only_warn.contains(&impact) {
            ImpactRole::Warn
        } else {
            ImpactRole::NotAnalyzed
        }
    }

    /// Options for the scanner: scan every analyzed impact and never fail inline
    pub fn scan_request(&self, options: &CheckOptions) -> ScanRequest {
        ScanRequest {
            run_only: options.run_only.clone(),
            included_impacts: self
                .analyzed()
                .into_iter()
                .map(|impact| impact.to_string())
                .collect(),
            retries: options.retries,
            interval: options.interval,
            rules: options.rules.clone(),
            reporter: options.reporter.clone(),
            result_types: options.result_types.clone(),
            selectors: options.selectors,
            ancestry: options.ancestry,
            xpath: options.xpath,
            absolute_paths: options.absolute_paths,
            iframes: options.iframes,
            element_ref: options.element_ref,
            frame_wait_time: options.frame_wait_time,
            preload: options.preload,
            performance_timer: options.performance_timer,
            ping_wait_time: options.ping_wait_time,
            skip_failures: true,
        }
    }
}

impl Default for SeverityPolicy {
    fn default() -> Self {
        Self::from_options(&CheckOptions::default())
    }
}

fn parse_impacts<S: AsRef<str>>(raw: &[S], option: &str) -> Vec<Impact> {
    let mut impacts = Vec::new();
    for value in raw {
        match value.as_ref().parse::<Impact>() {
            Ok(impact) => {
                if !impacts.contains(&impact) {
                    impacts.push(impact);
                }
            }
            Err(err) => warn!("Ignoring {} entry: {}", option, err),
        }
    }
    impacts.sort();
    impacts
}
