//! Per-impact violation counts and severity ordering

use std::fmt;

use a11y_types::{Impact, ViolationRecord};
use serde::{Serialize, Serializer};

use crate::policy::SeverityPolicy;

/// Count for one impact level; impacts outside the policy are not analyzed
/// rather than zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactCount {
    Counted(usize),
    NotAnalyzed,
}

impl ImpactCount {
    pub fn value(self) -> Option<usize> {
        match self {
            ImpactCount::Counted(n) => Some(n),
            ImpactCount::NotAnalyzed => None,
        }
    }
}

impl fmt::Display for ImpactCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactCount::Counted(n) => write!(f, "{}", n),
            ImpactCount::NotAnalyzed => f.write_str("n/a"),
        }
    }
}

impl Serialize for ImpactCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ImpactCount::Counted(n) => serializer.serialize_u64(*n as u64),
            ImpactCount::NotAnalyzed => serializer.serialize_none(),
        }
    }
}

/// Violation counts per impact, indexed by rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregate {
    counts: [ImpactCount; 4],
}

impl Aggregate {
    pub fn count(&self, impact: Impact) -> ImpactCount {
        self.counts[impact.rank()]
    }

    /// `(impact, count)` for every analyzed impact, in priority order
    pub fn analyzed(&self) -> impl Iterator<Item = (Impact, usize)> + '_ {
        Impact::ALL
            .into_iter()
            .filter_map(|impact| self.count(impact).value().map(|n| (impact, n)))
    }

    /// Sum of counts over the given impacts (non-analyzed count as zero)
    pub fn total_for(&self, impacts: &[Impact]) -> usize {
        impacts
            .iter()
            .filter_map(|impact| self.count(*impact).value())
            .sum()
    }

    pub fn total(&self) -> usize {
        self.analyzed().map(|(_, n)| n).sum()
    }
}

impl Serialize for Aggregate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(Impact::ALL.len()))?;
        for impact in Impact::ALL {
            map.serialize_entry(impact.as_str(), &self.count(impact))?;
        }
        map.end()
    }
}

/// Count violations per analyzed impact
pub fn aggregate(violations: &[ViolationRecord], policy: &SeverityPolicy) -> Aggregate {
    let mut counts = [ImpactCount::NotAnalyzed; 4];
    for impact in policy.analyzed() {
        let n = violations.iter().filter(|v| v.has_impact(impact)).count();
        counts[impact.rank()] = ImpactCount::Counted(n);
    }
    Aggregate { counts }
}

/// Stable sort by severity: equal impacts keep their input order
pub fn sort_by_severity(violations: &mut [ViolationRecord]) {
    violations.sort_by_key(ViolationRecord::rank);
}
