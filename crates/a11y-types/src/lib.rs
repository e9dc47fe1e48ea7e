pub mod context;
pub mod options;
pub mod types;

pub use context::{ContextSpec, ElementRef};
pub use options::{CheckOptions, ReportMode, ScanRequest, StyleOverride};
pub use types::{
    AffectedNode, BoundingBox, DocumentMetrics, Impact, ParseImpactError, ScanResults,
    ViolationRecord,
};
