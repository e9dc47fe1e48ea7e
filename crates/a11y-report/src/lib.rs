//! Report output for accessibility checks
//!
//! Renders HTML reports with an annotated screenshot, runner-log entries and
//! console / JSON summaries, and publishes report artifacts through a
//! [`TaskHost`].

pub mod annotations;
pub mod artifacts;
pub mod config;
pub mod error;
pub mod escape;
pub mod html;
pub mod overlay;
pub mod reporter;

pub use annotations::{annotations, LogEntry, LogKind};
pub use artifacts::{publish, ArtifactLayout, FsTaskHost, PublishOutcome, TaskHost};
pub use config::{Config, ReportSettings};
pub use error::ReportError;
pub use html::{ReportContext, ReportInput, ReportRenderer, ScreenshotInfo};
pub use overlay::{fit_image, overlay_boxes, project, Dimensions, OverlayBox, Rect};
pub use reporter::{CheckSummary, OutputFormat, Reporter};
