//! Report artifacts on disk
//!
//! Every check that generates a report gets its own folder under the
//! accessibility folder, named after the spec, the test and the run date.
//! The host moves the annotated screenshot into that folder and the rendered
//! report is written next to it. Failures here never fail the check: they
//! degrade the report and are surfaced as a message.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::error::ReportError;
use crate::escape::sanitize_file_name;
use crate::html::{ReportInput, ReportRenderer, ScreenshotInfo};
use crate::overlay::Dimensions;
use crate::reporter::{table_rows, TableRow};

pub const DEFAULT_FOLDER: &str = "cypress/accessibility";
pub const REPORT_FILE_NAME: &str = "Accessibility Report.html";
const SCREENSHOT_BASE_NAME: &str = "Accessibility Issues Image";

/// Side effects the pipeline needs from its host
pub trait TaskHost {
    fn create_folder_if_missing(&self, path: &Path) -> Result<(), ReportError>;
    fn move_file(&self, from: &Path, to: &Path) -> Result<(), ReportError>;
    fn write_file(&self, path: &Path, contents: &str) -> Result<(), ReportError>;
    fn log_table(&self, rows: &[TableRow]);
}

/// Host backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTaskHost;

impl TaskHost for FsTaskHost {
    fn create_folder_if_missing(&self, path: &Path) -> Result<(), ReportError> {
        fs::create_dir_all(path).map_err(|source| ReportError::CreateFolder {
            path: path.to_path_buf(),
            source,
        })
    }

    fn move_file(&self, from: &Path, to: &Path) -> Result<(), ReportError> {
        fs::rename(from, to)
            .or_else(|_| fs::copy(from, to).and_then(|_| fs::remove_file(from)))
            .map_err(|source| ReportError::MoveFile {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                source,
            })
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), ReportError> {
        fs::write(path, contents).map_err(|source| ReportError::WriteFile {
            path: path.to_path_buf(),
            source,
        })
    }

    fn log_table(&self, rows: &[TableRow]) {
        for row in rows {
            info!(
                impact = %row.impact,
                rule = %row.ruleid,
                selectors = %row.selectors,
                "Accessibility violation"
            );
        }
    }
}

/// Date stamp used in report folder names, e.g. `6-23-2024 3_13_03 PM`
pub fn file_date(at: &NaiveDateTime) -> String {
    at.format("%-m-%-d-%Y %-I_%M_%S %p").to_string()
}

/// Timestamp shown in the report header
pub fn generated_on(at: &NaiveDateTime) -> String {
    at.format("%a %b %d %Y %H:%M:%S").to_string()
}

fn attempt_suffix(attempt: u32) -> String {
    if attempt > 0 {
        format!(" (attempt {})", attempt + 1)
    } else {
        String::new()
    }
}

/// Folder name for one check's artifacts
pub fn report_id(spec: &str, test: &str, date: &str, attempt: u32) -> String {
    let id = sanitize_file_name(&format!(
        "Accessibility Report --- {} --- {} ({})",
        spec, test, date
    ));
    format!("{}{}", id, attempt_suffix(attempt))
}

pub fn screenshot_file_name(attempt: u32) -> String {
    format!("{}{}.png", SCREENSHOT_BASE_NAME, attempt_suffix(attempt))
}

/// Where one check's artifacts go
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactLayout {
    pub report_id: String,
    pub folder: PathBuf,
    pub attempt: u32,
}

impl ArtifactLayout {
    pub fn new(root: impl AsRef<Path>, spec: &str, test: &str, date: &str, attempt: u32) -> Self {
        let report_id = report_id(spec, test, date, attempt);
        Self {
            folder: root.as_ref().join(&report_id),
            report_id,
            attempt,
        }
    }

    pub fn report_path(&self) -> PathBuf {
        self.folder.join(REPORT_FILE_NAME)
    }

    pub fn screenshot_file_name(&self) -> String {
        screenshot_file_name(self.attempt)
    }

    pub fn screenshot_path(&self) -> PathBuf {
        self.folder.join(self.screenshot_file_name())
    }
}

/// Result of publishing a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishOutcome {
    pub report_path: PathBuf,
    pub written: bool,
    /// Screenshot shown in the report, if any
    pub screenshot: Option<PathBuf>,
    /// Message for the runner log
    pub message: String,
}

pub fn success_message(path: &Path) -> String {
    format!(
        "✔️✔️✔️✔️ **SUCCESSFULLY GENERATED ACCESSIBILITY REPORT AT: {}**",
        path.display()
    )
}

pub fn failure_message(path: &Path) -> String {
    format!(
        "❌❌❌❌ **FAILED TO GENERATE ACCESSIBILITY REPORT AT: {}**",
        path.display()
    )
}

/// Pixel size of a screenshot file
pub fn screenshot_dimensions(path: &Path) -> Result<Dimensions, ReportError> {
    let (width, height) = image::image_dimensions(path).map_err(|source| ReportError::Screenshot {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Dimensions::new(f64::from(width), f64::from(height)))
}

/// Publish a report: create the folder, move the screenshot in, render, write.
///
/// `input.screenshot` is ignored; the screenshot section is built from
/// `screenshot_source` once it has been moved into the report folder.
#[instrument(skip_all, fields(report_id = %layout.report_id))]
pub fn publish<H: TaskHost>(
    host: &H,
    renderer: ReportRenderer,
    layout: &ArtifactLayout,
    input: ReportInput<'_>,
    screenshot_source: Option<&Path>,
    display_width: f64,
) -> PublishOutcome {
    let report_path = layout.report_path();
    host.log_table(&table_rows(input.violations));

    if let Err(err) = host.create_folder_if_missing(&layout.folder) {
        warn!("{}", err);
        return PublishOutcome {
            message: failure_message(&report_path),
            report_path,
            written: false,
            screenshot: None,
        };
    }

    let screenshot = screenshot_source.and_then(|source| {
        let target = layout.screenshot_path();
        let natural = screenshot_dimensions(source)
            .and_then(|natural| host.move_file(source, &target).map(|()| natural));
        match natural {
            Ok(natural) => Some((
                target,
                ScreenshotInfo::scaled_to_width(layout.screenshot_file_name(), natural, display_width),
            )),
            Err(err) => {
                warn!("Report will not include the screenshot: {}", err);
                None
            }
        }
    });
    if screenshot_source.is_none() {
        warn!("No screenshot provided; report will not include the screenshot");
    }

    let html = renderer.render(&ReportInput {
        screenshot: screenshot.as_ref().map(|(_, info)| info),
        ..input
    });

    match host.write_file(&report_path, &html) {
        Ok(()) => {
            info!(path = %report_path.display(), "Accessibility report generated");
            PublishOutcome {
                message: success_message(&report_path),
                report_path,
                written: true,
                screenshot: screenshot.map(|(path, _)| path),
            }
        }
        Err(err) => {
            warn!("{}", err);
            PublishOutcome {
                message: failure_message(&report_path),
                report_path,
                written: false,
                screenshot: screenshot.map(|(path, _)| path),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_log_table_visible_at_info() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let rows = vec![TableRow {
            impact: "CRITICAL".to_string(),
            ruleid: "image-alt".to_string(),
            tags: "wcag2a".to_string(),
            selectors: "#hero > img".to_string(),
            description: "Images must have alternate text".to_string(),
            moreinfo: "https://dequeuniversity.com/rules/axe/4.9/image-alt".to_string(),
        }];
        tracing::subscriber::with_default(subscriber, || FsTaskHost.log_table(&rows));

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Accessibility violation"), "{}", output);
        assert!(output.contains("rule=image-alt"), "{}", output);
    }

    #[test]
    fn test_report_id_sanitized() {
        assert_eq!(
            report_id("a11y/home.cy.js", "checks: \"hero\"", "6-23-2024 3_13_03 PM", 0),
            "Accessibility Report --- a11y_home.cy.js --- checks_ _hero_ (6-23-2024 3_13_03 PM)"
        );
    }

    #[test]
    fn test_attempt_suffix() {
        assert_eq!(
            report_id("home.cy.js", "t", "d", 2),
            "Accessibility Report --- home.cy.js --- t (d) (attempt 3)"
        );
        assert_eq!(screenshot_file_name(0), "Accessibility Issues Image.png");
        assert_eq!(screenshot_file_name(1), "Accessibility Issues Image (attempt 2).png");
    }

    #[test]
    fn test_dates() {
        let at = NaiveDate::from_ymd_opt(2024, 6, 23)
            .unwrap()
            .and_hms_opt(15, 13, 3)
            .unwrap();
        assert_eq!(file_date(&at), "6-23-2024 3_13_03 PM");
        assert_eq!(generated_on(&at), "Sun Jun 23 2024 15:13:03");
    }

    #[test]
    fn test_layout_paths() {
        let layout = ArtifactLayout::new(DEFAULT_FOLDER, "home.cy.js", "t", "d", 1);
        assert_eq!(
            layout.report_path(),
            Path::new("cypress/accessibility/Accessibility Report --- home.cy.js --- t (d) (attempt 2)/Accessibility Report.html")
        );
        assert!(layout
            .screenshot_path()
            .ends_with("Accessibility Issues Image (attempt 2).png"));
    }

    #[test]
    fn test_messages() {
        let path = Path::new("out/Accessibility Report.html");
        assert_eq!(
            success_message(path),
            "✔️✔️✔️✔️ **SUCCESSFULLY GENERATED ACCESSIBILITY REPORT AT: out/Accessibility Report.html**"
        );
        assert!(failure_message(path).starts_with("❌❌❌❌ **FAILED"));
    }
}
