use std::path::PathBuf;

use a11y_engine::{voice, CheckReport, CheckSession, TestRun, TestState};
use a11y_report::artifacts::{file_date, generated_on, publish, ArtifactLayout, FsTaskHost};
use a11y_report::{
    annotations, CheckSummary, Config, LogKind, OutputFormat, ReportContext, ReportInput,
    ReportRenderer, Reporter,
};
use a11y_types::ScanResults;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use tracing::{debug, info};

use super::{load_scan, parse_context};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// axe-core results JSON (`{ url, violations, document? }`)
    #[arg(short, long)]
    pub results: PathBuf,

    /// Spec (test file) name shown in the report
    #[arg(long, default_value = "spec")]
    pub spec: String,

    /// Test title shown in the report
    #[arg(long, default_value = "accessibility check")]
    pub test: String,

    /// Page URL, when missing from the results file
    #[arg(long)]
    pub url: Option<String>,

    /// Analysis context as JSON or a CSS selector
    #[arg(long)]
    pub context: Option<String>,

    /// Screenshot of the page taken right after the scan
    #[arg(long)]
    pub screenshot: Option<PathBuf>,

    /// Zero-based retry index
    #[arg(long, default_value = "0")]
    pub attempt: u32,

    /// Output format: console, json or json-pretty
    #[arg(short, long, default_value = "console")]
    pub format: OutputFormat,

    /// Root folder for reports (overrides the config file)
    #[arg(long)]
    pub folder: Option<PathBuf>,

    /// Print the narration for the result
    #[arg(long)]
    pub narrate: bool,
}

/// Returns whether the check passed
pub fn run(args: CheckArgs, config: Config) -> Result<bool> {
    let scan = load_scan(&args.results)?;
    let context = parse_context(args.context.as_deref())?;
    let session = CheckSession::new(context, config.options.clone()).with_attempt(args.attempt);

    debug!(request = ?session.scan_request(), "Scanner options");

    let url = args.url.clone().unwrap_or_else(|| scan.url.clone());
    let report = session.run(scan.violations.clone());

    for entry in annotations(&report.violations, session.styling(), &report.aggregate, session.policy()) {
        match entry.kind {
            LogKind::Summary => info!("{} {}", entry.name, entry.message),
            _ => debug!("{} {}", entry.name, entry.message),
        }
    }

    let artifact = publish_report(&args, &config, &session, &report, &scan, &url);

    let passed = report.outcome.passed();
    let narration = args.narrate.then(|| {
        let run = TestRun {
            title: args.test.clone(),
            state: match report.outcome.message() {
                Some(reason) => TestState::Failed {
                    reason: reason.to_string(),
                },
                None => TestState::Passed,
            },
            attempt: args.attempt,
        };
        voice::summarize(&run, session.policy(), &report.aggregate)
    });

    let summary = CheckSummary {
        spec_name: args.spec,
        test_title: args.test,
        url,
        policy: session.policy().clone(),
        report,
        artifact,
    };
    Reporter::new(args.format).report(&summary)?;

    if let Some(narration) = narration {
        println!("{}", narration);
    }

    Ok(passed)
}

/// Write the HTML report when enabled; returns the publish message
fn publish_report(
    args: &CheckArgs,
    config: &Config,
    session: &CheckSession,
    report: &CheckReport,
    scan: &ScanResults,
    url: &str,
) -> Option<String> {
    let renderer = ReportRenderer::for_mode(config.report_mode())?;
    let now = Local::now().naive_local();
    let root = args.folder.as_ref().unwrap_or(&config.report.folder);
    let layout = ArtifactLayout::new(root, &args.spec, &args.test, &file_date(&now), args.attempt);

    let context = ReportContext {
        spec_name: args.spec.clone(),
        test_name: args.test.clone(),
        url: url.to_string(),
        generated_on: generated_on(&now),
        context: session.context().clone(),
        run_only: session.options().run_only.clone(),
        rules: session.options().rules.clone(),
    };
    let device_pixel_ratio = scan
        .document
        .as_ref()
        .map(|doc| doc.device_pixel_ratio)
        .unwrap_or(1.0);

    let outcome = publish(
        &FsTaskHost,
        renderer,
        &layout,
        ReportInput {
            context: &context,
            violations: &report.violations,
            aggregate: &report.aggregate,
            policy: session.policy(),
            styling: session.styling(),
            device_pixel_ratio,
            screenshot: None,
        },
        args.screenshot.as_deref(),
        config.report.display_width,
    );
    Some(outcome.message)
}
