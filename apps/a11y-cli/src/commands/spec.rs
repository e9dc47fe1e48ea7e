use std::path::PathBuf;

use a11y_engine::{CheckSession, SpecSession, SpecSummary, TestRecord, TestRun, TestState};
use a11y_report::Config;
use a11y_types::ContextSpec;
use anyhow::Result;
use clap::Args;
use tracing::info;

use super::load_scan;

#[derive(Args, Debug)]
pub struct SpecArgs {
    /// Spec (test file) name
    #[arg(long)]
    pub name: String,

    /// One results file per test; the file stem is the test title
    #[arg(required = true)]
    pub results: Vec<PathBuf>,

    /// Tests of the spec that never ran
    #[arg(long, default_value = "0")]
    pub pending: usize,

    /// Print the full rollup as JSON instead of the narration
    #[arg(long)]
    pub json: bool,
}

/// Returns whether every test passed its accessibility check
pub fn run(args: SpecArgs, config: Config) -> Result<bool> {
    let summary = roll_up(&args, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.voice);
        for record in summary.tests.values() {
            println!("{}", record.summary_voice);
        }
    }

    Ok(summary.counts.failed_accessibility == 0)
}

fn roll_up(args: &SpecArgs, config: &Config) -> Result<SpecSummary> {
    let mut spec = SpecSession::new();
    spec.on_session_start(&args.name);

    for path in &args.results {
        let scan = load_scan(path)?;
        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let session = CheckSession::new(ContextSpec::Document, config.options.clone());
        let report = session.run(scan.violations);
        let state = match report.outcome.message() {
            Some(reason) => TestState::Failed {
                reason: reason.to_string(),
            },
            None => TestState::Passed,
        };
        info!(test = %title, verdict = report.outcome.label(), "Test checked");

        let run = TestRun {
            title,
            state,
            attempt: 0,
        };
        spec.on_check_complete(TestRecord::from_check(run, &session, &report));
    }

    Ok(spec.on_session_end(args.pending))
}
