//! a11y-check
//!
//! Runs the accessibility check pipeline over axe-core scan results:
//!
//! - `check`: classify one scan, print the summary, publish the HTML report,
//!   exit non-zero when the check fails
//! - `spec`: roll up several scans of one spec and narrate the results

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

/// Command-line arguments for the accessibility check runner
#[derive(Parser, Debug)]
#[command(name = "a11y-check")]
#[command(about = "Classify axe-core accessibility results and generate reports")]
#[command(version)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check one scan result
    Check(commands::check::CheckArgs),

    /// Roll up the scans of a whole spec
    Spec(commands::spec::SpecArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = commands::load_config(cli.config.as_deref())?;

    let passed = match cli.command {
        Commands::Check(args) => commands::check::run(args, config)?,
        Commands::Spec(args) => commands::spec::run(args, config)?,
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
