#![forbid(unsafe_code)]

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::error::{HarnessError, Result};
use crate::report::Report;
use crate::scenarios::{Scenario, matching};

#[derive(Debug, Parser)]
#[command(
    name = "undolist-harness",
    about = "Run the undolist undo scenarios and report pass/fail",
    version
)]
pub struct Cli {
    /// Only run scenarios whose name contains this text (case-insensitive).
    #[arg(long)]
    pub filter: Option<String>,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Print scenario names and exit.
    #[arg(long)]
    pub list: bool,

    /// Raise log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let stdout = std::io::stdout();
    run(cli, &mut stdout.lock())
}

/// Run every scenario matching `filter`.
///
/// A filter that selects nothing is an error rather than an empty report.
pub fn run_scenarios(filter: Option<&str>) -> Result<Report> {
    let scenarios = selected(filter)?;
    Ok(Report::run(&scenarios))
}

/// Execute `cli`, writing the report to `out`.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    if cli.list {
        for scenario in selected(cli.filter.as_deref())? {
            writeln!(out, "{}", scenario.name)?;
        }
        return Ok(());
    }

    let report = run_scenarios(cli.filter.as_deref())?;
    if cli.json {
        writeln!(out, "{}", report.render_json()?)?;
    } else {
        write!(out, "{}", report.render_text())?;
    }

    if report.all_passed() {
        Ok(())
    } else {
        Err(HarnessError::ScenarioFailures {
            failed: report.total() - report.passed(),
            total: report.total(),
        })
    }
}

fn selected(filter: Option<&str>) -> Result<Vec<Scenario>> {
    let scenarios = matching(filter);
    if scenarios.is_empty() {
        return Err(HarnessError::NoScenarioMatched {
            filter: filter.unwrap_or_default().to_string(),
        });
    }
    Ok(scenarios)
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
