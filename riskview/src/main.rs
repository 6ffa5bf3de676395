//! Terminal entry point: renders one scan report from a findings file.
//!
//! The desktop application feeds the same core through its own UI; this
//! binary exists for development and for inspecting exported scan results
//! without the host runtime.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use riskview::config::Config;
use riskview::dashboard::{Dashboard, Scanner};
use riskview::finding::Finding;
use riskview::session::MemorySessionStore;
use riskview::suggest::SelectError;
use riskview::table::{sort_rows, LevelFilter, SortState};
use riskview::{output, MetadataCatalog};

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "riskview - render a security scan report in the terminal",
    long_about = None
)]
struct Cli {
    /// JSON file with the scan's findings.
    findings: PathBuf,

    /// Directory holding `issues.<locale>.json` metadata files.
    #[arg(long)]
    catalog: PathBuf,

    /// Locale for issue metadata (defaults to the configured locale).
    #[arg(long)]
    locale: Option<String>,

    /// Scope the suggested issue to one category, e.g. "Security".
    #[arg(long)]
    category: Option<String>,

    /// Number of scans shown in the trend section.
    #[arg(long)]
    window: Option<usize>,
}

/// Scanner that replays findings exported to a JSON file.
struct FileScanner {
    path: PathBuf,
}

impl Scanner for FileScanner {
    fn run_scan(&mut self) -> Result<Vec<Finding>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("reading findings file {}", self.path.display()))?;
        serde_json::from_str(&content).context("parsing findings")
    }
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load();
    let locale = cli.locale.unwrap_or_else(|| config.locale().to_owned());
    let window = cli.window.unwrap_or_else(|| config.graph_window());

    let catalog = MetadataCatalog::load_dir(&cli.catalog)?;
    let scanner = FileScanner { path: cli.findings };
    let mut dashboard = Dashboard::new(scanner, MemorySessionStore::new(), catalog, locale);
    dashboard.refresh().context("running scan")?;

    let mut stdout = io::stdout().lock();
    output::print_header(&mut stdout)?;
    output::print_status(&mut stdout, dashboard.counters())?;

    let filter = LevelFilter::default();
    let sort = SortState::default();
    let mut issues = dashboard.issue_rows(&filter);
    sort_rows(&mut issues, sort.column, sort.direction);
    output::print_issue_table(&mut stdout, "Issues", &issues)?;

    let mut acceptable = dashboard.acceptable_rows();
    sort_rows(&mut acceptable, sort.column, sort.direction);
    output::print_acceptable_table(&mut stdout, "Acceptable findings", &acceptable)?;

    match dashboard.suggested_issue(cli.category.as_deref()) {
        Ok(suggested) => writeln!(
            stdout,
            "\nSuggested issue: id {} (result {}, {})",
            suggested.issue_id,
            suggested.result_id,
            suggested.severity.as_str()
        )?,
        Err(SelectError::NoEligibleIssue) => {
            writeln!(stdout, "\nNo suggested issue: nothing actionable found")?;
        }
    }

    writeln!(stdout)?;
    let series = dashboard.trend_series(window, &filter);
    output::print_trend(&mut stdout, &series)?;
    Ok(())
}
