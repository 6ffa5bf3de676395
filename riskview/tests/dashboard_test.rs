use std::collections::VecDeque;

use anyhow::{anyhow, Result};
use riskview::counters::StatusLabel;
use riskview::dashboard::{Dashboard, ScanError, Scanner};
use riskview::finding::Finding;
use riskview::session::{self, MemorySessionStore};
use riskview::severity::Severity;
use riskview::table::LevelFilter;
use riskview::test_utils::sample_catalog;

/// Scanner fake that replays a script of scan outcomes.
struct ScriptedScanner {
    script: VecDeque<Result<Vec<Finding>>>,
}

impl ScriptedScanner {
    fn new(script: Vec<Result<Vec<Finding>>>) -> Self {
        Self {
            script: script.into(),
        }
    }
}

impl Scanner for ScriptedScanner {
    fn run_scan(&mut self) -> Result<Vec<Finding>> {
        self.script
            .pop_front()
            .unwrap_or_else(|| Err(anyhow!("script exhausted")))
    }
}

#[test]
fn refresh_aggregates_and_records_a_snapshot() {
    let scanner = ScriptedScanner::new(vec![Ok(vec![Finding::new(1, 1), Finding::new(3, 0)])]);
    let mut dashboard = Dashboard::new(
        scanner,
        MemorySessionStore::new(),
        sample_catalog(),
        "en-GB",
    );

    let counts = dashboard.refresh().unwrap();

    assert_eq!(counts.high, 1);
    assert_eq!(counts.acceptable, 1);
    assert_eq!(dashboard.counters().scan_count(), 1);
    assert_eq!(dashboard.findings().len(), 2);
}

#[test]
fn refresh_persists_findings_and_counters() {
    let scanner = ScriptedScanner::new(vec![Ok(vec![Finding::new(2, 1)])]);
    let mut dashboard = Dashboard::new(
        scanner,
        MemorySessionStore::new(),
        sample_catalog(),
        "en-GB",
    );
    dashboard.refresh().unwrap();

    let store = dashboard.into_store();

    assert_eq!(session::load_findings(&store), vec![Finding::new(2, 1)]);
    assert_eq!(session::load_counters(&store).latest().medium, 1);
}

#[test]
fn failed_scan_preserves_prior_state() {
    let scanner = ScriptedScanner::new(vec![
        Ok(vec![Finding::new(1, 1)]),
        Err(anyhow!("backend unavailable")),
    ]);
    let mut dashboard = Dashboard::new(
        scanner,
        MemorySessionStore::new(),
        sample_catalog(),
        "en-GB",
    );
    dashboard.refresh().unwrap();

    let err = dashboard.refresh().unwrap_err();

    assert!(matches!(err, ScanError::Failed(_)));
    assert_eq!(dashboard.findings(), [Finding::new(1, 1)]);
    assert_eq!(dashboard.counters().scan_count(), 1);
}

#[test]
fn state_is_restored_from_a_previous_page_view() {
    let mut store = MemorySessionStore::new();
    session::save_findings(&mut store, &[Finding::new(1, 1)]).unwrap();
    let mut counters = riskview::RiskCounters::new();
    counters.record_snapshot(riskview::SeverityCounts {
        high: 1,
        ..riskview::SeverityCounts::default()
    });
    session::save_counters(&mut store, &counters).unwrap();

    let scanner = ScriptedScanner::new(vec![]);
    let dashboard = Dashboard::new(scanner, store, sample_catalog(), "en-GB");

    assert_eq!(dashboard.findings(), [Finding::new(1, 1)]);
    assert_eq!(dashboard.counters().latest().high, 1);
}

#[test]
fn repeated_scans_grow_the_history_and_escalate_status() {
    let scanner = ScriptedScanner::new(vec![
        Ok(vec![Finding::new(1, 1)]),
        Ok(vec![Finding::new(1, 1), Finding::new(5, 1)]),
    ]);
    let mut dashboard = Dashboard::new(
        scanner,
        MemorySessionStore::new(),
        sample_catalog(),
        "en-GB",
    );

    dashboard.refresh().unwrap();
    assert_eq!(dashboard.status(), StatusLabel::Acceptable);

    dashboard.refresh().unwrap();
    assert_eq!(dashboard.counters().scan_count(), 2);
    assert_eq!(dashboard.status(), StatusLabel::Critical);
}

#[test]
fn dashboard_exposes_table_and_suggestion_views() {
    let scanner = ScriptedScanner::new(vec![Ok(vec![
        Finding::new(3, 1),
        Finding::new(1, 1),
        Finding::new(3, 0),
    ])]);
    let mut dashboard = Dashboard::new(
        scanner,
        MemorySessionStore::new(),
        sample_catalog(),
        "en-GB",
    );
    dashboard.refresh().unwrap();

    let issues = dashboard.issue_rows(&LevelFilter::default());
    assert_eq!(issues.len(), 2);

    let acceptable = dashboard.acceptable_rows();
    assert_eq!(acceptable.len(), 1);

    let suggested = dashboard.suggested_issue(None).unwrap();
    assert_eq!(suggested.issue_id, 1);
    assert_eq!(suggested.severity, Severity::High);

    let series = dashboard.trend_series(5, &LevelFilter::default());
    assert_eq!(series[&Severity::High], vec![1]);
}

#[test]
fn locale_switch_changes_projection_only() {
    let scanner = ScriptedScanner::new(vec![Ok(vec![Finding::new(1, 1)])]);
    let mut dashboard = Dashboard::new(
        scanner,
        MemorySessionStore::new(),
        sample_catalog(),
        "en-GB",
    );
    dashboard.refresh().unwrap();
    let english = dashboard.issue_rows(&LevelFilter::default());

    dashboard.set_locale("nl");

    let dutch = dashboard.issue_rows(&LevelFilter::default());
    assert_eq!(english[0].name, "Windows Defender");
    assert_eq!(dutch[0].name, "Windows Verdediger");
    assert_eq!(dashboard.counters().scan_count(), 1);
}
