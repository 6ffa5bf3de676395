use std::collections::BTreeMap;

use riskview::counters::{RiskCounters, SeverityCounts};
use riskview::output;
use riskview::severity::Severity;
use riskview::table::{LevelFilter, TableRow};
use riskview::test_utils::{sample_catalog, sample_findings};
use riskview::trend;

fn rendered(rows: &[TableRow]) -> String {
    let mut buffer = Vec::new();
    output::print_issue_table(&mut buffer, "Issues", rows).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn issue_table_lists_names_categories_and_risks() {
    let rows = riskview::issue_rows(
        &sample_findings(),
        &sample_catalog(),
        "en-GB",
        &LevelFilter::default(),
    );

    let text = rendered(&rows);

    assert!(text.contains("Windows Defender"));
    assert!(text.contains("Security"));
    assert!(text.contains("High"));
}

#[test]
fn empty_tables_print_nothing() {
    assert!(rendered(&[]).is_empty());

    let mut buffer = Vec::new();
    output::print_acceptable_table(&mut buffer, "Acceptable findings", &[]).unwrap();
    assert!(buffer.is_empty());
}

#[test]
fn failed_checks_are_marked_in_the_table() {
    let rows = vec![TableRow {
        issue_id: 5,
        result_id: -1,
        name: "Open network ports".to_owned(),
        category: "Security".to_owned(),
        severity: Severity::Medium,
        failed: true,
    }];

    let text = rendered(&rows);

    assert!(text.contains("check failed"));
}

#[test]
fn status_summary_shows_label_and_counts() {
    let mut counters = RiskCounters::new();
    counters.record_snapshot(SeverityCounts {
        high: 2,
        ..SeverityCounts::default()
    });

    let mut buffer = Vec::new();
    output::print_status(&mut buffer, &counters).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert!(text.contains("Status"));
    assert!(text.contains("Critical"));
    assert!(text.contains("scans recorded: 1"));
}

#[test]
fn trend_section_prints_one_line_per_visible_level() {
    let mut counters = RiskCounters::new();
    counters.record_snapshot(SeverityCounts {
        high: 1,
        ..SeverityCounts::default()
    });
    counters.record_snapshot(SeverityCounts {
        high: 3,
        ..SeverityCounts::default()
    });
    let series = trend::series(&counters, 2, &LevelFilter::default());

    let mut buffer = Vec::new();
    output::print_trend(&mut buffer, &series).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert!(text.contains("Risk trend"));
    assert!(text.contains("1 3"));
}

#[test]
fn empty_trend_prints_nothing() {
    let mut buffer = Vec::new();
    output::print_trend(&mut buffer, &BTreeMap::new()).unwrap();
    assert!(buffer.is_empty());
}
