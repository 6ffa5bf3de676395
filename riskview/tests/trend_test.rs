use riskview::counters::{RiskCounters, SeverityCounts};
use riskview::severity::Severity;
use riskview::table::LevelFilter;
use riskview::trend::{max_window, series};

fn counters_with_highs(values: &[u32]) -> RiskCounters {
    let mut counters = RiskCounters::new();
    for value in values {
        counters.record_snapshot(SeverityCounts {
            high: *value,
            ..SeverityCounts::default()
        });
    }
    counters
}

#[test]
fn window_larger_than_history_returns_what_exists() {
    let counters = counters_with_highs(&[1, 2]);

    let series = series(&counters, 3, &LevelFilter::default());

    for counts in series.values() {
        assert_eq!(counts.len(), 2);
    }
}

#[test]
fn series_are_chronological() {
    let counters = counters_with_highs(&[1, 2, 3]);

    let series = series(&counters, 3, &LevelFilter::default());

    assert_eq!(series[&Severity::High], vec![1, 2, 3]);
}

#[test]
fn window_selects_the_most_recent_snapshots() {
    let counters = counters_with_highs(&[1, 2, 3, 4]);

    let series = series(&counters, 2, &LevelFilter::default());

    assert_eq!(series[&Severity::High], vec![3, 4]);
}

#[test]
fn window_is_clamped_to_at_least_one() {
    let counters = counters_with_highs(&[5, 6]);

    let series = series(&counters, 0, &LevelFilter::default());

    assert_eq!(series[&Severity::High], vec![6]);
}

#[test]
fn empty_history_yields_empty_series() {
    let counters = RiskCounters::new();

    let series = series(&counters, 4, &LevelFilter::default());

    assert_eq!(series.len(), 5);
    assert!(series.values().all(Vec::is_empty));
}

#[test]
fn visibility_toggles_only_change_which_series_appear() {
    let counters = counters_with_highs(&[1, 2]);
    let mut visible = LevelFilter::default();
    visible.toggle(Severity::Acceptable);
    visible.toggle(Severity::Informational);

    let series = series(&counters, 2, &visible);

    assert_eq!(series.len(), 3);
    assert!(!series.contains_key(&Severity::Acceptable));
    assert!(!series.contains_key(&Severity::Informational));
    assert_eq!(series[&Severity::High], vec![1, 2]);
}

#[test]
fn max_window_tracks_the_scan_count() {
    assert_eq!(max_window(&RiskCounters::new()), 0);
    assert_eq!(max_window(&counters_with_highs(&[1, 2, 3])), 3);
}
