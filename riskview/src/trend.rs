//! Time-indexed series for the risk trend graph.

use std::collections::BTreeMap;

use crate::counters::RiskCounters;
use crate::severity::Severity;
use crate::table::LevelFilter;

/// Returns the last `window_size` history snapshots as one count series
/// per visible level, in chronological order.
///
/// `window_size` is clamped to `[1, history.len()]`; a history shorter
/// than the window yields shorter series, never padding. An empty history
/// yields empty series. Visibility toggles only change which keys are
/// present, never the underlying history.
#[must_use]
pub fn series(
    counters: &RiskCounters,
    window_size: usize,
    visible: &LevelFilter,
) -> BTreeMap<Severity, Vec<u32>> {
    let history = counters.history();
    let window = if history.is_empty() {
        0
    } else {
        window_size.clamp(1, history.len())
    };
    let start = history.len() - window;

    Severity::ALL
        .into_iter()
        .filter(|level| visible.allows(*level))
        .map(|level| {
            let counts = history[start..].iter().map(|snapshot| snapshot.get(level));
            (level, counts.collect())
        })
        .collect()
}

/// Largest useful window for the graph's interval input: one slot per
/// recorded scan.
#[must_use]
pub fn max_window(counters: &RiskCounters) -> usize {
    counters.scan_count()
}
