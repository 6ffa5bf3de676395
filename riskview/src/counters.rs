//! Aggregation of findings into per-level counts and scan history.

use serde::{Deserialize, Serialize};

use crate::catalog::MetadataCatalog;
use crate::finding::Finding;
use crate::severity::Severity;

/// Counts per severity level for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    /// Findings resolved as acceptable.
    pub acceptable: u32,
    /// Low-risk findings.
    pub low: u32,
    /// Medium-risk findings.
    pub medium: u32,
    /// High-risk findings.
    pub high: u32,
    /// Informational findings.
    pub informational: u32,
}

impl SeverityCounts {
    /// Returns the count for one level.
    #[must_use]
    pub const fn get(&self, level: Severity) -> u32 {
        match level {
            Severity::Acceptable => self.acceptable,
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Informational => self.informational,
        }
    }

    /// Sum over all levels.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.acceptable + self.low + self.medium + self.high + self.informational
    }

    fn bump(&mut self, level: Severity) {
        match level {
            Severity::Acceptable => self.acceptable += 1,
            Severity::Low => self.low += 1,
            Severity::Medium => self.medium += 1,
            Severity::High => self.high += 1,
            Severity::Informational => self.informational += 1,
        }
    }
}

/// Aggregates a finding set into per-level counts.
///
/// Each finding's severity is resolved through the catalog; findings with
/// missing metadata are skipped silently. A check-failed finding still
/// counts at whatever severity its metadata assigns to the failed outcome.
#[must_use]
pub fn aggregate(findings: &[Finding], catalog: &MetadataCatalog, locale: &str) -> SeverityCounts {
    let mut counts = SeverityCounts::default();
    for finding in findings {
        match catalog.lookup(locale, finding.issue_id, finding.result_id) {
            Some(meta) => counts.bump(meta.severity),
            None => {
                log::debug!(
                    "no metadata for issue {} result {} in locale {locale}",
                    finding.issue_id,
                    finding.result_id
                );
            }
        }
    }
    counts
}

/// Coarse status shown in the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusLabel {
    /// More than one high-risk finding.
    Critical,
    /// More than one medium-risk finding.
    MediumConcern,
    /// More than one low-risk finding.
    LowConcern,
    /// More than one informational finding.
    InfoConcern,
    /// Everything else.
    Acceptable,
}

impl StatusLabel {
    /// Returns the canonical (fallback) display form for this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StatusLabel::Critical => "Critical",
            StatusLabel::MediumConcern => "Medium concern",
            StatusLabel::LowConcern => "Low concern",
            StatusLabel::InfoConcern => "Informative",
            StatusLabel::Acceptable => "Acceptable",
        }
    }

    /// Key the UI layer feeds to the localizer for this status.
    #[must_use]
    pub const fn localization_key(self) -> &'static str {
        match self {
            StatusLabel::Critical => "Dashboard.Critical",
            StatusLabel::MediumConcern => "Dashboard.MediumConcern",
            StatusLabel::LowConcern => "Dashboard.LowConcern",
            StatusLabel::InfoConcern => "Dashboard.InfoConcern",
            StatusLabel::Acceptable => "Dashboard.NoConcern",
        }
    }
}

/// Per-level counts for the current finding set plus the append-only
/// history of past scans, one snapshot per scan, latest last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskCounters {
    history: Vec<SeverityCounts>,
}

impl RiskCounters {
    /// Creates counters with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one scan's counts to the history.
    ///
    /// There is no deduplication: callers invoke this exactly once per
    /// completed scan.
    pub fn record_snapshot(&mut self, counts: SeverityCounts) {
        self.history.push(counts);
    }

    /// Number of scans recorded so far.
    #[must_use]
    pub fn scan_count(&self) -> usize {
        self.history.len()
    }

    /// All recorded snapshots in chronological order.
    #[must_use]
    pub fn history(&self) -> &[SeverityCounts] {
        &self.history
    }

    /// The most recent snapshot, or all-zero counts before the first scan.
    #[must_use]
    pub fn latest(&self) -> SeverityCounts {
        self.history.last().copied().unwrap_or_default()
    }

    /// Status label for the latest snapshot, first matching rule wins.
    ///
    /// The threshold is strictly "more than one": a single finding at any
    /// level never escalates the status. This keeps isolated findings from
    /// raising alarm and is intentional, not an off-by-one.
    #[must_use]
    pub fn status_label(&self) -> StatusLabel {
        let latest = self.latest();
        if latest.high > 1 {
            StatusLabel::Critical
        } else if latest.medium > 1 {
            StatusLabel::MediumConcern
        } else if latest.low > 1 {
            StatusLabel::LowConcern
        } else if latest.informational > 1 {
            StatusLabel::InfoConcern
        } else {
            StatusLabel::Acceptable
        }
    }
}
