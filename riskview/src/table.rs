//! Projection of findings into filterable, sortable issue-table rows.

use serde::{Deserialize, Serialize};

use crate::catalog::MetadataCatalog;
use crate::finding::Finding;
use crate::severity::Severity;

/// One display-ready table row: a finding joined with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Issue id, kept so the UI can link the row to its detail page.
    pub issue_id: u32,
    /// Result id of the matched variant.
    pub result_id: i32,
    /// Localized issue name.
    pub name: String,
    /// Issue category, e.g. "Security" or "Privacy".
    pub category: String,
    /// Resolved severity.
    pub severity: Severity,
    /// `true` when the underlying check failed to run.
    pub failed: bool,
}

/// Per-level visibility toggles, default all visible.
///
/// Shared between the issue table and the trend graph: both expose one
/// checkbox per severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelFilter {
    /// Show acceptable rows/series.
    pub acceptable: bool,
    /// Show low-risk rows/series.
    pub low: bool,
    /// Show medium-risk rows/series.
    pub medium: bool,
    /// Show high-risk rows/series.
    pub high: bool,
    /// Show informational rows/series.
    pub informational: bool,
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self {
            acceptable: true,
            low: true,
            medium: true,
            high: true,
            informational: true,
        }
    }
}

impl LevelFilter {
    /// Returns `true` when the level is visible.
    #[must_use]
    pub const fn allows(&self, level: Severity) -> bool {
        match level {
            Severity::Acceptable => self.acceptable,
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Informational => self.informational,
        }
    }

    /// Flips visibility of one level.
    pub fn toggle(&mut self, level: Severity) {
        match level {
            Severity::Acceptable => self.acceptable = !self.acceptable,
            Severity::Low => self.low = !self.low,
            Severity::Medium => self.medium = !self.medium,
            Severity::High => self.high = !self.high,
            Severity::Informational => self.informational = !self.informational,
        }
    }
}

/// Column a table can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortColumn {
    /// Localized issue name, case-insensitive.
    Name,
    /// Issue category, case-insensitive.
    Category,
    /// Severity by numeric rank, never by label text.
    Severity,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Least first.
    Ascending,
    /// Greatest first.
    Descending,
}

impl SortDirection {
    /// The opposite direction. Clicking a column header repeatedly toggles
    /// through this.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Current ordering of the visible rows, owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Column the table is ordered by.
    pub column: SortColumn,
    /// Current direction for that column.
    pub direction: SortDirection,
}

impl Default for SortState {
    /// Descending by severity: worst issues on top.
    fn default() -> Self {
        Self {
            column: SortColumn::Severity,
            direction: SortDirection::Descending,
        }
    }
}

fn project(finding: &Finding, catalog: &MetadataCatalog, locale: &str) -> Option<TableRow> {
    let meta = catalog.lookup(locale, finding.issue_id, finding.result_id)?;
    Some(TableRow {
        issue_id: finding.issue_id,
        result_id: finding.result_id,
        name: meta.name.to_owned(),
        category: meta.category.to_owned(),
        severity: meta.severity,
        failed: finding.check_failed(),
    })
}

/// Joins findings against metadata and keeps rows the filter allows.
///
/// Findings with missing metadata are dropped silently.
#[must_use]
pub fn build_rows(
    findings: &[Finding],
    catalog: &MetadataCatalog,
    locale: &str,
    filter: &LevelFilter,
) -> Vec<TableRow> {
    findings
        .iter()
        .filter_map(|finding| project(finding, catalog, locale))
        .filter(|row| filter.allows(row.severity))
        .collect()
}

/// Rows for the issues table: everything above `Acceptable`.
#[must_use]
pub fn issue_rows(
    findings: &[Finding],
    catalog: &MetadataCatalog,
    locale: &str,
    filter: &LevelFilter,
) -> Vec<TableRow> {
    let mut rows = build_rows(findings, catalog, locale, filter);
    rows.retain(|row| row.severity != Severity::Acceptable);
    rows
}

/// Rows for the acceptable-findings table: exactly `Acceptable`.
#[must_use]
pub fn acceptable_rows(
    findings: &[Finding],
    catalog: &MetadataCatalog,
    locale: &str,
) -> Vec<TableRow> {
    findings
        .iter()
        .filter_map(|finding| project(finding, catalog, locale))
        .filter(|row| row.severity == Severity::Acceptable)
        .collect()
}

/// Stable in-place sort of rows by one column.
///
/// Name and category compare case-insensitively. The severity column
/// compares [`Severity::risk_rank`] so the order is identical in every
/// locale; rows that compare equal keep their relative order.
pub fn sort_rows(rows: &mut [TableRow], column: SortColumn, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = match column {
            SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortColumn::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            SortColumn::Severity => a.severity.risk_rank().cmp(&b.severity.risk_rank()),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
