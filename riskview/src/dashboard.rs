//! Orchestration of the scan lifecycle over the injected ports.
//!
//! The source UI kept findings and counters in ambient session storage;
//! here the same state lives in one explicit context object so that every
//! consumer goes through it and tests can drive it with fakes.

use std::collections::BTreeMap;

use anyhow::Result;
use thiserror::Error;

use crate::catalog::MetadataCatalog;
use crate::counters::{aggregate, RiskCounters, SeverityCounts, StatusLabel};
use crate::finding::Finding;
use crate::session::{self, SessionStore};
use crate::severity::Severity;
use crate::suggest::{select_suggested, SelectError, SuggestedIssue};
use crate::table::{self, LevelFilter, TableRow};
use crate::trend;

/// Port to the native scanning backend.
///
/// The call is opaque request/response from the core's point of view: no
/// streaming, no partial results.
pub trait Scanner {
    /// Runs one full scan and returns the raw findings.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend fails; the caller keeps its prior
    /// state in that case.
    fn run_scan(&mut self) -> Result<Vec<Finding>>;
}

/// Failure of a [`Dashboard::refresh`] request.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A scan is already in flight; at most one runs at a time.
    #[error("a scan is already in progress")]
    ScanInProgress,
    /// The scanning backend failed. Prior findings and counters are kept.
    #[error("scan failed: {0}")]
    Failed(anyhow::Error),
}

/// Reporting context: the scan ports plus the state every page reads.
pub struct Dashboard<S: Scanner, P: SessionStore> {
    scanner: S,
    store: P,
    catalog: MetadataCatalog,
    locale: String,
    findings: Vec<Finding>,
    counters: RiskCounters,
    scan_in_flight: bool,
}

impl<S: Scanner, P: SessionStore> Dashboard<S, P> {
    /// Creates a dashboard, restoring findings and counters persisted in
    /// the session store by a previous page view.
    pub fn new(scanner: S, store: P, catalog: MetadataCatalog, locale: impl Into<String>) -> Self {
        let findings = session::load_findings(&store);
        let counters = session::load_counters(&store);
        Self {
            scanner,
            store,
            catalog,
            locale: locale.into(),
            findings,
            counters,
            scan_in_flight: false,
        }
    }

    /// Runs one scan and folds the result into counters and history.
    ///
    /// On success the finding set is replaced wholesale, a snapshot is
    /// recorded and both are persisted. On scanner failure the error is
    /// logged and prior state is left untouched; nothing is retried
    /// automatically.
    ///
    /// # Errors
    ///
    /// [`ScanError::ScanInProgress`] when a scan is already running,
    /// [`ScanError::Failed`] when the backend errors.
    pub fn refresh(&mut self) -> Result<SeverityCounts, ScanError> {
        if self.scan_in_flight {
            return Err(ScanError::ScanInProgress);
        }
        self.scan_in_flight = true;
        let outcome = self.scanner.run_scan();
        self.scan_in_flight = false;

        let findings = outcome.map_err(|err| {
            log::error!("scan failed, keeping previous results: {err:#}");
            ScanError::Failed(err)
        })?;

        self.findings = findings;
        let counts = aggregate(&self.findings, &self.catalog, &self.locale);
        self.counters.record_snapshot(counts);

        if let Err(err) = session::save_findings(&mut self.store, &self.findings) {
            log::warn!("failed to persist scan result: {err}");
        }
        if let Err(err) = session::save_counters(&mut self.store, &self.counters) {
            log::warn!("failed to persist risk counters: {err}");
        }
        Ok(counts)
    }

    /// The finding set of the last completed scan.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Counters with the full scan history.
    #[must_use]
    pub fn counters(&self) -> &RiskCounters {
        &self.counters
    }

    /// Status label for the dashboard header.
    #[must_use]
    pub fn status(&self) -> StatusLabel {
        self.counters.status_label()
    }

    /// Highest-severity actionable finding, optionally scoped to a
    /// category.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::NoEligibleIssue`] when nothing qualifies.
    pub fn suggested_issue(&self, category: Option<&str>) -> Result<SuggestedIssue, SelectError> {
        select_suggested(&self.findings, &self.catalog, &self.locale, category)
    }

    /// Rows for the issues table, honoring the filter.
    #[must_use]
    pub fn issue_rows(&self, filter: &LevelFilter) -> Vec<TableRow> {
        table::issue_rows(&self.findings, &self.catalog, &self.locale, filter)
    }

    /// Rows for the acceptable-findings table.
    #[must_use]
    pub fn acceptable_rows(&self) -> Vec<TableRow> {
        table::acceptable_rows(&self.findings, &self.catalog, &self.locale)
    }

    /// Trend series over the last `window_size` scans.
    #[must_use]
    pub fn trend_series(
        &self,
        window_size: usize,
        visible: &LevelFilter,
    ) -> BTreeMap<Severity, Vec<u32>> {
        trend::series(&self.counters, window_size, visible)
    }

    /// Active locale used for metadata resolution.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Switches the locale used for metadata resolution. Counters and
    /// findings are untouched; only projected names and labels change.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Gives the session store back to the host, e.g. on page teardown.
    pub fn into_store(self) -> P {
        self.store
    }
}
