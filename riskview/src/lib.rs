//! Reporting core for a desktop security-scanning application.
//!
//! `riskview` turns the flat finding list produced by a native scanning
//! backend into everything the reporting UI shows: per-severity risk
//! counters with a scan-by-scan history, a coarse status label, sortable
//! and filterable issue-table rows joined against localized metadata, the
//! single "suggested issue" worth fixing first, and time-indexed series
//! for the risk trend graph.
//!
//! The core is a set of pure transformations over in-memory values. The
//! scanner, the metadata catalog source and the session store are injected
//! ports; rendering and charting stay with the host UI.

pub mod catalog;
pub mod config;
pub mod counters;
pub mod dashboard;
pub mod finding;
pub mod output;
pub mod session;
pub mod severity;
pub mod suggest;
pub mod table;
pub mod test_utils;
pub mod trend;

pub use catalog::{IssueEntry, IssueMetadata, MetadataCatalog, ResultEntry};
pub use config::Config;
pub use counters::{aggregate, RiskCounters, SeverityCounts, StatusLabel};
pub use dashboard::{Dashboard, ScanError, Scanner};
pub use finding::Finding;
pub use session::{MemorySessionStore, SessionStore};
pub use severity::Severity;
pub use suggest::{select_suggested, SelectError, SuggestedIssue};
pub use table::{
    acceptable_rows, build_rows, issue_rows, sort_rows, LevelFilter, SortColumn, SortDirection,
    SortState, TableRow,
};
pub use trend::{max_window, series};
