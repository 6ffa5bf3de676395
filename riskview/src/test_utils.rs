//! Fixtures shared by the integration tests.

use rustc_hash::FxHashMap;

use crate::catalog::{IssueEntry, MetadataCatalog, ResultEntry};
use crate::finding::Finding;
use crate::severity::Severity;

/// Builds an issue entry from `(result_id, severity)` pairs.
#[must_use]
pub fn issue_entry(name: &str, category: &str, results: &[(i32, Severity)]) -> IssueEntry {
    let results = results
        .iter()
        .map(|(result_id, severity)| {
            (
                *result_id,
                ResultEntry {
                    summary: format!("{name} result {result_id}"),
                    severity: *severity,
                    solution: vec!["Open settings".to_owned(), "Apply the fix".to_owned()],
                },
            )
        })
        .collect();
    IssueEntry {
        name: name.to_owned(),
        category: category.to_owned(),
        information: format!("About {name}"),
        results,
    }
}

/// Catalog with an `en-GB` table and a partial `nl` one.
///
/// Issue 5 documents its check-failed outcome; issue 4 only ever yields
/// informational results; issue 9 exists in no locale (metadata gap).
#[must_use]
pub fn sample_catalog() -> MetadataCatalog {
    let mut en: FxHashMap<u32, IssueEntry> = FxHashMap::default();
    en.insert(
        1,
        issue_entry(
            "Windows Defender",
            "Security",
            &[(0, Severity::Acceptable), (1, Severity::High)],
        ),
    );
    en.insert(
        2,
        issue_entry(
            "Automatic updates",
            "Security",
            &[(0, Severity::Acceptable), (1, Severity::Medium)],
        ),
    );
    en.insert(
        3,
        issue_entry(
            "Tracking cookies",
            "Privacy",
            &[
                (0, Severity::Acceptable),
                (1, Severity::Low),
                (2, Severity::Medium),
            ],
        ),
    );
    en.insert(
        4,
        issue_entry("Installed browsers", "Privacy", &[(1, Severity::Informational)]),
    );
    en.insert(
        5,
        issue_entry(
            "Open network ports",
            "Security",
            &[
                (1, Severity::High),
                (Finding::CHECK_FAILED, Severity::Medium),
            ],
        ),
    );

    let mut nl: FxHashMap<u32, IssueEntry> = FxHashMap::default();
    nl.insert(
        1,
        issue_entry(
            "Windows Verdediger",
            "Beveiliging",
            &[(0, Severity::Acceptable), (1, Severity::High)],
        ),
    );

    let mut catalog = MetadataCatalog::new();
    catalog.insert_locale("en-GB", en);
    catalog.insert_locale("nl", nl);
    catalog
}

/// A typical scan: one high, one medium, one acceptable, one
/// informational finding and one metadata gap.
#[must_use]
pub fn sample_findings() -> Vec<Finding> {
    vec![
        Finding::new(1, 1),
        Finding::new(2, 1),
        Finding::new(3, 0),
        Finding::new(4, 1),
        Finding::new(9, 1),
    ]
}
