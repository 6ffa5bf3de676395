//! Selection of the single most severe actionable finding.

use thiserror::Error;

use crate::catalog::MetadataCatalog;
use crate::finding::Finding;
use crate::severity::Severity;

/// The finding surfaced to the user as "suggested issue".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestedIssue {
    /// Issue id of the winning finding.
    pub issue_id: u32,
    /// Result id of the winning finding.
    pub result_id: i32,
    /// Its resolved severity.
    pub severity: Severity,
}

/// Failure to pick a suggested issue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// Every finding was informational, metadata-missing, or outside the
    /// requested category.
    #[error("no eligible issue to suggest")]
    NoEligibleIssue,
}

/// Picks the highest-severity actionable finding, optionally scoped to a
/// category.
///
/// Findings are scanned in their original order. Informational and
/// metadata-missing findings never participate; when `category` is given
/// and non-empty, only findings whose metadata category equals it
/// participate — including the first one that seeds the search. Ties on
/// severity keep the earliest finding.
///
/// # Errors
///
/// Returns [`SelectError::NoEligibleIssue`] when no finding qualifies.
/// Callers must treat this as a reportable condition, not pick a default.
pub fn select_suggested(
    findings: &[Finding],
    catalog: &MetadataCatalog,
    locale: &str,
    category: Option<&str>,
) -> Result<SuggestedIssue, SelectError> {
    let category = category.filter(|c| !c.is_empty());
    let mut best: Option<SuggestedIssue> = None;

    for finding in findings {
        let Some(meta) = catalog.lookup(locale, finding.issue_id, finding.result_id) else {
            continue;
        };
        if !meta.severity.is_actionable() {
            continue;
        }
        if category.is_some_and(|wanted| meta.category != wanted) {
            continue;
        }
        let candidate = SuggestedIssue {
            issue_id: finding.issue_id,
            result_id: finding.result_id,
            severity: meta.severity,
        };
        // Strict comparison: ties keep the earliest finding seen.
        match best {
            Some(current) if candidate.severity <= current.severity => {}
            _ => best = Some(candidate),
        }
    }

    best.ok_or(SelectError::NoEligibleIssue)
}
