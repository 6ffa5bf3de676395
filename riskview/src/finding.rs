use serde::{Deserialize, Serialize};

/// One raw result entry produced by a security scan.
///
/// Findings are created in bulk by the scanner, held read-only for the
/// duration of a session and replaced wholesale by the next scan. Severity
/// is not stored here; it is resolved through the metadata catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier into the localized issue-metadata catalog.
    pub issue_id: u32,
    /// Index selecting a specific variant of the issue. Negative values are
    /// the "check failed to run" sentinel.
    pub result_id: i32,
    /// Free-form evidence lines reported by the scanner.
    #[serde(default)]
    pub details: Vec<String>,
}

impl Finding {
    /// Sentinel `result_id` reported when a check could not run.
    pub const CHECK_FAILED: i32 = -1;

    /// Creates a finding without evidence lines.
    #[must_use]
    pub const fn new(issue_id: u32, result_id: i32) -> Self {
        Self {
            issue_id,
            result_id,
            details: Vec::new(),
        }
    }

    /// Returns `true` when the underlying check failed to run.
    #[must_use]
    pub const fn check_failed(&self) -> bool {
        self.result_id < 0
    }
}

#[cfg(test)]
mod tests {
    use super::Finding;

    #[test]
    fn negative_result_id_means_check_failed() {
        assert!(Finding::new(5, Finding::CHECK_FAILED).check_failed());
        assert!(Finding::new(5, -3).check_failed());
        assert!(!Finding::new(5, 0).check_failed());
    }
}
