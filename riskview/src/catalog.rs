//! Localized issue metadata and its lookup table.
//!
//! The catalog is a map-of-maps: locale tag to issue table, issue id to
//! entry, result id to variant. A single [`MetadataCatalog::lookup`] call
//! replaces per-locale branching, so adding a locale never touches code,
//! only data.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// Filename prefix for per-locale catalog files (`issues.<locale>.json`).
const CATALOG_PREFIX: &str = "issues.";
/// Filename suffix for per-locale catalog files.
const CATALOG_SUFFIX: &str = ".json";

/// One variant of an issue (a specific scan outcome).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Short localized heading for this outcome.
    #[serde(default)]
    pub summary: String,
    /// Severity the scanner's verdict maps to for this outcome.
    pub severity: Severity,
    /// Ordered remediation steps shown in the solution guide.
    #[serde(default)]
    pub solution: Vec<String>,
}

/// Localized metadata for one issue, covering all of its result variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueEntry {
    /// Localized issue name.
    pub name: String,
    /// Coarse grouping, e.g. "Security" or "Privacy".
    pub category: String,
    /// Localized descriptive text.
    #[serde(default)]
    pub information: String,
    /// Per-result variants, keyed by result id. A negative key documents
    /// the check-failed outcome.
    #[serde(default)]
    pub results: FxHashMap<i32, ResultEntry>,
}

/// Display-ready view of one `(issue_id, result_id)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueMetadata<'a> {
    /// Localized issue name.
    pub name: &'a str,
    /// Issue category.
    pub category: &'a str,
    /// Localized descriptive text for the issue.
    pub information: &'a str,
    /// Short localized heading for the matched result.
    pub summary: &'a str,
    /// Resolved severity of the matched result.
    pub severity: Severity,
    /// Remediation steps for the matched result.
    pub solution: &'a [String],
}

/// Immutable per-locale issue metadata lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataCatalog {
    locales: FxHashMap<String, FxHashMap<u32, IssueEntry>>,
}

impl MetadataCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the issue table for one locale.
    pub fn insert_locale(
        &mut self,
        locale: impl Into<String>,
        entries: FxHashMap<u32, IssueEntry>,
    ) {
        self.locales.insert(locale.into(), entries);
    }

    /// Returns `true` when the locale has a table in this catalog.
    #[must_use]
    pub fn has_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Resolves metadata for `(issue_id, result_id)` in the given locale.
    ///
    /// Returns `None` when the locale, issue or result is unknown. Gaps are
    /// expected (localization lag) and the caller treats them as non-fatal.
    #[must_use]
    pub fn lookup(&self, locale: &str, issue_id: u32, result_id: i32) -> Option<IssueMetadata<'_>> {
        let issue = self.locales.get(locale)?.get(&issue_id)?;
        let result = issue.results.get(&result_id)?;
        Some(IssueMetadata {
            name: &issue.name,
            category: &issue.category,
            information: &issue.information,
            summary: &result.summary,
            severity: result.severity,
            solution: &result.solution,
        })
    }

    /// Loads every `issues.<locale>.json` file found in `dir`.
    ///
    /// Files that fail to read or parse are skipped with a warning; a
    /// missing or unreadable directory is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory itself cannot be read.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut catalog = Self::new();
        let entries = fs::read_dir(dir)
            .with_context(|| format!("reading catalog directory {}", dir.display()))?;

        for entry in entries.flatten() {
            let path = entry.path();
            let Some(locale) = locale_from_filename(&path) else {
                continue;
            };
            match load_locale_file(&path) {
                Ok(table) => catalog.insert_locale(locale, table),
                Err(err) => {
                    log::warn!("skipping catalog file {}: {err:#}", path.display());
                }
            }
        }
        Ok(catalog)
    }
}

fn locale_from_filename(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_prefix(CATALOG_PREFIX)?.strip_suffix(CATALOG_SUFFIX)?;
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_owned())
    }
}

fn load_locale_file(path: &Path) -> Result<FxHashMap<u32, IssueEntry>> {
    let content = fs::read_to_string(path).context("reading file")?;
    serde_json::from_str(&content).context("parsing issue metadata")
}
