//! Session-scoped persistence behind an injected key-value port.
//!
//! The host runtime owns the actual store (cleared at application
//! restart); the core only ever sees the [`SessionStore`] trait, so every
//! component stays testable without a storage stub from the host.

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::counters::RiskCounters;
use crate::finding::Finding;
use crate::table::{LevelFilter, SortState};

/// Stable keys under which session state is persisted.
pub mod keys {
    /// Serialized [`crate::RiskCounters`].
    pub const RISK_COUNTERS: &str = "RiskCounters";
    /// Serialized finding set of the last completed scan.
    pub const SCAN_RESULT: &str = "ScanResult";
    /// Serialized [`crate::LevelFilter`] for the issue table.
    pub const TABLE_FILTER: &str = "TableFilter";
    /// Serialized [`crate::SortState`] for the issue table.
    pub const TABLE_SORT: &str = "TableSort";
}

/// Key-value store with session lifetime, provided by the host.
pub trait SessionStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);
}

/// In-memory [`SessionStore`] used by tests and the terminal binary.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    values: FxHashMap<String, String>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }
}

/// Restores a value from the store, falling back to the default.
///
/// Malformed persisted JSON is treated exactly like an absent key: the
/// default is returned and a warning logged. Parse errors never reach the
/// UI.
#[must_use]
pub fn load_json<T: DeserializeOwned + Default>(store: &impl SessionStore, key: &str) -> T {
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("discarding malformed session state under {key}: {err}");
            T::default()
        }
    }
}

/// Serializes a value into the store.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized to JSON.
pub fn save_json<T: Serialize>(
    store: &mut impl SessionStore,
    key: &str,
    value: &T,
) -> serde_json::Result<()> {
    store.set(key, serde_json::to_string(value)?);
    Ok(())
}

/// Restores the risk counters, empty history when absent or malformed.
#[must_use]
pub fn load_counters(store: &impl SessionStore) -> RiskCounters {
    load_json(store, keys::RISK_COUNTERS)
}

/// Persists the risk counters.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn save_counters(
    store: &mut impl SessionStore,
    counters: &RiskCounters,
) -> serde_json::Result<()> {
    save_json(store, keys::RISK_COUNTERS, counters)
}

/// Restores the last scan's finding set, empty when absent or malformed.
#[must_use]
pub fn load_findings(store: &impl SessionStore) -> Vec<Finding> {
    load_json(store, keys::SCAN_RESULT)
}

/// Persists the finding set of a completed scan.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn save_findings(
    store: &mut impl SessionStore,
    findings: &[Finding],
) -> serde_json::Result<()> {
    save_json(store, keys::SCAN_RESULT, &findings)
}

/// Restores the table filter, all levels visible when absent or malformed.
#[must_use]
pub fn load_filter(store: &impl SessionStore) -> LevelFilter {
    load_json(store, keys::TABLE_FILTER)
}

/// Persists the table filter.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn save_filter(store: &mut impl SessionStore, filter: &LevelFilter) -> serde_json::Result<()> {
    save_json(store, keys::TABLE_FILTER, filter)
}

/// Restores the table sort state, severity-descending when absent or
/// malformed.
#[must_use]
pub fn load_sort(store: &impl SessionStore) -> SortState {
    load_json(store, keys::TABLE_SORT)
}

/// Persists the table sort state.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn save_sort(store: &mut impl SessionStore, sort: &SortState) -> serde_json::Result<()> {
    save_json(store, keys::TABLE_SORT, sort)
}
