//! Persistent key-value collaborator for the filter configuration.
//!
//! The engine addresses the store through a fixed namespaced key and a JSON
//! payload. All store traffic is best-effort: a missing or unreadable value
//! degrades to defaults and a failed write is logged and dropped, never
//! surfaced as an error.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::state::StoredFilters;

/// Namespaced key under which the filter configuration is persisted.
pub const FILTERS_KEY: &str = "conpreview:filters";

/// Minimal key-value store contract the engine persists through.
pub trait FilterStore {
    /// Fetch the raw string stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// What: Load and decode the persisted filter payload.
///
/// Inputs:
/// - `store`: Key-value collaborator
///
/// Output:
/// - The stored configuration, or `None` when nothing is stored or the
///   payload does not parse (logged and discarded).
#[must_use]
pub fn load_stored_filters<S: FilterStore + ?Sized>(store: &S) -> Option<StoredFilters> {
    let raw = store.get(FILTERS_KEY)?;
    match serde_json::from_str::<StoredFilters>(&raw) {
        Ok(stored) => Some(stored),
        Err(e) => {
            tracing::warn!(error = %e, "discarding unparsable stored filter configuration");
            None
        }
    }
}

/// What: Encode and persist the filter payload.
///
/// Inputs:
/// - `store`: Key-value collaborator
/// - `stored`: Configuration to persist
///
/// Output:
/// - Writes the JSON payload under [`FILTERS_KEY`]; failures are logged and
///   dropped.
pub fn save_stored_filters<S: FilterStore + ?Sized>(store: &mut S, stored: &StoredFilters) {
    match serde_json::to_string(stored) {
        Ok(s) => {
            tracing::debug!(bytes = s.len(), "persisting filter configuration");
            store.set(FILTERS_KEY, &s);
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to serialize filter configuration");
        }
    }
}

/// In-memory store for tests and hosts without durable storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    /// Stored entries.
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FilterStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// File-backed store keeping every key in one JSON object on disk.
///
/// Reads and writes are best-effort: IO or decode trouble leaves the view
/// unchanged and is logged, never propagated.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    /// Path of the backing JSON file.
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by `path`; the file appears on first write.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Decode the backing file, falling back to an empty map when the file
    /// is absent or unreadable.
    fn read_entries(&self) -> HashMap<String, String> {
        if let Ok(s) = fs::read_to_string(&self.path)
            && let Ok(entries) = serde_json::from_str::<HashMap<String, String>>(&s)
        {
            return entries;
        }
        HashMap::new()
    }
}

impl FilterStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().remove(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value.to_string());
        if let Ok(s) = serde_json::to_string(&entries) {
            if let Some(parent) = self.path.parent()
                && !parent.as_os_str().is_empty()
                && let Err(e) = fs::create_dir_all(parent)
            {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to create store directory"
                );
                return;
            }
            if let Err(e) = fs::write(&self.path, s) {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to write store file"
                );
            }
        }
    }
}
