//! Storage layer for SpendWise
//!
//! A swappable key-value store (atomic JSON file or memory) with a typed
//! repository on top that knows the three tracker keys.

pub mod file_io;
pub mod kv;
pub mod repository;

pub use file_io::{read_json, write_json_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use repository::{
    BudgetRepository, LoadReport, SavedState, BUDGET_KEY, EXPENSES_KEY, PERIOD_KEY,
};

use crate::config::{Settings, StorageBackend, TrackerPaths};
use crate::error::TrackerError;

/// Open the store selected by the settings
///
/// When the file store cannot be opened (unwritable directory, corrupt
/// store file) the session falls back to memory and the error is handed
/// back alongside so the caller can report it.
pub fn open_store(
    paths: &TrackerPaths,
    settings: &Settings,
    force_memory: bool,
) -> (Box<dyn KeyValueStore>, Option<TrackerError>) {
    if force_memory || settings.storage_backend == StorageBackend::Memory {
        return (Box::new(MemoryStore::new()), None);
    }

    let opened = paths
        .ensure_directories()
        .and_then(|_| FileStore::open(paths.store_file()));

    match opened {
        Ok(store) => (Box::new(store), None),
        Err(e) => {
            tracing::warn!(error = %e, "durable storage unavailable, using memory store");
            (Box::new(MemoryStore::new()), Some(e))
        }
    }
}
