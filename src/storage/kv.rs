//! String key-value stores
//!
//! The tracker persists through a tiny `get`/`set`/`delete` contract so the
//! backing store can be swapped: a JSON file on disk, or plain memory when
//! durable storage is unavailable. Writes that touch several keys go through
//! `apply`, which lands all of them or none.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::TrackerResult;

use super::file_io::{read_json, write_json_atomic};

/// Durable string-keyed, string-valued storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()>;

    /// Remove a key; removing an absent key is not an error
    fn delete(&mut self, key: &str) -> TrackerResult<()>;

    /// Set (`Some`) or delete (`None`) several keys as one write
    ///
    /// On error none of the changes are visible.
    fn apply(&mut self, changes: &[(&str, Option<&str>)]) -> TrackerResult<()>;

    /// Whether data written here survives a restart
    fn is_durable(&self) -> bool;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) -> TrackerResult<()> {
        (**self).delete(key)
    }

    fn apply(&mut self, changes: &[(&str, Option<&str>)]) -> TrackerResult<()> {
        (**self).apply(changes)
    }

    fn is_durable(&self) -> bool {
        (**self).is_durable()
    }
}

/// In-process store; contents are lost when the process exits
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> TrackerResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn apply(&mut self, changes: &[(&str, Option<&str>)]) -> TrackerResult<()> {
        apply_changes(&mut self.entries, changes);
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }
}

/// All keys in a single JSON object file, rewritten atomically on every change
///
/// The in-memory copy is only updated after the file write succeeds, so a
/// failed write leaves both sides as they were.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store file; a missing file is an empty store
    pub fn open(path: impl AsRef<Path>) -> TrackerResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries: BTreeMap<String, String> = read_json(&path)?;
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened file store");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn commit(&mut self, entries: BTreeMap<String, String>) -> TrackerResult<()> {
        write_json_atomic(&self.path, &entries)?;
        self.entries = entries;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        self.commit(entries)
    }

    fn delete(&mut self, key: &str) -> TrackerResult<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut entries = self.entries.clone();
        entries.remove(key);
        self.commit(entries)
    }

    fn apply(&mut self, changes: &[(&str, Option<&str>)]) -> TrackerResult<()> {
        let mut entries = self.entries.clone();
        apply_changes(&mut entries, changes);
        if entries == self.entries {
            return Ok(());
        }
        self.commit(entries)
    }

    fn is_durable(&self) -> bool {
        true
    }
}

fn apply_changes(entries: &mut BTreeMap<String, String>, changes: &[(&str, Option<&str>)]) {
    for (key, value) in changes {
        match value {
            Some(value) => {
                entries.insert(key.to_string(), value.to_string());
            }
            None => {
                entries.remove(*key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_contract() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("budget").unwrap(), None);

        store.set("budget", "100.00").unwrap();
        assert_eq!(store.get("budget").unwrap().as_deref(), Some("100.00"));

        store.delete("budget").unwrap();
        store.delete("budget").unwrap();
        assert_eq!(store.get("budget").unwrap(), None);
        assert!(store.is_empty());
        assert!(!store.is_durable());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("period", "weekly").unwrap();
        store.set("budget", "250.00").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("period").unwrap().as_deref(), Some("weekly"));
        assert_eq!(reopened.get("budget").unwrap().as_deref(), Some("250.00"));
        assert!(reopened.is_durable());
    }

    #[test]
    fn test_file_store_delete() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("budget", "1.00").unwrap();
        store.delete("budget").unwrap();
        store.delete("never-set").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("budget").unwrap(), None);
    }

    #[test]
    fn test_file_store_corrupt_file_fails_to_open() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "[1, 2").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(err.is_persistence());
    }

    #[test]
    fn test_failed_write_keeps_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("budget", "5.00").unwrap();

        // A directory where the temp file should go makes the write fail
        std::fs::create_dir(temp_dir.path().join("store.json.tmp")).unwrap();
        assert!(store.set("budget", "9.00").is_err());
        assert_eq!(store.get("budget").unwrap().as_deref(), Some("5.00"));
    }

    #[test]
    fn test_file_store_apply_writes_all_keys_together() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("expenses", "[]").unwrap();
        store
            .apply(&[
                ("budget", Some("250.00")),
                ("period", Some("weekly")),
                ("expenses", None),
            ])
            .unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("budget").unwrap().as_deref(), Some("250.00"));
        assert_eq!(reopened.get("period").unwrap().as_deref(), Some("weekly"));
        assert_eq!(reopened.get("expenses").unwrap(), None);
    }

    #[test]
    fn test_failed_apply_changes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set("budget", "5.00").unwrap();
        store.set("period", "monthly").unwrap();

        std::fs::create_dir(temp_dir.path().join("store.json.tmp")).unwrap();
        assert!(store
            .apply(&[("budget", Some("9.00")), ("period", Some("weekly"))])
            .is_err());
        assert_eq!(store.get("budget").unwrap().as_deref(), Some("5.00"));
        assert_eq!(store.get("period").unwrap().as_deref(), Some("monthly"));

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("budget").unwrap().as_deref(), Some("5.00"));
        assert_eq!(reopened.get("period").unwrap().as_deref(), Some("monthly"));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        assert!(!store.is_durable());
    }
}
