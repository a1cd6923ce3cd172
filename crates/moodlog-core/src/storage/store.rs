//! Entry log and contacts persistence.
//!
//! The journal reads and writes state through the [`EntryStore`] trait so
//! the evaluator and dispatcher stay pure and independently testable.
//! [`JsonStore`] keeps two files in the data directory, one per state key:
//! `mood_entries.json` (the entry log) and `sos_contacts.txt` (the raw
//! comma-separated contacts string, stored unparsed).

use std::path::{Path, PathBuf};

use crate::entry::EntryLog;
use crate::error::StorageError;

/// Entry log file name inside the data directory.
const ENTRIES_FILE: &str = "mood_entries.json";

/// Raw contacts file name inside the data directory.
const CONTACTS_FILE: &str = "sos_contacts.txt";

/// Full persisted state: the entry log plus the raw contacts string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    pub entries: EntryLog,
    pub contacts_raw: String,
}

/// Persistence collaborator for the journal.
///
/// `load` is called once at startup; saves are last-write-wins on the
/// whole key (there is a single writer in this core's scope).
pub trait EntryStore {
    /// Load the persisted state, defaulting missing keys to empty.
    fn load(&self) -> Result<StoreState, StorageError>;

    /// Persist the full entry log.
    fn save_entries(&self, entries: &EntryLog) -> Result<(), StorageError>;

    /// Persist the raw contacts string.
    fn save_contacts(&self, raw: &str) -> Result<(), StorageError>;
}

/// File-backed store keeping JSON entries and a plain-text contacts file.
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Store rooted at the default data directory.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            dir: super::data_dir()?,
        })
    }

    /// Store rooted at an explicit directory (used by tests).
    pub fn open_at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn entries_path(&self) -> PathBuf {
        self.dir.join(ENTRIES_FILE)
    }

    fn contacts_path(&self) -> PathBuf {
        self.dir.join(CONTACTS_FILE)
    }

    fn read_if_exists(path: &Path) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }
}

impl EntryStore for JsonStore {
    fn load(&self) -> Result<StoreState, StorageError> {
        let entries = match Self::read_if_exists(&self.entries_path())? {
            Some(content) => {
                serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
                    path: self.entries_path(),
                    message: e.to_string(),
                })?
            }
            None => EntryLog::new(),
        };

        let contacts_raw = Self::read_if_exists(&self.contacts_path())?.unwrap_or_default();

        Ok(StoreState {
            entries,
            contacts_raw,
        })
    }

    fn save_entries(&self, entries: &EntryLog) -> Result<(), StorageError> {
        let path = self.entries_path();
        let content = serde_json::to_string_pretty(entries).map_err(|e| {
            StorageError::SaveFailed {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;
        std::fs::write(&path, content).map_err(|e| StorageError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    fn save_contacts(&self, raw: &str) -> Result<(), StorageError> {
        let path = self.contacts_path();
        std::fs::write(&path, raw).map_err(|e| StorageError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }
}

/// In-memory store for tests and embedding.
#[derive(Default)]
pub struct MemoryStore {
    state: std::sync::Mutex<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: StoreState) -> Self {
        Self {
            state: std::sync::Mutex::new(state),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> StoreState {
        self.state.lock().expect("store mutex poisoned").clone()
    }
}

impl EntryStore for MemoryStore {
    fn load(&self) -> Result<StoreState, StorageError> {
        Ok(self.state())
    }

    fn save_entries(&self, entries: &EntryLog) -> Result<(), StorageError> {
        self.state.lock().expect("store mutex poisoned").entries = entries.clone();
        Ok(())
    }

    fn save_contacts(&self, raw: &str) -> Result<(), StorageError> {
        self.state.lock().expect("store mutex poisoned").contacts_raw = raw.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{MoodEntry, MoodLabel};

    #[test]
    fn load_from_empty_dir_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open_at(dir.path());

        let state = store.load().unwrap();
        assert!(state.entries.is_empty());
        assert!(state.contacts_raw.is_empty());
    }

    #[test]
    fn entries_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open_at(dir.path());

        let mut log = EntryLog::new();
        log.upsert("2025-01-05", MoodEntry::new(MoodLabel::Bad, "rough"));
        store.save_entries(&log).unwrap();

        let state = store.load().unwrap();
        assert_eq!(state.entries, log);
    }

    #[test]
    fn contacts_roundtrip_keeps_raw_string() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open_at(dir.path());

        store.save_contacts("  +1, +2 ,, +3 ,+4").unwrap();
        let state = store.load().unwrap();
        // Stored unparsed; normalization happens at dispatch time.
        assert_eq!(state.contacts_raw, "  +1, +2 ,, +3 ,+4");
    }

    #[test]
    fn corrupt_entries_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("mood_entries.json"), "{not json").unwrap();
        let store = JsonStore::open_at(dir.path());

        assert!(matches!(
            store.load(),
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.save_contacts("+1,+2").unwrap();

        let mut log = EntryLog::new();
        log.upsert("2025-01-05", MoodEntry::new(MoodLabel::Good, ""));
        store.save_entries(&log).unwrap();

        let state = store.load().unwrap();
        assert_eq!(state.contacts_raw, "+1,+2");
        assert_eq!(state.entries.len(), 1);
    }
}
