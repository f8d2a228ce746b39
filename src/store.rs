use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::common::error::StoreError;
use crate::domain::snapshot::Snapshot;

/// File-backed snapshot store, one JSON document per ledger.
///
/// The storage contract is single-key: `save` overwrites the document,
/// `load` hands back the last saved snapshot or `None`, `clear` deletes
/// the document. Read problems are diagnostics, never failures; the
/// in-memory ledger stays authoritative.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists the snapshot, replacing any previous document.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let payload = serde_json::to_string(snapshot)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }

    /// Loads the last saved snapshot.
    ///
    /// Absent, unreadable, and malformed documents all yield `None`, so
    /// the caller starts from an empty ledger.
    pub fn load(&self) -> Option<Snapshot> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to read snapshot");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "ignoring malformed snapshot");
                None
            }
        }
    }

    /// Deletes the stored document. Already-missing is fine.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::snapshot::StoredProduct;

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            products: vec![StoredProduct {
                id: 1,
                name: "Widget".to_string(),
                cost_price: "2.5000".to_string(),
                sale_price: "5.0000".to_string(),
                stock: 10,
                sold: 3,
            }],
            id_counter: 2,
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("ledger.json"));

        store.save(&sample_snapshot()).unwrap();
        let loaded = store.load().expect("snapshot should load");

        assert_eq!(loaded.id_counter, 2);
        assert_eq!(loaded.products.len(), 1);
        assert_eq!(loaded.products[0].name, "Widget");
        assert_eq!(loaded.products[0].cost_price, "2.5000");
    }

    #[test]
    fn load_returns_none_when_document_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("missing.json"));

        assert!(store.load().is_none());
    }

    #[test]
    fn load_returns_none_for_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().is_none());
    }

    #[test]
    fn load_returns_none_for_type_mismatched_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, r#"{"products": "nope", "idCounter": 1}"#).unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load().is_none());
    }

    #[test]
    fn clear_removes_the_document_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("ledger.json"));

        store.save(&sample_snapshot()).unwrap();
        store.clear().unwrap();

        assert!(store.load().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn save_overwrites_the_previous_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("ledger.json"));

        store.save(&sample_snapshot()).unwrap();

        let mut second = sample_snapshot();
        second.products.clear();
        second.id_counter = 9;
        store.save(&second).unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.products.is_empty());
        assert_eq!(loaded.id_counter, 9);
    }
}
