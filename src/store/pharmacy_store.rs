// Pharmacy store exposing the reload-then-mutate-then-persist boundary

use std::path::PathBuf;

use crate::models::Pharmacy;
use crate::store::{JsonFileStorage, Storage, StoreError};

/// The record store. Every mutation reloads the stored sequence, applies
/// the change in memory, and persists the full result.
///
/// There is no locking: two concurrent writers race last-write-wins,
/// which is accepted for a single-user tool.
#[derive(Debug)]
pub struct PharmacyStore<S: Storage> {
    storage: S,
}

impl PharmacyStore<JsonFileStorage> {
    /// Opens a store backed by a JSON file at `path`
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(JsonFileStorage::new(path))
    }
}

impl<S: Storage> PharmacyStore<S> {
    /// Creates a store over an arbitrary storage backend
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Loads the current record sequence; empty on first run or when
    /// the stored content is malformed
    pub fn load(&self) -> Vec<Pharmacy> {
        self.storage.read_all()
    }

    /// Overwrites the stored sequence with `records`
    pub fn save(&self, records: &[Pharmacy]) -> Result<(), StoreError> {
        self.storage.write_all(records)
    }

    /// Validates, appends and persists a new record
    pub fn add(&self, pharmacy: Pharmacy) -> Result<(), StoreError> {
        if pharmacy.name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        if pharmacy.location.trim().is_empty() {
            return Err(StoreError::EmptyAddress);
        }

        let mut records = self.load();
        records.push(pharmacy);
        self.save(&records)
    }

    /// Removes every record whose name matches and persists the rest.
    /// Returns how many records were removed.
    pub fn remove(&self, name: &str) -> Result<usize, StoreError> {
        let records = self.load();
        let before = records.len();

        let remaining: Vec<Pharmacy> = records.into_iter().filter(|p| p.name != name).collect();
        let removed = before - remaining.len();

        if removed > 0 {
            self.save(&remaining)?;
        }
        Ok(removed)
    }
}
