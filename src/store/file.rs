// JSON flat-file storage backend

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Pharmacy;
use crate::store::{Storage, StoreError};

/// Stores the record sequence as a single pretty-printed JSON file.
///
/// serde_json writes UTF-8 without ASCII escaping, so non-ASCII names
/// and addresses round-trip faithfully.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Creates a backend for the given file path; the file itself is
    /// only created on the first write
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying store file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn read_all(&self) -> Vec<Pharmacy> {
        // First run (no file) and corrupt content are both empty state
        match fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Vec::new(),
        }
    }

    fn write_all(&self, records: &[Pharmacy]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
