// Storage module - flat-file persistence for pharmacy records

mod file;
mod pharmacy_store;

pub use self::file::JsonFileStorage;
pub use self::pharmacy_store::PharmacyStore;

use thiserror::Error;

use crate::models::Pharmacy;

/// Errors surfaced by store operations.
///
/// Absent or malformed stored state is deliberately not an error; reads
/// degrade to an empty record set instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("pharmacy name must not be empty")]
    EmptyName,

    #[error("pharmacy address must not be empty")]
    EmptyAddress,
}

/// Read-all/write-all storage backend for pharmacy records.
///
/// The evaluator never touches storage directly; swapping the flat file
/// for a database means implementing this trait and nothing else.
pub trait Storage {
    /// Reads the full record sequence. Absent or malformed state is the
    /// empty sequence, never an error.
    fn read_all(&self) -> Vec<Pharmacy>;

    /// Replaces the stored sequence with `records`
    fn write_all(&self, records: &[Pharmacy]) -> Result<(), StoreError>;
}
