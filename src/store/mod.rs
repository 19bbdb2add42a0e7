//! Persistence for student records.
//!
//! [`RecordStore`] is the seam the console and CLI are written against.
//! [`FileStore`] keeps records in an append-only comma-separated text file;
//! [`MemoryStore`] keeps them in a `Vec` for tests and dry runs.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::{PartialRead, StoreError};
use crate::record::StudentRecord;

/// File used when no path is configured.
pub const DEFAULT_STORE_PATH: &str = "estudiantes.txt";

/// Append-only record storage.
pub trait RecordStore {
    /// Persists one record after all existing ones.
    fn append(&self, record: &StudentRecord) -> Result<(), StoreError>;

    /// Returns every stored record in insertion order.
    ///
    /// On failure the error still carries the records read so far.
    fn read_all(&self) -> Result<Vec<StudentRecord>, PartialRead>;
}
