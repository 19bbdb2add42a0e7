pub mod config;
pub mod console;
pub mod error;
pub mod output;
pub mod parser;
pub mod record;
pub mod report;
pub mod store;

pub use error::{InputError, PartialRead, StoreError};
pub use record::StudentRecord;
pub use store::{FileStore, MemoryStore, RecordStore};
