//! Aggregate queries over a full scan of the store.
//!
//! Everything here works on a slice of records already loaded with
//! [`RecordStore::read_all`](crate::store::RecordStore::read_all).

pub mod aggregate;
pub mod types;
pub mod utility;

pub use aggregate::{summarize, top_by_average};
pub use types::ClassSummary;
