//! Error types shared by the store, the line parser, and the console.

use std::path::PathBuf;

use thiserror::Error;

use crate::record::StudentRecord;

/// Failure while coercing user or file input into record fields.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("invalid age {0:?}: expected a whole number")]
    InvalidAge(String),

    #[error("invalid grade {0:?}: expected a number")]
    InvalidGrade(String),

    #[error("input is not valid UTF-8 text")]
    NotText,
}

/// Failure of a store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}:{line}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        #[source]
        source: InputError,
    },
}

/// A `read_all` that failed part way through.
///
/// Carries every record parsed before the failure, in file order, so the
/// caller can still show them after reporting the error.
#[derive(Debug, Error)]
#[error("{source} ({} records read before the failure)", .records.len())]
pub struct PartialRead {
    pub records: Vec<StudentRecord>,
    pub source: StoreError,
}

impl PartialRead {
    pub fn new(records: Vec<StudentRecord>, source: StoreError) -> Self {
        Self { records, source }
    }

    /// Discards the error and keeps the records that were read.
    pub fn into_records(self) -> Vec<StudentRecord> {
        self.records
    }
}
