//! Runtime settings resolved from the command line and the environment.
//!
//! `.env` is loaded by the binary before these are read, so either source
//! works:
//! ```text
//! STUDENT_RECORDS_FILE=data/estudiantes.txt
//! LOG_FILE_PATH=logs/student_records.log
//! ```

use std::path::PathBuf;

use crate::store::DEFAULT_STORE_PATH;

pub const STORE_PATH_ENV: &str = "STUDENT_RECORDS_FILE";
pub const LOG_FILE_ENV: &str = "LOG_FILE_PATH";
pub const DEFAULT_LOG_FILE: &str = "logs/student_records.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Record file backing the store.
    pub store_path: PathBuf,
    /// Rolling JSON log file.
    pub log_file: PathBuf,
}

impl Settings {
    /// Resolves settings from the process environment.
    ///
    /// A path given on the command line wins over the environment.
    pub fn from_env(store_override: Option<PathBuf>) -> Self {
        Self::resolve(store_override, |key| std::env::var(key).ok())
    }

    /// Resolves settings using `lookup` in place of the process environment.
    ///
    /// Empty values count as unset.
    pub fn resolve(
        store_override: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let store_path = store_override
            .or_else(|| lookup(STORE_PATH_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH));

        let log_file = lookup(LOG_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Self {
            store_path,
            log_file,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(None, |_| None)
    }
}
