use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, Terminator, Trim, WriterBuilder};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::RecordStore;
use crate::error::{PartialRead, StoreError};
use crate::parser::parse_fields;
use crate::record::StudentRecord;

/// On-disk layout of one record: `name,age,grade1,grade2,grade3`.
#[derive(Serialize)]
struct Row<'a> {
    name: &'a str,
    age: i64,
    grade1: f64,
    grade2: f64,
    grade3: f64,
}

impl<'a> From<&'a StudentRecord> for Row<'a> {
    fn from(record: &'a StudentRecord) -> Self {
        let [grade1, grade2, grade3] = *record.grades();
        Row {
            name: record.name(),
            age: record.age(),
            grade1,
            grade2,
            grade3,
        }
    }
}

/// Records stored one per line in a plain text file.
///
/// The file has no header and fields are never quoted, so a name containing
/// a comma produces a line that is skipped on the next read. Every call opens
/// and closes the file; nothing guards against concurrent writers.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn open_for_append(&self) -> io::Result<File> {
        OpenOptions::new().append(true).create(true).open(&self.path)
    }
}

impl RecordStore for FileStore {
    fn append(&self, record: &StudentRecord) -> Result<(), StoreError> {
        debug!(path = %self.path.display(), name = record.name(), "Appending record");

        let file = self.open_for_append().map_err(|e| self.io_error(e))?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(file);

        let write_error = |source: csv::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        writer.serialize(Row::from(record)).map_err(write_error)?;
        writer.flush().map_err(|e| write_error(e.into()))?;

        Ok(())
    }

    fn read_all(&self) -> Result<Vec<StudentRecord>, PartialRead> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "Store file does not exist, creating it");
                self.open_for_append()
                    .map_err(|e| PartialRead::new(Vec::new(), self.io_error(e)))?;
                return Ok(Vec::new());
            }
            Err(e) => return Err(PartialRead::new(Vec::new(), self.io_error(e))),
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(file);

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (index, row) in reader.records().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(source) => {
                    warn!(path = %self.path.display(), error = %source, "Read stopped early");
                    let error = StoreError::Read {
                        path: self.path.clone(),
                        source,
                    };
                    return Err(PartialRead::new(records, error));
                }
            };

            let line = row.position().map_or(index as u64 + 1, |p| p.line());
            let fields: Vec<&str> = row.iter().collect();

            match parse_fields(&fields) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => {
                    skipped += 1;
                    debug!(line, fields = fields.len(), "Skipping line with wrong field count");
                }
                Err(source) => {
                    warn!(path = %self.path.display(), line, error = %source, "Read stopped early");
                    let error = StoreError::Parse {
                        path: self.path.clone(),
                        line,
                        source,
                    };
                    return Err(PartialRead::new(records, error));
                }
            }
        }

        debug!(
            path = %self.path.display(),
            records = records.len(),
            skipped,
            "Loaded records"
        );
        Ok(records)
    }
}
