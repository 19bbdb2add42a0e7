use std::cell::RefCell;

use super::RecordStore;
use crate::error::{PartialRead, StoreError};
use crate::record::StudentRecord;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<StudentRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        Self {
            records: RefCell::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn append(&self, record: &StudentRecord) -> Result<(), StoreError> {
        self.records.borrow_mut().push(record.clone());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<StudentRecord>, PartialRead> {
        Ok(self.records.borrow().clone())
    }
}
