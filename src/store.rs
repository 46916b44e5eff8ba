//! Ordered, caller-owned collection of employer records

use crate::{EmployerRecord, RecordError};

/// Append/remove-only store of records in insertion order.
///
/// Each session owns its own store; there is no shared instance.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<EmployerRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the store
    pub fn add(&mut self, record: EmployerRecord) -> Result<(), RecordError> {
        // Deserialized records skip the constructor
        record.validate()?;
        tracing::debug!(company = record.name(), position = self.records.len(), "record added");
        self.records.push(record);
        Ok(())
    }

    /// Remove the record at `index`, shifting later records down
    pub fn remove_at(&mut self, index: usize) -> Result<EmployerRecord, RecordError> {
        if index >= self.records.len() {
            return Err(RecordError::Index {
                index,
                len: self.records.len(),
            });
        }
        let removed = self.records.remove(index);
        tracing::debug!(company = removed.name(), index, "record removed");
        Ok(removed)
    }

    /// Remove every record
    pub fn clear(&mut self) {
        tracing::debug!(count = self.records.len(), "store cleared");
        self.records.clear();
    }

    /// Current snapshot in insertion order
    pub fn all(&self) -> &[EmployerRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&EmployerRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EmployerRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a EmployerRecord;
    type IntoIter = std::slice::Iter<'a, EmployerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
