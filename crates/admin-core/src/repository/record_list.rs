//! In-memory Record List
//!
//! The per-view owned list of records backing a list view.

use std::collections::HashSet;

use crate::domain::{DomainError, DomainResult, Entity};
use super::traits::{ImportMode, Repository};

/// Owned, ordered list of records with unique ids
#[derive(Debug, Clone, PartialEq)]
pub struct RecordList<T> {
    records: Vec<T>,
}

impl<T> Default for RecordList<T> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<T: Entity> RecordList<T> {
    /// Build a list, keeping the first record for any repeated id
    pub fn new(records: Vec<T>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|record| seen.insert(record.id()))
            .collect();
        Self { records }
    }

    /// Apply an imported batch according to the view's import mode
    pub fn apply_import(&mut self, records: Vec<T>, mode: ImportMode) -> DomainResult<()> {
        match mode {
            ImportMode::Append => self.append_all(records),
            ImportMode::Replace => self.replace_all(records),
        }
    }
}

impl<T: Entity<Id = u32>> RecordList<T> {
    /// Identifier for the next record created through a form
    pub fn next_id(&self) -> DomainResult<u32> {
        match self.records.iter().map(|r| r.id()).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| DomainError::Conflict(format!("no id left after {}", max))),
        }
    }
}

fn ensure_unique_batch<T: Entity>(records: &[T]) -> DomainResult<()> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            return Err(DomainError::Conflict(format!(
                "id {:?} appears more than once in the batch",
                record.id()
            )));
        }
    }
    Ok(())
}

impl<T: Entity> Repository<T> for RecordList<T> {
    fn list(&self) -> &[T] {
        &self.records
    }

    fn find_by_id(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn append(&mut self, record: T) -> DomainResult<()> {
        if self.find_by_id(record.id()).is_some() {
            return Err(DomainError::Conflict(format!("id {:?} already exists", record.id())));
        }
        self.records.push(record);
        Ok(())
    }

    fn append_all(&mut self, records: Vec<T>) -> DomainResult<()> {
        ensure_unique_batch(&records)?;
        for record in records {
            match self.records.iter_mut().find(|r| r.id() == record.id()) {
                Some(existing) => *existing = record,
                None => self.records.push(record),
            }
        }
        Ok(())
    }

    fn replace_all(&mut self, records: Vec<T>) -> DomainResult<()> {
        ensure_unique_batch(&records)?;
        self.records = records;
        Ok(())
    }
}
