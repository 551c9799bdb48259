//! Repository Layer - Core Traits
//!
//! Defines the interface each list view uses to read and mutate its records.

use crate::domain::{Entity, DomainResult};

/// How an import is applied to the destination list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// Merge by id: known ids are replaced in place, new ids are appended
    Append,
    /// Discard the current records and keep only the imported ones
    Replace,
}

/// Core repository trait for list views
///
/// Generic over any Entity type. Operations are synchronous: the lists are
/// small and live in memory on the UI thread.
pub trait Repository<T: Entity> {
    /// All records in display order
    fn list(&self) -> &[T];

    /// Find record by ID
    fn find_by_id(&self, id: T::Id) -> Option<&T>;

    /// Append a single new record
    fn append(&mut self, record: T) -> DomainResult<()>;

    /// Merge a batch by id, all-or-nothing
    fn append_all(&mut self, records: Vec<T>) -> DomainResult<()>;

    /// Replace every record, all-or-nothing
    fn replace_all(&mut self, records: Vec<T>) -> DomainResult<()>;

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}
