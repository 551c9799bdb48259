//! Domain Layer - Core Entity Trait
//!
//! Every record shown in a list view has an identifier that is unique
//! within its own in-memory list.

use serde::{Deserialize, Serialize};

/// Core trait for all admin records
pub trait Entity: Clone {
    /// The type of the record's identifier
    type Id: Copy + Eq + Ord + std::hash::Hash + std::fmt::Debug;

    /// Returns the record's identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    Conflict(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::Conflict("id 3 already exists".to_string());
        assert_eq!(err.to_string(), "Conflict: id 3 already exists");
    }
}
