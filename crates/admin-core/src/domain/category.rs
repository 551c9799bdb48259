//! Category Entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub created_at: NaiveDate,
}

impl Category {
    pub fn new(id: u32, name: &str, description: &str, created_at: NaiveDate) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            created_at,
        }
    }
}

impl Entity for Category {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
