//! Order Entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    pub customer_name: String,
    pub total_amount: f64,
    pub status: String,
    pub created_at: NaiveDate,
}

impl Order {
    pub fn new(id: u32, customer_name: &str, total_amount: f64, status: &str, created_at: NaiveDate) -> Self {
        Self {
            id,
            customer_name: customer_name.to_string(),
            total_amount,
            status: status.to_string(),
            created_at,
        }
    }
}

impl Entity for Order {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
