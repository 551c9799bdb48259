//! Transaction Entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A payment transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub customer_name: String,
    pub amount: f64,
    pub status: String,
    pub created_at: NaiveDate,
}

impl Transaction {
    pub fn new(id: u32, customer_name: &str, amount: f64, status: &str, created_at: NaiveDate) -> Self {
        Self {
            id,
            customer_name: customer_name.to_string(),
            amount,
            status: status.to_string(),
            created_at,
        }
    }
}

impl Entity for Transaction {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
