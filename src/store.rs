//! Global Admin State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each list view
//! owns one record list; nothing is shared between views.

use leptos::prelude::*;
use reactive_stores::Store;

use admin_core::domain::{Category, Order, Product, Transaction};
use admin_core::repository::RecordList;
use admin_core::seed;

/// Per-view record lists with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    pub products: RecordList<Product>,
    pub orders: RecordList<Order>,
    pub transactions: RecordList<Transaction>,
    pub categories: RecordList<Category>,
}

impl AdminState {
    /// Lists filled with the built-in sample records
    pub fn seeded() -> Self {
        Self {
            products: RecordList::new(seed::products()),
            orders: RecordList::new(seed::orders()),
            transactions: RecordList::new(seed::transactions()),
            categories: RecordList::new(seed::categories()),
        }
    }
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}
