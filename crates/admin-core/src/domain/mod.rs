//! Domain Layer
//!
//! Record types shown by the admin list views and the traits they share.
//! This layer has no browser dependency.

mod entity;
mod product;
mod order;
mod transaction;
mod category;

pub use entity::{Entity, DomainError, DomainResult};
pub use product::{Product, ProductDetails, SellingOption};
pub use order::Order;
pub use transaction::Transaction;
pub use category::Category;
