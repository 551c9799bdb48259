//! Page Views

mod auth;
mod categories;
mod layout;
mod orders;
mod products;
mod transactions;

pub use auth::{LoginPage, SignupPage};
pub use categories::CategoriesPage;
pub use layout::{DashboardHome, DashboardLayout, NotFoundPage, PublicLayout};
pub use orders::OrdersPage;
pub use products::ProductsPage;
pub use transactions::TransactionsPage;
