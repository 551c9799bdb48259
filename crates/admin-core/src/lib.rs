//! Shop Admin Core
//!
//! Browser-independent logic behind the admin panel: record types, the
//! per-view record lists, filtering and pagination, CSV import/export,
//! session handling, routes and form validation.

pub mod auth;
pub mod config;
pub mod csv_io;
pub mod domain;
pub mod forms;
pub mod listing;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod view;

pub use config::AdminConfig;
pub use view::{import_into, AdminRecord};
