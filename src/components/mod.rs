//! UI Components
//!
//! Reusable Leptos components.

mod add_category_modal;
mod add_product_modal;
mod csv_buttons;
mod error_banner;
mod filter_bar;
mod pagination;
mod sidebar;

pub use add_category_modal::AddCategoryModal;
pub use add_product_modal::AddProductModal;
pub use csv_buttons::{CsvExportButton, CsvImportButton};
pub use error_banner::ErrorBanner;
pub use filter_bar::{DateRangeInputs, FacetSelect, SearchInput};
pub use pagination::{PageNumbers, Pagination};
pub use sidebar::Sidebar;
