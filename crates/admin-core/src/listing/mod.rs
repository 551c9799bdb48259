//! Listing
//!
//! Filtering, pagination and row selection for the list views.

mod filter;
mod paginate;
mod state;

pub use filter::{distinct_values, DateRange, Facet, FacetChoice, FilterCriteria, Filterable, ALL};
pub use paginate::{filter_and_paginate, total_pages, Page};
pub use state::ListState;
