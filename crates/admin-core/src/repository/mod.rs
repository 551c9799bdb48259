//! Repository Layer
//!
//! Data access abstractions for the list views.

mod traits;
mod record_list;

pub use traits::{ImportMode, Repository};
pub use record_list::RecordList;
