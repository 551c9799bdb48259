//! CSV import and export in the admin's eight-column layout.

mod export;
mod import;

pub use export::{
    escape_field, export_csv, export_file_name, ExportError, ExportRow, ToExportRow, HEADER, NO_STATUS,
};
pub use import::{
    import_csv, import_csv_with, import_records, FromImport, ImportError, ImportOptions, ImportedRow,
    DEFAULT_STATUS,
};
