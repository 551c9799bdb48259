//! CSV Import
//!
//! Parses an uploaded CSV into rows keyed by the export column names.
//! The first bad row aborts the whole import.

use chrono::{DateTime, NaiveDate};
use thiserror::Error;

use crate::domain::{Category, DomainError, Order, Product, Transaction};

/// Status given to rows without one
pub const DEFAULT_STATUS: &str = "Pending";

const IDENTITY_COLUMNS: [&str; 2] = ["Customer Name", "Product Name"];
const AMOUNT_COLUMNS: [&str; 3] = ["Total Amount", "Amount", "Price"];
const DATE_FORMATS: [&str; 2] = ["%b %d, %Y", "%Y-%m-%d"];

#[derive(Debug, Error, PartialEq)]
pub enum ImportError {
    #[error("CSV file is empty")]
    Empty,
    #[error("Missing Customer Name at row {row}. Please make sure either \"Customer Name\" or \"Product Name\" column is filled.")]
    MissingIdentity { row: usize },
    #[error("Invalid ID at row {row}: {value:?}")]
    InvalidId { row: usize, value: String },
    #[error("Malformed CSV at row {row}: {message}")]
    Malformed { row: usize, message: String },
    #[error("Import rejected: {0}")]
    Rejected(#[from] DomainError),
}

/// Defaults applied to missing optional columns
#[derive(Debug, Clone)]
pub struct ImportOptions<'a> {
    pub today: NaiveDate,
    pub default_status: &'a str,
    /// Tried before the built-in date formats
    pub date_format: Option<&'a str>,
}

impl<'a> ImportOptions<'a> {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            default_status: DEFAULT_STATUS,
            date_format: None,
        }
    }
}

/// One parsed data row
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedRow {
    pub id: u32,
    /// `Customer Name`, or `Product Name` when the former is empty
    pub customer_name: String,
    pub status: String,
    pub created_at: NaiveDate,
    pub total_amount: f64,
    pub product_name: Option<String>,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Records a view can build from an imported row
pub trait FromImport {
    fn from_import(row: ImportedRow) -> Self;
}

fn parse_id(raw: Option<&str>, row: usize) -> Result<u32, ImportError> {
    let invalid = || ImportError::InvalidId { row, value: raw.unwrap_or_default().to_string() };
    let raw = raw.ok_or_else(invalid)?;
    if let Ok(id) = raw.parse::<u32>() {
        return Ok(id);
    }
    // Spreadsheet tools like to write whole numbers as "3.0"
    match raw.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value) => Ok(value as u32),
        _ => Err(invalid()),
    }
}

fn parse_date(raw: &str, options: &ImportOptions<'_>) -> Option<NaiveDate> {
    options
        .date_format
        .into_iter()
        .chain(DATE_FORMATS)
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

fn parse_amount(raw: Option<&str>, row: usize) -> f64 {
    match raw {
        None => 0.0,
        Some(raw) => raw.trim_start_matches('$').replace(',', "").parse().unwrap_or_else(|_| {
            log::warn!("Row {}: amount {:?} is not a number, using 0", row, raw);
            0.0
        }),
    }
}

/// Parse CSV text into rows with the default options
pub fn import_csv(text: &str, today: NaiveDate) -> Result<Vec<ImportedRow>, ImportError> {
    import_csv_with(text, &ImportOptions::new(today))
}

/// Parse CSV text into rows, failing on the first invalid row
pub fn import_csv_with(text: &str, options: &ImportOptions<'_>) -> Result<Vec<ImportedRow>, ImportError> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(::csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ImportError::Malformed { row: 0, message: e.to_string() })?
        .clone();
    log::debug!("CSV headers: {:?}", headers);

    let mut rows = Vec::new();
    for record in reader.records() {
        let row = rows.len() + 1;
        let record = record.map_err(|e| ImportError::Malformed { row, message: e.to_string() })?;
        // A row of bare separators counts as a blank line
        if record.iter().all(str::is_empty) {
            continue;
        }

        let field = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .and_then(|i| record.get(i))
                .filter(|value| !value.is_empty())
        };
        let owned = |name: &str| field(name).map(str::to_string);

        log::debug!("Processing row {}: {:?}", row, record);

        let customer_name = IDENTITY_COLUMNS
            .iter()
            .find_map(|name| field(*name))
            .ok_or(ImportError::MissingIdentity { row })?
            .to_string();
        let id = parse_id(field("ID"), row)?;

        let created_at = match field("Created At") {
            None => options.today,
            Some(raw) => parse_date(raw, options).unwrap_or_else(|| {
                log::warn!("Row {}: unrecognized date {:?}, using today", row, raw);
                options.today
            }),
        };

        let parsed = ImportedRow {
            id,
            customer_name,
            status: field("Status").unwrap_or(options.default_status).to_string(),
            created_at,
            total_amount: parse_amount(AMOUNT_COLUMNS.iter().find_map(|name| field(*name)), row),
            product_name: owned("Product Name"),
            brand: owned("Brand"),
            description: owned("Description"),
            category: owned("Category"),
        };
        log::debug!("Parsed row {}: {:?}", row, parsed);
        rows.push(parsed);
    }

    if rows.is_empty() {
        return Err(ImportError::Empty);
    }
    Ok(rows)
}

/// Parse CSV text straight into records of one view
pub fn import_records<T: FromImport>(text: &str, options: &ImportOptions<'_>) -> Result<Vec<T>, ImportError> {
    Ok(import_csv_with(text, options)?.into_iter().map(T::from_import).collect())
}

impl FromImport for Order {
    fn from_import(row: ImportedRow) -> Self {
        Order {
            id: row.id,
            customer_name: row.customer_name,
            total_amount: row.total_amount,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

impl FromImport for Transaction {
    fn from_import(row: ImportedRow) -> Self {
        Transaction {
            id: row.id,
            customer_name: row.customer_name,
            amount: row.total_amount,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

impl FromImport for Product {
    fn from_import(row: ImportedRow) -> Self {
        Product {
            id: row.id,
            name: row.product_name.unwrap_or(row.customer_name),
            price: row.total_amount,
            category: row.category.unwrap_or_else(|| "Uncategorized".to_string()),
            brand: row.brand.unwrap_or_else(|| "Unknown".to_string()),
            description: row.description.unwrap_or_default(),
            created_at: row.created_at,
            details: None,
        }
    }
}

impl FromImport for Category {
    fn from_import(row: ImportedRow) -> Self {
        Category {
            id: row.id,
            name: row.category.unwrap_or(row.customer_name),
            description: row.description.unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn import(text: &str) -> Result<Vec<ImportedRow>, ImportError> {
        import_csv(text, today())
    }

    #[test]
    fn test_minimal_rows_get_defaults() {
        let rows = import("ID,Customer Name\n1,John Doe\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, "Pending");
        assert_eq!(rows[0].created_at, today());
        assert_eq!(rows[0].total_amount, 0.0);
        assert_eq!(rows[0].product_name, None);
    }

    #[test]
    fn test_product_name_is_identity_fallback() {
        let rows = import("ID,Customer Name,Product Name\n4,,Coffee Maker").unwrap();
        assert_eq!(rows[0].customer_name, "Coffee Maker");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let rows = import("ID,Customer Name\n\n1,A\n\n2,B\n,\n").unwrap();
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_separator_only_rows_are_blank() {
        let rows = import("ID,Customer Name,Status\n,,\n3,C,\n , ,\n").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 3);
        assert_eq!(import("ID,Customer Name\n,\n,,"), Err(ImportError::Empty));
    }

    #[test]
    fn test_header_only_is_empty() {
        assert_eq!(import("ID,Customer Name\n"), Err(ImportError::Empty));
        assert_eq!(import(""), Err(ImportError::Empty));
    }

    #[test]
    fn test_missing_identity_names_row() {
        let err = import("ID,Customer Name\n1,A\n2,\n").unwrap_err();
        assert_eq!(err, ImportError::MissingIdentity { row: 2 });
        assert!(err.to_string().starts_with("Missing Customer Name at row 2."));
    }

    #[test]
    fn test_non_numeric_id_aborts() {
        let err = import("ID,Customer Name\n1,A\n2,B\nthree,C\n4,D").unwrap_err();
        assert_eq!(err, ImportError::InvalidId { row: 3, value: "three".to_string() });
    }

    #[test]
    fn test_missing_id_is_invalid() {
        let err = import("Customer Name\nA").unwrap_err();
        assert_eq!(err, ImportError::InvalidId { row: 1, value: String::new() });
    }

    #[test]
    fn test_whole_float_id_is_accepted() {
        let rows = import("ID,Customer Name\n3.0,A").unwrap();
        assert_eq!(rows[0].id, 3);
        assert!(import("ID,Customer Name\n3.5,A").is_err());
        assert!(import("ID,Customer Name\n-1,A").is_err());
    }

    #[test]
    fn test_dates_in_known_formats() {
        let rows = import(
            "ID,Customer Name,Created At\n1,A,\"Jan 15, 2024\"\n2,B,2024-01-10\n3,C,2024-01-05T10:00:00Z\n4,D,soon",
        )
        .unwrap();
        let dates: Vec<String> = rows.iter().map(|r| r.created_at.to_string()).collect();
        assert_eq!(dates, vec!["2024-01-15", "2024-01-10", "2024-01-05", "2024-06-01"]);
    }

    #[test]
    fn test_slash_dates_fall_back_to_today() {
        let rows = import("ID,Customer Name,Created At\n1,A,01/15/2024").unwrap();
        assert_eq!(rows[0].created_at.to_string(), "2024-06-01");
    }

    #[test]
    fn test_amount_aliases() {
        let rows = import("ID,Customer Name,Amount\n1,A,\"$1,299.50\"\n2,B,abc").unwrap();
        assert_eq!(rows[0].total_amount, 1299.5);
        assert_eq!(rows[1].total_amount, 0.0);
    }

    #[test]
    fn test_configured_status_default() {
        let mut options = ImportOptions::new(today());
        options.default_status = "Draft";
        let rows = import_csv_with("ID,Customer Name\n1,A", &options).unwrap();
        assert_eq!(rows[0].status, "Draft");
    }

    #[test]
    fn test_product_mapping_defaults() {
        let products: Vec<Product> = import_records("ID,Product Name\n8,Desk", &ImportOptions::new(today())).unwrap();
        assert_eq!(products[0].name, "Desk");
        assert_eq!(products[0].category, "Uncategorized");
        assert_eq!(products[0].brand, "Unknown");
        assert_eq!(products[0].description, "");
    }

    #[test]
    fn test_category_mapping_prefers_category_column() {
        let categories: Vec<Category> =
            import_records("ID,Customer Name,Category,Description\n3,X,Garden,Tools", &ImportOptions::new(today()))
                .unwrap();
        assert_eq!(categories[0].name, "Garden");
        assert_eq!(categories[0].description, "Tools");
    }
}
