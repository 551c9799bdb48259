//! CSV Export
//!
//! Serializes any record list into the fixed eight-column export layout.

use std::borrow::Cow;
use std::fmt::Write;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{Category, Order, Product, Transaction};

/// Export header, independent of the record type
pub const HEADER: [&str; 8] = [
    "ID",
    "Customer Name",
    "Product Name",
    "Brand",
    "Description",
    "Category",
    "Status",
    "Created At",
];

/// Status written for records that have none
pub const NO_STATUS: &str = "N/A";

#[derive(Debug, Error, PartialEq)]
pub enum ExportError {
    #[error("invalid date format {0:?}")]
    DateFormat(String),
    #[error("download failed: {0}")]
    Download(String),
}

/// One exported line; absent columns stay empty
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExportRow {
    pub id: String,
    pub customer_name: String,
    pub product_name: String,
    pub brand: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub created_at: Option<NaiveDate>,
}

/// Records that can be written by the exporter
pub trait ToExportRow {
    fn to_export_row(&self) -> ExportRow;
}

/// Quote a field that contains a comma, double quote or newline
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn format_date(date: NaiveDate, date_format: &str) -> Result<String, ExportError> {
    let mut out = String::new();
    write!(out, "{}", date.format(date_format)).map_err(|_| ExportError::DateFormat(date_format.to_string()))?;
    Ok(out)
}

fn write_row(out: &mut String, row: &ExportRow, date_format: &str) -> Result<(), ExportError> {
    let created_at = match row.created_at {
        Some(date) => format_date(date, date_format)?,
        None => String::new(),
    };
    let fields: [&str; 8] = [
        &row.id,
        &row.customer_name,
        &row.product_name,
        &row.brand,
        &row.description,
        &row.category,
        &row.status,
        &created_at,
    ];
    let line = fields.iter().map(|field| escape_field(field)).collect::<Vec<_>>().join(",");
    out.push_str(&line);
    Ok(())
}

/// Build the CSV document; nothing is returned if any row fails
pub fn export_csv<T: ToExportRow>(records: &[T], date_format: &str) -> Result<String, ExportError> {
    let mut out = HEADER.join(",");
    for record in records {
        out.push('\n');
        write_row(&mut out, &record.to_export_row(), date_format)?;
    }
    Ok(out)
}

/// Download name, e.g. `orders-Jan 15, 2024.csv`
pub fn export_file_name(prefix: &str, today: NaiveDate, date_format: &str) -> Result<String, ExportError> {
    Ok(format!("{}-{}.csv", prefix, format_date(today, date_format)?))
}

impl ToExportRow for Product {
    fn to_export_row(&self) -> ExportRow {
        ExportRow {
            id: self.id.to_string(),
            customer_name: self.name.clone(),
            product_name: self.name.clone(),
            brand: self.brand.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            status: NO_STATUS.to_string(),
            created_at: Some(self.created_at),
        }
    }
}

impl ToExportRow for Order {
    fn to_export_row(&self) -> ExportRow {
        ExportRow {
            id: self.id.to_string(),
            customer_name: self.customer_name.clone(),
            status: self.status.clone(),
            created_at: Some(self.created_at),
            ..Default::default()
        }
    }
}

impl ToExportRow for Transaction {
    fn to_export_row(&self) -> ExportRow {
        ExportRow {
            id: self.id.to_string(),
            customer_name: self.customer_name.clone(),
            status: self.status.clone(),
            created_at: Some(self.created_at),
            ..Default::default()
        }
    }
}

impl ToExportRow for Category {
    fn to_export_row(&self) -> ExportRow {
        ExportRow {
            id: self.id.to_string(),
            customer_name: self.name.clone(),
            description: self.description.clone(),
            category: self.name.clone(),
            status: NO_STATUS.to_string(),
            created_at: Some(self.created_at),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    const FORMAT: &str = "%b %d, %Y";

    #[test]
    fn test_escape_rules() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("Smith, Jr."), "\"Smith, Jr.\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_field(""), "");
    }

    #[test]
    fn test_header_only_for_empty_list() {
        let csv = export_csv::<Order>(&[], FORMAT).unwrap();
        assert_eq!(csv, "ID,Customer Name,Product Name,Brand,Description,Category,Status,Created At");
    }

    #[test]
    fn test_order_row_leaves_product_columns_empty() {
        let orders = seed::orders();
        let csv = export_csv(&orders[..1], FORMAT).unwrap();
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(line, "1,John Doe,,,,,Pending,\"Jan 15, 2024\"");
    }

    #[test]
    fn test_product_row_uses_name_twice() {
        let products = seed::products();
        let csv = export_csv(&products[2..3], FORMAT).unwrap();
        let line = csv.lines().nth(1).unwrap();
        assert_eq!(
            line,
            "3,Nike Air Max,Nike Air Max,Nike,Comfortable running shoes,Footwear,N/A,\"Jan 05, 2024\""
        );
    }

    #[test]
    fn test_category_row_quotes_description() {
        let categories = seed::categories();
        let row = categories[1].to_export_row();
        assert_eq!(row.category, "Fashion");
        let csv = export_csv(&categories[1..2], FORMAT).unwrap();
        assert!(csv.ends_with("\"Clothing, Shoes, Accessories, Jewelry\",Fashion,N/A,\"Jan 16, 2024\""));
    }

    #[test]
    fn test_no_trailing_newline() {
        let csv = export_csv(&seed::orders(), FORMAT).unwrap();
        assert!(!csv.ends_with('\n'));
        assert_eq!(csv.lines().count(), 7);
    }

    #[test]
    fn test_invalid_date_format_fails_whole_export() {
        let err = export_csv(&seed::orders(), "%Q").unwrap_err();
        assert_eq!(err, ExportError::DateFormat("%Q".to_string()));
        assert_eq!(ExportError::Download("blob blocked".to_string()).to_string(), "download failed: blob blocked");
    }

    #[test]
    fn test_file_name() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_file_name("orders", today, FORMAT).unwrap(), "orders-Mar 09, 2024.csv");
    }
}
