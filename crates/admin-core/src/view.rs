//! Per-view wiring
//!
//! Ties each record type to its dashboard section, its import mode and its
//! export file prefix, and runs an import against a view's list.

use crate::csv_io::{import_records, FromImport, ImportError, ImportOptions, ToExportRow};
use crate::domain::{Category, Entity, Order, Product, Transaction};
use crate::listing::Filterable;
use crate::repository::{ImportMode, RecordList};
use crate::routes::Section;

pub trait AdminRecord: Entity<Id = u32> + Filterable + ToExportRow + FromImport {
    const SECTION: Section;
    const IMPORT_MODE: ImportMode;
    /// Plural noun for "Showing N of M ..." lines
    const NOUN: &'static str;

    /// Export file prefix, e.g. `orders`
    fn file_prefix() -> &'static str {
        Self::SECTION.slug()
    }
}

impl AdminRecord for Product {
    const SECTION: Section = Section::Products;
    const IMPORT_MODE: ImportMode = ImportMode::Replace;
    const NOUN: &'static str = "products";
}

impl AdminRecord for Order {
    const SECTION: Section = Section::Orders;
    const IMPORT_MODE: ImportMode = ImportMode::Append;
    const NOUN: &'static str = "orders";
}

impl AdminRecord for Transaction {
    const SECTION: Section = Section::Transactions;
    const IMPORT_MODE: ImportMode = ImportMode::Replace;
    const NOUN: &'static str = "transactions";
}

impl AdminRecord for Category {
    const SECTION: Section = Section::Categories;
    const IMPORT_MODE: ImportMode = ImportMode::Append;
    const NOUN: &'static str = "categories";
}

/// Parse `text` and apply it to `list`; on any error `list` is untouched.
/// Returns the number of imported rows.
pub fn import_into<T: AdminRecord>(
    list: &mut RecordList<T>,
    text: &str,
    options: &ImportOptions<'_>,
) -> Result<usize, ImportError> {
    let records: Vec<T> = import_records(text, options)?;
    let count = records.len();
    list.apply_import(records, T::IMPORT_MODE)?;
    log::info!("Imported {} {} ({:?})", count, T::NOUN, T::IMPORT_MODE);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Repository;
    use crate::seed;
    use chrono::NaiveDate;

    fn options() -> ImportOptions<'static> {
        ImportOptions::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn test_orders_import_appends() {
        let mut orders = RecordList::new(seed::orders());
        let count = import_into(&mut orders, "ID,Customer Name\n7,New Buyer", &options()).unwrap();
        assert_eq!(count, 1);
        assert_eq!(orders.len(), 7);
        assert_eq!(orders.find_by_id(7).map(|o| o.customer_name.as_str()), Some("New Buyer"));
    }

    #[test]
    fn test_transactions_import_replaces() {
        let mut transactions = RecordList::new(seed::transactions());
        import_into(&mut transactions, "ID,Customer Name,Amount\n1,Only One,10", &options()).unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions.list()[0].amount, 10.0);
    }

    #[test]
    fn test_failed_import_leaves_list_unchanged() {
        let mut products = RecordList::new(seed::products());
        let before = products.clone();
        let err = import_into(&mut products, "ID,Product Name\n1,A\n1,B", &options()).unwrap_err();
        assert!(matches!(err, ImportError::Rejected(_)));
        assert_eq!(products, before);
    }

    #[test]
    fn test_file_prefixes() {
        assert_eq!(Order::file_prefix(), "orders");
        assert_eq!(Category::file_prefix(), "categories");
    }
}
