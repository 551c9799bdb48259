//! Product Entity
//!
//! Catalog entries. Seeded products carry only the listing columns; products
//! created through the add-product form also carry shipping details.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Where a product may be sold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SellingOption {
    InStore,
    Online,
    #[default]
    Both,
}

impl SellingOption {
    pub const ALL: [SellingOption; 3] = [SellingOption::InStore, SellingOption::Online, SellingOption::Both];

    pub fn as_str(&self) -> &'static str {
        match self {
            SellingOption::InStore => "in-store",
            SellingOption::Online => "online",
            SellingOption::Both => "both",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SellingOption::InStore => "In-store only",
            SellingOption::Online => "Online selling only",
            SellingOption::Both => "Both in-store and online",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "in-store" => Some(SellingOption::InStore),
            "online" => Some(SellingOption::Online),
            "both" => Some(SellingOption::Both),
            _ => None,
        }
    }
}

/// Shipping and scheduling attributes captured by the add-product form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    /// Item weight in kg
    pub weight: f64,
    /// Dimensions in cm
    pub length: f64,
    pub breadth: f64,
    pub width: f64,
    pub selling_option: SellingOption,
    /// File names of the images attached when the product was created
    #[serde(default)]
    pub image_names: Vec<String>,
    pub scheduled_at: Option<NaiveDateTime>,
}

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub brand: String,
    pub description: String,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub details: Option<ProductDetails>,
}

impl Product {
    pub fn new(
        id: u32,
        name: &str,
        price: f64,
        category: &str,
        brand: &str,
        description: &str,
        created_at: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            price,
            category: category.to_string(),
            brand: brand.to_string(),
            description: description.to_string(),
            created_at,
            details: None,
        }
    }
}

impl Entity for Product {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selling_option_wire_values() {
        for option in SellingOption::ALL {
            assert_eq!(SellingOption::parse(option.as_str()), Some(option));
        }
        assert_eq!(SellingOption::parse("warehouse"), None);
        assert_eq!(SellingOption::default(), SellingOption::Both);
    }

    #[test]
    fn test_selling_option_serde() {
        let json = serde_json::to_string(&SellingOption::InStore).unwrap();
        assert_eq!(json, "\"in-store\"");
    }

    #[test]
    fn test_product_creation() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let product = Product::new(7, "Desk Lamp", 35.0, "Home", "Ikea", "LED lamp", date);
        assert_eq!(product.id(), 7);
        assert!(product.details.is_none());
    }
}
