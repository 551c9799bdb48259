use chrono::{NaiveDate, NaiveDateTime};

use super::{required, required_number, FormErrors};
use crate::domain::{Product, ProductDetails, SellingOption};

/// Value format of an `<input type="datetime-local">`
pub const SCHEDULE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Raw add-product form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: String,
    pub category: String,
    pub brand: String,
    pub description: String,
    pub weight: String,
    pub length: String,
    pub breadth: String,
    pub width: String,
    pub selling_option: String,
    pub scheduled_at: String,
    pub image_names: Vec<String>,
}

/// A validated product waiting for its id
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub brand: String,
    pub description: String,
    pub details: ProductDetails,
}

impl ProductDraft {
    /// Fresh form state: selling option preselected
    pub fn new() -> Self {
        Self {
            selling_option: SellingOption::default().as_str().to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<NewProduct, FormErrors> {
        let mut errors = FormErrors::new();

        let name = required(&mut errors, "name", "Name", &self.name);
        let price = required_number(&mut errors, "price", "Price", &self.price);
        if price.is_some_and(|p| p < 0.0) {
            errors.add("price", "Price must be positive");
        }
        let category = required(&mut errors, "category", "Category", &self.category);
        let brand = required(&mut errors, "brand", "Brand", &self.brand);
        let description = required(&mut errors, "description", "Description", &self.description);

        let mut dimension = |field: &'static str, label: &str, value: &str| {
            let number = required_number(&mut errors, field, label, value)?;
            if number <= 0.0 {
                errors.add(field, format!("{} must be positive", label));
                return None;
            }
            Some(number)
        };
        let weight = dimension("weight", "Weight", &self.weight);
        let length = dimension("length", "Length", &self.length);
        let breadth = dimension("breadth", "Breadth", &self.breadth);
        let width = dimension("width", "Width", &self.width);

        let selling_option = match self.selling_option.trim() {
            "" => {
                errors.add("selling_option", "Selling option is required");
                None
            }
            value => SellingOption::parse(value).or_else(|| {
                errors.add("selling_option", "Selling option must be one of in-store, online, both");
                None
            }),
        };

        let scheduled_at = match self.scheduled_at.trim() {
            "" => None,
            value => match NaiveDateTime::parse_from_str(value, SCHEDULE_FORMAT) {
                Ok(at) => Some(at),
                Err(_) => {
                    errors.add("scheduled_at", "Scheduled date is invalid");
                    None
                }
            },
        };

        match (name, price, category, brand, description, weight, length, breadth, width, selling_option) {
            (
                Some(name),
                Some(price),
                Some(category),
                Some(brand),
                Some(description),
                Some(weight),
                Some(length),
                Some(breadth),
                Some(width),
                Some(selling_option),
            ) if errors.is_empty() => Ok(NewProduct {
                name: name.to_string(),
                price,
                category: category.to_string(),
                brand: brand.to_string(),
                description: description.to_string(),
                details: ProductDetails {
                    weight,
                    length,
                    breadth,
                    width,
                    selling_option,
                    image_names: self.image_names.clone(),
                    scheduled_at,
                },
            }),
            _ => Err(errors),
        }
    }
}

impl NewProduct {
    pub fn into_product(self, id: u32, today: NaiveDate) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            brand: self.brand,
            description: self.description,
            created_at: today,
            details: Some(self.details),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductDraft {
        ProductDraft {
            name: "Desk Lamp".to_string(),
            price: "24.5".to_string(),
            category: "Home".to_string(),
            brand: "Lumo".to_string(),
            description: "Warm light".to_string(),
            weight: "1.2".to_string(),
            length: "30".to_string(),
            breadth: "15".to_string(),
            width: "15".to_string(),
            ..ProductDraft::new()
        }
    }

    #[test]
    fn test_empty_form_lists_required_fields_in_order() {
        let mut draft = ProductDraft::new();
        draft.selling_option.clear();
        let errors = draft.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec!["name", "price", "category", "brand", "description", "weight", "length", "breadth", "width", "selling_option"]
        );
        assert_eq!(errors.first(), Some("Name is required"));
        assert_eq!(errors.get("selling_option"), Some("Selling option is required"));
    }

    #[test]
    fn test_valid_form_builds_product() {
        let mut draft = filled();
        draft.image_names = vec!["lamp.png".to_string()];
        let product = draft.validate().unwrap().into_product(7, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(product.id, 7);
        assert_eq!(product.price, 24.5);
        let details = product.details.unwrap();
        assert_eq!(details.selling_option, SellingOption::Both);
        assert_eq!(details.image_names, vec!["lamp.png"]);
        assert_eq!(details.scheduled_at, None);
    }

    #[test]
    fn test_zero_price_is_allowed_but_zero_weight_is_not() {
        let mut draft = filled();
        draft.price = "0".to_string();
        draft.weight = "0".to_string();
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("price"), None);
        assert_eq!(errors.get("weight"), Some("Weight must be positive"));
    }

    #[test]
    fn test_negative_price_message() {
        let mut draft = filled();
        draft.price = "-1".to_string();
        assert_eq!(draft.validate().unwrap_err().get("price"), Some("Price must be positive"));
    }

    #[test]
    fn test_non_numeric_dimension() {
        let mut draft = filled();
        draft.length = "long".to_string();
        assert_eq!(draft.validate().unwrap_err().get("length"), Some("Length must be a number"));
    }

    #[test]
    fn test_scheduled_date() {
        let mut draft = filled();
        draft.scheduled_at = "2024-05-01T09:30".to_string();
        let product = draft.validate().unwrap();
        assert!(product.details.scheduled_at.is_some());

        draft.scheduled_at = "tomorrow".to_string();
        assert!(draft.validate().unwrap_err().get("scheduled_at").is_some());
    }

    #[test]
    fn test_unknown_selling_option() {
        let mut draft = filled();
        draft.selling_option = "mail".to_string();
        assert!(draft.validate().unwrap_err().get("selling_option").is_some());
    }
}
