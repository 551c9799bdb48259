use chrono::NaiveDate;

use super::{length_between, FormErrors};
use crate::domain::Category;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl CategoryDraft {
    pub fn validate(&self) -> Result<(String, String), FormErrors> {
        let mut errors = FormErrors::new();
        length_between(&mut errors, "name", &self.name, 2, 50);
        length_between(&mut errors, "description", &self.description, 2, 500);
        errors.into_result(|| (self.name.trim().to_string(), self.description.trim().to_string()))
    }

    /// Validate and build the record in one step
    pub fn into_category(&self, id: u32, today: NaiveDate) -> Result<Category, FormErrors> {
        let (name, description) = self.validate()?;
        Ok(Category { id, name, description, created_at: today })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        let draft = |name: &str, description: &str| CategoryDraft {
            name: name.to_string(),
            description: description.to_string(),
        };
        assert!(draft("Toys", "Games and toys").validate().is_ok());
        assert!(draft("T", "Games").validate().unwrap_err().get("name").is_some());
        assert!(draft("x".repeat(51).as_str(), "Games").validate().is_err());
        assert!(draft("Toys", "x".repeat(501).as_str()).validate().is_err());
        assert!(draft("  T  ", "ok").validate().is_err());
    }

    #[test]
    fn test_into_category_trims() {
        let draft = CategoryDraft { name: " Garden ".to_string(), description: "Tools".to_string() };
        let today = NaiveDate::from_ymd_opt(2024, 2, 2).unwrap();
        let category = draft.into_category(11, today).unwrap();
        assert_eq!(category.name, "Garden");
        assert_eq!(category.created_at, today);
    }
}
