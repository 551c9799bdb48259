//! Forms
//!
//! Raw form input and its validation. Drafts hold exactly what the user
//! typed; `validate` turns them into typed values or a set of messages.

mod account;
mod category;
mod product;

pub use account::{LoginDraft, SignupDraft};
pub use category::CategoryDraft;
pub use product::{NewProduct, ProductDraft, SCHEDULE_FORMAT};

/// Field messages in the order the fields were checked
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormErrors {
    entries: Vec<(&'static str, String)>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message; only the first message per field is kept
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.entries.push((field, message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.iter().find(|(name, _)| *name == field).map(|(_, msg)| msg.as_str())
    }

    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|(_, msg)| msg.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// `Ok(value)` when nothing was recorded
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.entries.iter().map(|(_, msg)| msg.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Trimmed value, or a "`Label` is required" message
fn required<'a>(errors: &mut FormErrors, field: &'static str, label: &str, value: &'a str) -> Option<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, format!("{} is required", label));
        None
    } else {
        Some(value)
    }
}

/// Required number; non-numeric input gets the same message as empty input
fn required_number(errors: &mut FormErrors, field: &'static str, label: &str, value: &str) -> Option<f64> {
    let value = required(errors, field, label, value)?;
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Some(number),
        _ => {
            errors.add(field, format!("{} must be a number", label));
            None
        }
    }
}

/// Length bounds counted in characters of the trimmed value
fn length_between(errors: &mut FormErrors, field: &'static str, value: &str, min: usize, max: usize) {
    let len = value.trim().chars().count();
    if len < min {
        errors.add(field, format!("String must contain at least {} character(s)", min));
    } else if len > max {
        errors.add(field, format!("String must contain at most {} character(s)", max));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = FormErrors::new();
        errors.add("name", "Name is required");
        errors.add("price", "Price is required");
        errors.add("name", "ignored");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.first(), Some("Name is required"));
        assert_eq!(errors.to_string(), "Name is required; Price is required");
    }

    #[test]
    fn test_into_result() {
        assert_eq!(FormErrors::new().into_result(|| 7), Ok(7));
        let mut errors = FormErrors::new();
        errors.add("x", "bad");
        assert!(errors.into_result(|| 7).is_err());
    }
}
