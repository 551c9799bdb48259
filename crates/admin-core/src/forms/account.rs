use super::{required, FormErrors};

const MIN_PASSWORD: usize = 6;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

fn check_email(errors: &mut FormErrors, value: &str) {
    if let Some(email) = required(errors, "email", "Email", value) {
        let valid = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && !domain.is_empty() && !domain.contains('@'));
        if !valid {
            errors.add("email", "Invalid email");
        }
    }
}

fn check_password(errors: &mut FormErrors, value: &str) {
    if value.is_empty() {
        errors.add("password", "Password is required");
    } else if value.chars().count() < MIN_PASSWORD {
        errors.add("password", format!("Password should include at least {} characters", MIN_PASSWORD));
    }
}

impl LoginDraft {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        errors.into_result(|| ())
    }
}

impl SignupDraft {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        required(&mut errors, "name", "Name", &self.name);
        check_email(&mut errors, &self.email);
        check_password(&mut errors, &self.password);
        if self.confirm != self.password {
            errors.add("confirm", "Passwords did not match");
        }
        errors.into_result(|| ())
    }

    /// The login that follows a successful signup
    pub fn credentials(&self) -> LoginDraft {
        LoginDraft { email: self.email.clone(), password: self.password.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> LoginDraft {
        LoginDraft { email: email.to_string(), password: password.to_string() }
    }

    #[test]
    fn test_login_validation() {
        assert!(login("a@b.co", "secret").validate().is_ok());
        assert_eq!(login("", "secret").validate().unwrap_err().get("email"), Some("Email is required"));
        assert_eq!(login("ab.co", "secret").validate().unwrap_err().get("email"), Some("Invalid email"));
        assert_eq!(login("@b.co", "secret").validate().unwrap_err().get("email"), Some("Invalid email"));
        assert!(login("a@b.co", "short").validate().unwrap_err().get("password").is_some());
    }

    #[test]
    fn test_signup_requires_matching_confirmation() {
        let draft = SignupDraft {
            name: "Ann".to_string(),
            email: "ann@shop.io".to_string(),
            password: "secret1".to_string(),
            confirm: "secret2".to_string(),
        };
        assert_eq!(draft.validate().unwrap_err().get("confirm"), Some("Passwords did not match"));

        let draft = SignupDraft { confirm: "secret1".to_string(), ..draft };
        assert!(draft.validate().is_ok());
        assert_eq!(draft.credentials().email, "ann@shop.io");
    }
}
