use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::SessionUser;

#[cfg(feature = "validation")]
use validator::{Validate, ValidationError};

/// Editable profile fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ProfileForm {
    #[cfg_attr(feature = "validation", validate(custom(function = "full_name_present")))]
    pub full_name: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "email_present")))]
    pub email: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "ten_digit_phone")))]
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub emergency_contact: String,
    pub emergency_phone: String,
}

impl ProfileForm {
    pub fn from_user(user: &SessionUser) -> Self {
        Self {
            full_name: user.name.clone(),
            email: user.email.clone(),
            ..Default::default()
        }
    }

    /// Check every field and report all problems at once.
    #[cfg(feature = "validation")]
    pub fn check(&self) -> Result<(), AppError> {
        self.check().map_err(|errors| {
            let mut err = AppError::from(errors);
            err.message = "Please correct the highlighted fields".to_string();
            err
        })
    }
}

#[cfg(feature = "validation")]
fn full_name_present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("Full name is required".into()));
    }
    Ok(())
}

#[cfg(feature = "validation")]
fn email_present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("Email is required".into()));
    }
    Ok(())
}

/// Blank is allowed; otherwise exactly ten digits, punctuation ignored.
#[cfg(feature = "validation")]
fn ten_digit_phone(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && digit_count(value) != 10 {
        return Err(ValidationError::new("phone")
            .with_message("Please enter a valid 10-digit phone number".into()));
    }
    Ok(())
}

#[cfg(feature = "validation")]
fn digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}

#[cfg(all(test, feature = "validation"))]
mod tests {
    use super::*;

    fn valid() -> ProfileForm {
        ProfileForm {
            full_name: "John Customer".into(),
            email: "customer@insurance.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_phone_is_allowed() {
        assert!(valid().check().is_ok());
    }

    #[test]
    fn phone_punctuation_is_ignored() {
        let form = ProfileForm { phone: "(987) 654-3210".into(), ..valid() };
        assert!(form.check().is_ok());
    }

    #[test]
    fn phone_needs_exactly_ten_digits() {
        for phone in ["12345", "+91 98765 43210", "phone"] {
            let form = ProfileForm { phone: phone.into(), ..valid() };
            let err = form.check().unwrap_err();
            assert_eq!(
                err.field_errors["phone"],
                "Please enter a valid 10-digit phone number",
                "{phone}"
            );
        }
    }

    #[test]
    fn all_errors_are_collected() {
        let form = ProfileForm { phone: "1".into(), ..Default::default() };
        let err = form.check().unwrap_err();
        assert_eq!(err.message, "Please correct the highlighted fields");
        assert_eq!(err.field_errors.len(), 3);
        assert_eq!(err.field_errors["full_name"], "Full name is required");
    }
}
