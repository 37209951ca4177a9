use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::AppError;
use crate::models::{RegisteredUser, Role};

#[cfg(feature = "validation")]
use validator::{Validate, ValidationError};

/// Local storage key holding the JSON array of registered users.
pub const REGISTERED_USERS_KEY: &str = "registeredUsers";

pub const DUPLICATE_EMAIL_MESSAGE: &str = "An account with this email already exists";
pub const REGISTRATION_FAILED_MESSAGE: &str =
    "An unexpected error occurred while creating your account";

/// Field order used when reporting the first registration problem.
#[cfg(feature = "validation")]
const FIELD_ORDER: &[&str] = &["full_name", "email", "password", "confirm_password"];

/// Sign-up form input.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegistrationForm {
    #[cfg_attr(feature = "validation", validate(custom(function = "full_name_present")))]
    pub full_name: String,
    #[cfg_attr(feature = "validation", validate(custom(function = "email_address")))]
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub address: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters long"))
    )]
    pub password: String,
    #[cfg_attr(
        feature = "validation",
        validate(must_match(other = "password", message = "Passwords do not match"))
    )]
    pub confirm_password: String,
}

#[cfg(feature = "validation")]
fn full_name_present(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("Full name is required".into()));
    }
    Ok(())
}

#[cfg(feature = "validation")]
fn email_address(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("Email is required".into()));
    }
    if !looks_like_email(value) {
        return Err(ValidationError::new("email")
            .with_message("Please enter a valid email address".into()));
    }
    Ok(())
}

impl RegistrationForm {
    /// Prefilled form with a unique throwaway address.
    pub fn demo(now: DateTime<Utc>) -> Self {
        Self {
            full_name: "Demo User".to_string(),
            email: format!("demo{}@example.com", now.timestamp_millis()),
            phone: "+91 9876543210".to_string(),
            role: Role::Customer,
            address: "123 Demo Street, Mumbai, Maharashtra, 400001".to_string(),
            password: "demo123".to_string(),
            confirm_password: "demo123".to_string(),
        }
    }

    /// Check the form. Only the first problem, in field order, is reported.
    #[cfg(feature = "validation")]
    pub fn check(&self) -> Result<(), AppError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let all = AppError::from(errors);
        Err(AppError::first_field_error(all.field_errors.clone(), FIELD_ORDER).unwrap_or(all))
    }

    pub fn success_message(&self) -> String {
        format!(
            "Account created successfully! Welcome {}. You can now sign in with your credentials.",
            self.full_name
        )
    }
}

/// Loose address check: some text, an `@`, then a dotted run without spaces.
///
/// Matches anywhere in the input, so surrounding text is tolerated.
pub fn looks_like_email(input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    chars.iter().enumerate().any(|(i, &c)| {
        if c != '@' || i == 0 || chars[i - 1].is_whitespace() {
            return false;
        }
        let domain: Vec<char> = chars[i + 1..]
            .iter()
            .copied()
            .take_while(|c| !c.is_whitespace())
            .collect();
        domain
            .iter()
            .enumerate()
            .any(|(j, &d)| d == '.' && j > 0 && j + 1 < domain.len())
    })
}

/// Parse the stored user list.
///
/// An unset key or a stored `null` is an empty list. Anything else that does
/// not parse as a list of users is a storage error, so the caller never
/// overwrites accounts it could not read.
pub fn parse_registered_users(stored: Option<&str>) -> Result<Vec<RegisteredUser>, AppError> {
    let Some(raw) = stored.map(str::trim).filter(|raw| *raw != "null") else {
        return Ok(Vec::new());
    };
    serde_json::from_str(raw).map_err(|_| AppError::storage(REGISTRATION_FAILED_MESSAGE))
}

/// Append a new account to the stored list.
///
/// Returns the new record and the serialized list to write back. Emails are
/// compared exactly, after trimming the typed value.
#[cfg(feature = "validation")]
pub fn register_into(
    stored: Option<&str>,
    form: &RegistrationForm,
    now: DateTime<Utc>,
) -> Result<(RegisteredUser, String), AppError> {
    form.check()?;

    let mut users = parse_registered_users(stored)?;
    let email = form.email.trim();
    if users.iter().any(|u| u.email == email) {
        return Err(AppError::conflict(DUPLICATE_EMAIL_MESSAGE));
    }

    let user = RegisteredUser {
        id: now.timestamp_millis().to_string(),
        full_name: form.full_name.trim().to_string(),
        email: email.to_string(),
        role: form.role,
        phone: form.phone.trim().to_string(),
        address: form.address.trim().to_string(),
        created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        is_active: true,
    };
    users.push(user.clone());

    let serialized = serde_json::to_string(&users)
        .map_err(|_| AppError::storage(REGISTRATION_FAILED_MESSAGE))?;
    Ok((user, serialized))
}

#[cfg(all(test, feature = "validation"))]
mod tests {
    use super::*;
    use crate::error::AppErrorKind;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn form(email: &str) -> RegistrationForm {
        RegistrationForm {
            full_name: "Priya Nair".to_string(),
            email: email.to_string(),
            role: Role::Agent,
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn first_failure_wins() {
        let empty = RegistrationForm::default();
        assert_eq!(empty.check().unwrap_err().message, "Full name is required");

        let no_email = RegistrationForm { email: "  ".into(), ..form("") };
        assert_eq!(no_email.check().unwrap_err().message, "Email is required");

        let bad_email = form("priya.example.com");
        assert_eq!(
            bad_email.check().unwrap_err().message,
            "Please enter a valid email address"
        );

        let short = RegistrationForm {
            password: "abc".into(),
            confirm_password: "xyz".into(),
            ..form("p@n.io")
        };
        assert_eq!(
            short.check().unwrap_err().message,
            "Password must be at least 6 characters long"
        );

        let mismatch = RegistrationForm { confirm_password: "secret2".into(), ..form("p@n.io") };
        let err = mismatch.check().unwrap_err();
        assert_eq!(err.message, "Passwords do not match");
        assert!(err.field_errors.contains_key("confirm_password"));
    }

    #[test]
    fn email_pattern() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("first.last@mail.example.org"));
        assert!(looks_like_email("see x@y.z here"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a@.co"));
        assert!(!looks_like_email("a@b."));
        assert!(!looks_like_email("a @b.co"));
    }

    #[test]
    fn appends_to_missing_store() {
        let (user, json) = register_into(None, &form("priya@example.com"), at(1_718_000_000_000)).unwrap();
        assert_eq!(user.id, "1718000000000");
        assert_eq!(user.created_at, "2024-06-10T06:13:20.000Z");
        assert!(user.is_active);
        let stored = parse_registered_users(Some(&json)).unwrap();
        assert_eq!(stored, vec![user]);
    }

    #[test]
    fn appends_in_order() {
        let (_, first) = register_into(None, &form("a@example.com"), at(1)).unwrap();
        let (_, second) = register_into(Some(&first), &form("b@example.com"), at(2)).unwrap();
        let emails: Vec<String> = parse_registered_users(Some(&second))
            .unwrap()
            .into_iter()
            .map(|u| u.email)
            .collect();
        assert_eq!(emails, vec!["a@example.com", "b@example.com"]);
    }

    #[test]
    fn rejects_duplicate_email() {
        let (_, stored) = register_into(None, &form("dup@example.com"), at(1)).unwrap();
        let err = register_into(Some(&stored), &form(" dup@example.com "), at(2)).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Conflict);
        assert_eq!(err.message, DUPLICATE_EMAIL_MESSAGE);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let (_, stored) = register_into(None, &form("dup@example.com"), at(1)).unwrap();
        let (_, json) = register_into(Some(&stored), &form("DUP@example.com"), at(2)).unwrap();
        assert_eq!(parse_registered_users(Some(&json)).unwrap().len(), 2);
    }

    #[test]
    fn unset_or_null_store_is_empty() {
        assert!(parse_registered_users(None).unwrap().is_empty());
        assert!(parse_registered_users(Some("null")).unwrap().is_empty());
    }

    #[test]
    fn unreadable_store_is_left_alone() {
        let (_, valid) = register_into(None, &form("a@x.io"), at(1)).unwrap();
        let partly_broken = valid.replacen(']', r#",{"broken":true}]"#, 1);
        for stored in ["{not json", "", partly_broken.as_str()] {
            let err = register_into(Some(stored), &form("b@x.io"), at(5)).unwrap_err();
            assert_eq!(err.kind, AppErrorKind::Storage, "stored {stored:?}");
            assert_eq!(err.message, REGISTRATION_FAILED_MESSAGE);
        }
    }

    #[test]
    fn invalid_form_never_touches_store() {
        let bad = RegistrationForm { password: "x".into(), ..form("z@example.com") };
        let err = register_into(None, &bad, at(1)).unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
    }

    #[test]
    fn demo_form_is_valid() {
        let demo = RegistrationForm::demo(at(42));
        assert_eq!(demo.email, "demo42@example.com");
        assert!(demo.check().is_ok());
    }
}
