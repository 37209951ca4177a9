use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    Unauthorized,
    Forbidden,
    /// Browser storage could not be read or written.
    Storage,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AppErrorKind::NotFound => "NotFound",
            AppErrorKind::BadRequest => "BadRequest",
            AppErrorKind::ValidationError => "ValidationError",
            AppErrorKind::Conflict => "Conflict",
            AppErrorKind::Unauthorized => "Unauthorized",
            AppErrorKind::Forbidden => "Forbidden",
            AppErrorKind::Storage => "Storage",
            AppErrorKind::InternalError => "InternalError",
        };
        f.write_str(name)
    }
}

/// Structured application error used across server and client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Message shown when an error carries nothing more specific.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

impl AppError {
    fn with_kind(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Validation failure pinned to a single form field.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), message.clone());
        Self::validation(message, field_errors)
    }

    /// Keep only the first failing field, in form order. Fields missing from
    /// `order` are reported after every listed one.
    pub fn first_field_error(
        mut field_errors: HashMap<String, String>,
        order: &[&str],
    ) -> Option<Self> {
        let listed = order
            .iter()
            .find_map(|name| field_errors.remove(*name).map(|msg| (name.to_string(), msg)));
        let (field, message) = match listed {
            Some(found) => found,
            None => {
                let mut rest: Vec<_> = field_errors.into_iter().collect();
                rest.sort();
                rest.into_iter().next()?
            }
        };
        Some(Self::field(&field, message))
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Conflict, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Forbidden, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Storage, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::InternalError, message)
    }

    /// Parse an AppError from a ServerFnError message string (client-side).
    ///
    /// `ServerFnError::to_string()` wraps the payload like:
    ///   `error running server function: {"kind":"Unauthorized",...} (details: None)`
    /// This method extracts the embedded JSON and parses it.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }

    /// Extract per-field validation errors from a `ServerFnError.to_string()`.
    pub fn parse_field_errors(error_string: &str) -> HashMap<String, String> {
        Self::from_server_error(error_string)
            .map(|e| e.field_errors)
            .unwrap_or_default()
    }

    /// Extract a user-facing message from a `ServerFnError.to_string()`.
    ///
    /// Falls back to [`GENERIC_ERROR_MESSAGE`] if parsing fails.
    pub fn friendly_message(error_string: &str) -> String {
        Self::from_server_error(error_string)
            .map(|e| e.message)
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }

    #[cfg_attr(not(feature = "server"), allow(dead_code))]
    fn status_code_u16(&self) -> u16 {
        match self.kind {
            AppErrorKind::NotFound => 404,
            AppErrorKind::BadRequest => 400,
            AppErrorKind::ValidationError => 422,
            AppErrorKind::Conflict => 409,
            AppErrorKind::Unauthorized => 401,
            AppErrorKind::Forbidden => 403,
            AppErrorKind::Storage | AppErrorKind::InternalError => 500,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status_code_u16())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_server_error_parses_wrapped_json() {
        let wrapped = r#"error running server function: {"kind":"Unauthorized","message":"Invalid email or password"} (details: None)"#;
        let err = AppError::from_server_error(wrapped).unwrap();
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Invalid email or password");
    }

    #[test]
    fn from_server_error_returns_none_for_garbage() {
        assert!(AppError::from_server_error("connection reset").is_none());
        assert!(AppError::from_server_error("").is_none());
        assert!(AppError::from_server_error("} backwards {").is_none());
    }

    #[test]
    fn friendly_message_falls_back_to_generic_text() {
        assert_eq!(AppError::friendly_message("timeout"), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn field_error_populates_map_and_message() {
        let err = AppError::field("email", "Email is required");
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.message, "Email is required");
        assert_eq!(err.field_errors.get("email").unwrap(), "Email is required");
    }

    #[test]
    fn parse_field_errors_reads_embedded_map() {
        let err = AppError::field("amount", "Amount must be greater than zero");
        let wrapped = format!(
            "error running server function: {} (details: None)",
            serde_json::to_string(&err).unwrap()
        );
        let fields = AppError::parse_field_errors(&wrapped);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["amount"], "Amount must be greater than zero");
    }

    #[test]
    fn first_field_error_follows_form_order() {
        let mut fields = HashMap::new();
        fields.insert("confirm_password".to_string(), "Passwords do not match".to_string());
        fields.insert("email".to_string(), "Email is required".to_string());
        let err = AppError::first_field_error(fields, &["full_name", "email", "confirm_password"])
            .unwrap();
        assert_eq!(err.message, "Email is required");
        assert_eq!(err.field_errors.len(), 1);
        assert!(AppError::first_field_error(HashMap::new(), &["email"]).is_none());
    }

    #[test]
    fn status_code_mapping() {
        assert_eq!(AppError::not_found("").status_code_u16(), 404);
        assert_eq!(AppError::conflict("").status_code_u16(), 409);
        assert_eq!(AppError::unauthorized("").status_code_u16(), 401);
        assert_eq!(AppError::forbidden("").status_code_u16(), 403);
        assert_eq!(AppError::storage("").status_code_u16(), 500);
    }

    #[test]
    fn display_includes_kind() {
        let err = AppError::storage("quota exceeded");
        assert_eq!(err.to_string(), "Storage: quota exceeded");
    }
}
