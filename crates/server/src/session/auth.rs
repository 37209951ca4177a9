//! Sign-in and sign-out against a [`SessionStore`], independent of transport.

use shared_types::{AppError, LoginRequest};

use super::{CurrentSession, SessionStore};
use crate::directory::{self, INVALID_CREDENTIALS_MESSAGE};
use crate::error_convert::ValidateRequest;

/// Check credentials and open a session.
///
/// The email is trimmed before validation and lookup. Malformed input is a
/// validation error; a well-formed but unknown pair is `Unauthorized`.
pub fn sign_in(store: &SessionStore, email: &str, password: &str) -> Result<CurrentSession, AppError> {
    let req = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };
    req.validate_request()?;

    let Some(account) = directory::authenticate(&req.email, &req.password) else {
        tracing::warn!(email = %req.email, "login rejected");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS_MESSAGE));
    };

    let user = account.to_session_user();
    let token = store.create(user.clone());
    tracing::info!(user_id = %user.id, role = user.role.as_str(), "login succeeded");
    Ok(CurrentSession { token, user })
}

/// Forget the caller's session, if there is one.
pub fn sign_out(store: &SessionStore, session: Option<&CurrentSession>) {
    if let Some(session) = session {
        store.remove(&session.token);
        tracing::info!(user_id = %session.user.id, "logout");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    #[test]
    fn padded_email_signs_in() {
        let store = SessionStore::new();
        let session = sign_in(&store, "  agent@insurance.com ", "agent123").unwrap();
        assert_eq!(store.get(&session.token), Some(session.user));
    }

    #[test]
    fn malformed_input_is_a_validation_error() {
        let store = SessionStore::new();
        let err = sign_in(&store, "agent", "").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors.len(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn sign_out_without_session_is_a_no_op() {
        let store = SessionStore::new();
        let session = sign_in(&store, "admin@insurance.com", "admin123").unwrap();
        sign_out(&store, None);
        assert_eq!(store.len(), 1);
        sign_out(&store, Some(&session));
        assert!(store.is_empty());
    }
}
