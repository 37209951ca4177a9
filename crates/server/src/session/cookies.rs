use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use std::sync::{Arc, Mutex, PoisonError};

use super::SESSION_TTL;

pub const SESSION_COOKIE: &str = "insureclaim_session";

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn session_cookie(value: &str, max_age: cookie::time::Duration) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value.to_string()))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .secure(cookie_secure())
        .build()
}

fn header_value(cookie: &Cookie<'_>) -> Option<HeaderValue> {
    match HeaderValue::from_str(&cookie.to_string()) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(error = %e, "session cookie is not a valid header value");
            None
        }
    }
}

/// Build the Set-Cookie header value carrying a session token.
pub fn build_session_cookie(token: &str) -> Option<HeaderValue> {
    let max_age = cookie::time::Duration::seconds(SESSION_TTL.as_secs() as i64);
    header_value(&session_cookie(token, max_age))
}

/// Build a Set-Cookie header value that expires the session cookie.
pub fn build_clear_cookie() -> Option<HeaderValue> {
    header_value(&session_cookie("", cookie::time::Duration::ZERO))
}

/// Read the session token from the Cookie header(s).
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim().to_string()).ok())
        .find(|c| c.name() == SESSION_COOKIE && !c.value().is_empty())
        .map(|c| c.value().to_string())
}

pub fn set_session_cookie(headers: &mut HeaderMap, token: &str) {
    if let Some(value) = build_session_cookie(token) {
        headers.append(header::SET_COOKIE, value);
    }
}

pub fn clear_session_cookie(headers: &mut HeaderMap) {
    if let Some(value) = build_clear_cookie() {
        headers.append(header::SET_COOKIE, value);
    }
}

/// Cookie change requested by a server function, applied by the session middleware.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingCookieAction {
    Set { token: String },
    Clear,
}

/// Shared slot for server functions to communicate cookie actions to the middleware.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn schedule(&self, action: PendingCookieAction) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(action);
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

fn schedule(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        match parts.extensions.get::<CookieSlot>() {
            Some(slot) => slot.schedule(action),
            None => tracing::warn!("no CookieSlot on request, is the session middleware installed?"),
        }
    }
}

/// Schedule the session cookie to be set on the response.
pub fn schedule_session_cookie(token: &str) {
    schedule(PendingCookieAction::Set {
        token: token.to_string(),
    });
}

/// Schedule the session cookie to be cleared on the response.
pub fn schedule_clear_cookie() {
    schedule(PendingCookieAction::Clear);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_attributes() {
        let value = build_session_cookie("tok-123").unwrap();
        let parsed = Cookie::parse(value.to_str().unwrap().to_string()).unwrap();
        assert_eq!(parsed.name(), SESSION_COOKIE);
        assert_eq!(parsed.value(), "tok-123");
        assert_eq!(parsed.http_only(), Some(true));
        assert_eq!(parsed.same_site(), Some(cookie::SameSite::Lax));
        assert_eq!(parsed.path(), Some("/"));
        assert_eq!(
            parsed.max_age(),
            Some(cookie::time::Duration::seconds(7 * 24 * 60 * 60))
        );
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let value = build_clear_cookie().unwrap();
        let parsed = Cookie::parse(value.to_str().unwrap().to_string()).unwrap();
        assert_eq!(parsed.value(), "");
        assert_eq!(parsed.max_age(), Some(cookie::time::Duration::ZERO));
    }

    #[test]
    fn token_is_found_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; insureclaim_session=abc; other=1"),
        );
        assert_eq!(extract_session_token(&headers).as_deref(), Some("abc"));
    }

    #[test]
    fn empty_or_missing_token_is_none() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_session_token(&headers), None);
        headers.insert(header::COOKIE, HeaderValue::from_static("insureclaim_session="));
        assert_eq!(extract_session_token(&headers), None);
    }

    #[test]
    fn slot_hands_out_action_once() {
        let slot = CookieSlot::default();
        slot.schedule(PendingCookieAction::Clear);
        assert_eq!(slot.clone().take(), Some(PendingCookieAction::Clear));
        assert_eq!(slot.take(), None);
    }
}
