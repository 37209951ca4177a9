use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::{CurrentSession, SessionStore};

/// Permissive session middleware.
///
/// On each request:
/// 1. Makes the [`SessionStore`] reachable from server functions
/// 2. Resolves the session cookie into a [`CurrentSession`] extension
/// 3. Inserts a [`CookieSlot`] so server functions can schedule cookie changes
/// 4. After the handler runs, applies the pending cookie action, or clears a
///    cookie whose token no longer resolves
///
/// Never rejects a request. Pages decide what an anonymous visitor sees.
pub async fn session_middleware(
    State(store): State<SessionStore>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = cookies::extract_session_token(req.headers());
    let mut stale = false;

    if let Some(token) = token {
        match store.get(&token) {
            Some(user) => {
                req.extensions_mut().insert(CurrentSession { token, user });
            }
            None => stale = true,
        }
    }

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());
    req.extensions_mut().insert(store);

    let mut response = next.run(req).await;

    match cookie_slot.take() {
        Some(PendingCookieAction::Set { token }) => {
            cookies::set_session_cookie(response.headers_mut(), &token);
        }
        Some(PendingCookieAction::Clear) => {
            cookies::clear_session_cookie(response.headers_mut());
        }
        None if stale => {
            tracing::debug!("clearing cookie for unknown session");
            cookies::clear_session_cookie(response.headers_mut());
        }
        None => {}
    }

    response
}
