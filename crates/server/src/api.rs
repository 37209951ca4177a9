use dioxus::prelude::*;
use shared_types::{ClaimAnalysis, ClientConfig, SessionUser};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use crate::session::{cookies, CurrentSession, SessionStore};

// ── Session helpers for server functions ───────────────

/// The session store installed by the session middleware.
#[cfg(feature = "server")]
fn session_store() -> Result<SessionStore, ServerFnError> {
    use shared_types::AppError;

    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::internal("No request context").into_server_fn_error())?;
    let parts = ctx.parts_mut();
    parts
        .extensions
        .get::<SessionStore>()
        .cloned()
        .ok_or_else(|| AppError::internal("Session store unavailable").into_server_fn_error())
}

/// The caller's session: middleware-resolved first, cookie lookup second.
#[cfg(feature = "server")]
fn current_session() -> Option<CurrentSession> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(session) = parts.extensions.get::<CurrentSession>() {
        return Some(session.clone());
    }

    let token = cookies::extract_session_token(&parts.headers)?;
    let store = parts.extensions.get::<SessionStore>()?;
    store
        .get(&token)
        .map(|user| CurrentSession { token, user })
}

// ── Configuration ──────────────────────────────────────

/// Client-facing configuration. No auth required.
#[server]
pub async fn get_client_config() -> Result<ClientConfig, ServerFnError> {
    Ok(crate::config::app_config().client())
}

// ── Session ────────────────────────────────────────────

/// Sign in with a demo account. Sets the HTTP-only session cookie on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<SessionUser, ServerFnError> {
    let store = session_store()?;
    let session = crate::session::sign_in(&store, &email, &password)
        .map_err(|e| e.into_server_fn_error())?;
    cookies::schedule_session_cookie(&session.token);
    Ok(session.user)
}

/// The signed-in user, or `None` for anonymous callers.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<SessionUser>, ServerFnError> {
    Ok(current_session().map(|session| session.user))
}

/// End the caller's session and clear the cookie.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    let session = current_session();
    if let Ok(store) = session_store() {
        crate::session::sign_out(&store, session.as_ref());
    }

    cookies::schedule_clear_cookie();
    Ok(())
}

// ── Claims ─────────────────────────────────────────────

/// Screen one of the caller's claims. Any signed-in role may ask.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn analyze_claim(claim_id: String) -> Result<ClaimAnalysis, ServerFnError> {
    let role = current_session().map(|session| session.user.role);
    let analysis = crate::claims::analyze_claim_for(role, &claim_id)
        .map_err(|e| e.into_server_fn_error())?;
    Ok(analysis)
}
