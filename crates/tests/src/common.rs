use axum::{
    body::Body,
    extract::Extension,
    http::{header, HeaderMap, Request, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{self, post},
    Json, Router,
};
use serde_json::{json, Value};
use server::session::cookies::{CookieSlot, PendingCookieAction};
use server::session::{CurrentSession, SessionStore};
use tower::ServiceExt;

/// Echo the session the middleware resolved, or `null` for anonymous requests.
async fn whoami(session: Option<Extension<CurrentSession>>) -> Json<Value> {
    match session {
        Some(Extension(current)) => Json(json!({
            "email": current.user.email,
            "role": current.user.role.as_str(),
        })),
        None => Json(Value::Null),
    }
}

/// Stand-in for the login server function: the shared sign-in core plus
/// the cookie schedule.
async fn sign_in(
    Extension(store): Extension<SessionStore>,
    Extension(slot): Extension<CookieSlot>,
    Json(body): Json<Value>,
) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    match server::session::sign_in(&store, email, password) {
        Ok(session) => {
            slot.schedule(PendingCookieAction::Set { token: session.token });
            Json(json!({ "name": session.user.name })).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Stand-in for the logout server function.
async fn sign_out(
    Extension(store): Extension<SessionStore>,
    Extension(slot): Extension<CookieSlot>,
    session: Option<Extension<CurrentSession>>,
) -> StatusCode {
    server::session::sign_out(&store, session.as_ref().map(|Extension(current)| current));
    slot.schedule(PendingCookieAction::Clear);
    StatusCode::NO_CONTENT
}

/// Router with the session middleware and health endpoint installed, plus
/// small handlers that stand in for the server functions.
pub fn test_app() -> (Router, SessionStore) {
    test_app_with_store(SessionStore::new())
}

pub fn test_app_with_store(store: SessionStore) -> (Router, SessionStore) {
    server::health::record_start_time();
    let router = Router::new()
        .route("/whoami", routing::get(whoami))
        .route("/sign-in", post(sign_in))
        .route("/sign-out", post(sign_out))
        .merge(server::health::health_router(store.clone()))
        .layer(middleware::from_fn_with_state(
            store.clone(),
            server::session::middleware::session_middleware,
        ));
    (router, store)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// All Set-Cookie values on the response.
    pub fn set_cookies(&self) -> Vec<cookie::Cookie<'static>> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|raw| cookie::Cookie::parse(raw.to_string()).ok())
            .collect()
    }

    /// Value of the session cookie set on this response, if any.
    pub fn session_token(&self) -> Option<String> {
        self.set_cookies()
            .into_iter()
            .find(|c| c.name() == server::session::cookies::SESSION_COOKIE)
            .map(|c| c.value().to_string())
    }
}

pub async fn get(app: &Router, uri: &str, token: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, session_cookie_header(token));
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value, token: Option<&str>) -> TestResponse {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, session_cookie_header(token));
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// Sign in as a demo account and return the issued token.
pub async fn sign_in_as(app: &Router, email: &str, password: &str) -> String {
    let res = post_json(
        app,
        "/sign-in",
        json!({ "email": email, "password": password }),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::OK, "sign-in failed: {}", res.body);
    res.session_token().expect("sign-in should set a session cookie")
}

fn session_cookie_header(token: &str) -> String {
    format!("{}={token}", server::session::cookies::SESSION_COOKIE)
}

async fn send(app: &Router, req: Request<Body>) -> TestResponse {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };

    TestResponse { status, headers, body }
}
