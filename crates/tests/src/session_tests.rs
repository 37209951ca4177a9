use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use server::session::SessionStore;
use std::time::Duration;
use crate::common;

#[tokio::test]
async fn anonymous_request_has_no_session() {
    let (app, _store) = common::test_app();

    let res = common::get(&app, "/whoami", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, Value::Null);
    assert!(res.set_cookies().is_empty(), "no cookie should be touched");
}

#[tokio::test]
async fn sign_in_sets_http_only_session_cookie() {
    let (app, store) = common::test_app();

    let res = common::post_json(
        &app,
        "/sign-in",
        json!({ "email": "agent@insurance.com", "password": "agent123" }),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::OK);

    let cookies = res.set_cookies();
    assert_eq!(cookies.len(), 1);
    let cookie = &cookies[0];
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
    assert!(store.get(cookie.value()).is_some());
}

#[tokio::test]
async fn cookie_resolves_to_signed_in_user() {
    let (app, _store) = common::test_app();
    let token = common::sign_in_as(&app, "Customer@Insurance.com", "customer123").await;

    let res = common::get(&app, "/whoami", Some(&token)).await;
    assert_eq!(res.body["email"], "customer@insurance.com");
    assert_eq!(res.body["role"], "customer");
}

#[tokio::test]
async fn wrong_password_creates_no_session() {
    let (app, store) = common::test_app();

    let res = common::post_json(
        &app,
        "/sign-in",
        json!({ "email": "admin@insurance.com", "password": "wrong" }),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        res.body["message"],
        "Invalid email or password. Try using one of the demo accounts."
    );
    assert!(res.session_token().is_none());
    assert!(store.is_empty());
}

#[tokio::test]
async fn malformed_email_is_rejected_with_field_error() {
    let (app, store) = common::test_app();

    let res = common::post_json(
        &app,
        "/sign-in",
        json!({ "email": "admin-at-insurance", "password": "admin123" }),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.body["kind"], "ValidationError");
    assert_eq!(res.body["field_errors"]["email"], "Please enter a valid email address");
    assert!(res.body["field_errors"].get("password").is_none());
    assert!(res.session_token().is_none());
    assert!(store.is_empty());
}

#[tokio::test]
async fn empty_password_is_rejected_with_field_error() {
    let (app, store) = common::test_app();

    let res = common::post_json(
        &app,
        "/sign-in",
        json!({ "email": "admin@insurance.com", "password": "" }),
        None,
    )
    .await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.body["field_errors"]["password"], "Password is required");
    assert!(store.is_empty());
}

#[tokio::test]
async fn sign_out_clears_cookie_and_forgets_session() {
    let (app, store) = common::test_app();
    let token = common::sign_in_as(&app, "admin@insurance.com", "admin123").await;

    let res = common::post_json(&app, "/sign-out", json!({}), Some(&token)).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert_eq!(res.session_token().as_deref(), Some(""));
    assert!(store.get(&token).is_none());

    let res = common::get(&app, "/whoami", Some(&token)).await;
    assert_eq!(res.body, Value::Null);
}

#[tokio::test]
async fn unknown_token_is_cleared() {
    let (app, _store) = common::test_app();

    let res = common::get(&app, "/whoami", Some("not-a-real-token")).await;
    assert_eq!(res.body, Value::Null);
    assert_eq!(res.session_token().as_deref(), Some(""));
}

#[tokio::test]
async fn expired_session_is_treated_as_anonymous() {
    let (app, _store) = common::test_app_with_store(SessionStore::with_ttl(Duration::ZERO));
    let token = common::sign_in_as(&app, "agent@insurance.com", "agent123").await;

    let res = common::get(&app, "/whoami", Some(&token)).await;
    assert_eq!(res.body, Value::Null);
    assert_eq!(res.session_token().as_deref(), Some(""));
}
