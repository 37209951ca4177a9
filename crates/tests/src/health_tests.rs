use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use crate::common;

#[tokio::test]
async fn health_reports_ok_with_no_sessions() {
    let (app, _store) = common::test_app();

    let res = common::get(&app, "/health", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
    assert_eq!(res.body["active_sessions"], 0);
    assert!(res.body["uptime_seconds"].is_u64());
    assert!(res.body["version"].as_str().is_some_and(|v| !v.is_empty()));
}

#[tokio::test]
async fn health_counts_active_sessions() {
    let (app, _store) = common::test_app();

    common::sign_in_as(&app, "admin@insurance.com", "admin123").await;
    common::sign_in_as(&app, "customer@insurance.com", "customer123").await;

    let res = common::get(&app, "/health", None).await;
    assert_eq!(res.body["active_sessions"], 2);
}
