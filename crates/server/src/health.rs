use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Instant;

use crate::session::SessionStore;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub active_sessions: usize,
    pub version: String,
}

/// `GET /health`.
pub async fn health_check(State(store): State<SessionStore>) -> Json<HealthResponse> {
    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        uptime_seconds: uptime,
        active_sessions: store.len(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Router exposing the health endpoint, ready to merge into the app router.
pub fn health_router(store: SessionStore) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(store)
}
