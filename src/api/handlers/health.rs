//! Handlers for liveness and store diagnostics.

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::api::dto::health::{DbCheckResponse, HealthzResponse};
use crate::state::AppState;

/// Liveness probe.
///
/// # Endpoint
///
/// `GET /healthz`
///
/// Always 200 while the process is serving; the store is not consulted.
///
/// # Response
///
/// ```json
/// { "ok": true, "version": "0.1.0", "now": "2025-01-01T00:00:00Z", "uptimeSec": 42, "env": "production" }
/// ```
pub async fn healthz_handler(State(state): State<AppState>) -> Json<HealthzResponse> {
    Json(HealthzResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        now: Utc::now(),
        uptime_sec: state.uptime_secs(),
        env: state.environment.clone(),
    })
}

/// Round-trips to the store.
///
/// # Endpoint
///
/// `GET /api/dbcheck`
///
/// # Response Codes
///
/// - **200 OK**: `{ "ok": true, "now": "...", "linkCount": 3 }`
/// - **500 Internal Server Error**: `{ "ok": false, "error": "..." }`
pub async fn dbcheck_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<DbCheckResponse>) {
    match state.link_service.store_status().await {
        Ok(status) => (
            StatusCode::OK,
            Json(DbCheckResponse::healthy(status.now, status.link_count)),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Store check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DbCheckResponse::failed(e.to_string())),
            )
        }
    }
}
