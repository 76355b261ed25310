//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Dashboard (HTML)
//! - `GET  /code/{code}` - Per-link statistics page (HTML)
//! - `GET  /healthz`     - Liveness probe
//! - `GET  /{code}`      - Short link redirect
//! - `/api/*`            - JSON API
//! - anything else       - HTML not-found page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{healthz_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router without path normalization.
///
/// Static segments (`/healthz`, `/api`, `/code`) take precedence over the
/// `/{code}` capture.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/healthz", get(healthz_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application with trailing slashes trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
