//! Web dashboard route configuration.

use crate::state::AppState;
use crate::web::handlers::{code_stats_handler, dashboard_handler};
use axum::{Router, routing::get};

/// Browser-facing pages.
///
/// # Endpoints
///
/// - `GET /` - Dashboard with every link
/// - `GET /code/{code}` - Statistics page for a single link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/code/{code}", get(code_stats_handler))
}
