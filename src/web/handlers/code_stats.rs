//! Per-link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::pages::{not_found_page, unavailable_page};
use crate::web::view::{LinkView, public_origin};

/// Template for the link statistics page.
///
/// Renders `templates/code_stats.html` with target URL, click count, last
/// click and creation time.
#[derive(Template, WebTemplate)]
#[template(path = "code_stats.html")]
pub struct CodeStatsTemplate {
    pub link: LinkView,
}

/// Renders the statistics page for a specific link.
///
/// # Endpoint
///
/// `GET /code/{code}`
///
/// Viewing this page does not count as a click.
pub async fn code_stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    match state.link_service.get_link(&code).await {
        Ok(link) => {
            let origin = public_origin(&state, &headers);
            CodeStatsTemplate {
                link: LinkView::new(link, &origin),
            }
            .into_response()
        }
        Err(AppError::InvalidCode { .. } | AppError::NotFound { .. }) => not_found_page(),
        Err(e) => {
            tracing::error!(code = %code, error = %e, "Failed to load link stats");
            unavailable_page()
        }
    }
}
