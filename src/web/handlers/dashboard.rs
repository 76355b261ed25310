//! Dashboard home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use crate::state::AppState;
use crate::web::handlers::pages::server_error_page;
use crate::web::view::{LinkView, public_origin};

/// Template for the dashboard home page.
///
/// Renders `templates/dashboard.html` with:
/// - Link count and total clicks
/// - Link creation form (posts to `/api/links`)
/// - Table of links, newest first
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub links: Vec<LinkView>,
    pub total_clicks: i64,
}

/// Renders the dashboard home page.
///
/// # Endpoint
///
/// `GET /`
///
/// Creation and deletion go through the JSON API from the page's script.
pub async fn dashboard_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let links = match state.link_service.list_links().await {
        Ok(links) => links,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load links for dashboard");
            return server_error_page();
        }
    };

    let origin = public_origin(&state, &headers);
    let total_clicks = links.iter().map(|l| l.clicks).sum();
    let links = links
        .into_iter()
        .map(|link| LinkView::new(link, &origin))
        .collect();

    DashboardTemplate {
        links,
        total_clicks,
    }
    .into_response()
}
