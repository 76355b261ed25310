//! Error pages shown to browsers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Renders `templates/error_page.html`.
#[derive(Template, WebTemplate)]
#[template(path = "error_page.html")]
pub struct ErrorPageTemplate {
    pub title: &'static str,
    pub message: &'static str,
}

/// 404 page. Malformed and unknown codes both end up here.
pub fn not_found_page() -> Response {
    (
        StatusCode::NOT_FOUND,
        ErrorPageTemplate {
            title: "Link not found",
            message: "This short link does not exist or has been removed.",
        },
    )
        .into_response()
}

/// 503 page for store failures on read paths.
pub fn unavailable_page() -> Response {
    (
        StatusCode::SERVICE_UNAVAILABLE,
        ErrorPageTemplate {
            title: "Temporarily unavailable",
            message: "Links cannot be looked up right now. Please try again shortly.",
        },
    )
        .into_response()
}

pub fn server_error_page() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorPageTemplate {
            title: "Something went wrong",
            message: "The page could not be loaded.",
        },
    )
        .into_response()
}

/// Fallback for every unmatched path.
pub async fn not_found_handler() -> Response {
    not_found_page()
}
