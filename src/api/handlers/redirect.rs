//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use metrics::counter;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, error, warn};
use url::Url;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::pages::{not_found_page, unavailable_page};

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Reject malformed codes with the not-found page, before any store call
/// 2. Look the code up; unknown codes get the same not-found page
/// 3. Queue a click event with `try_send` (never waits)
/// 4. Return `302 Found` with `Location` set to the stored URL
///
/// # Click Tracking
///
/// Click events go to a bounded channel drained by
/// [`crate::domain::click_worker::run_click_worker`]. If the queue is full or
/// closed the click is dropped and counted; the redirect is unaffected.
///
/// # Errors
///
/// Always answers with HTML: 404 for malformed or unknown codes, 503 if the
/// store lookup fails.
pub async fn redirect_handler(Path(code): Path<String>, State(state): State<AppState>) -> Response {
    let link = match state.link_service.get_link(&code).await {
        Ok(link) => link,
        Err(AppError::InvalidCode { .. } | AppError::NotFound { .. }) => {
            counter!("tinylink_redirects_total", "outcome" => "not_found").increment(1);
            debug!(code = %code, "Unknown or malformed code on redirect");
            return not_found_page();
        }
        Err(e) => {
            counter!("tinylink_redirects_total", "outcome" => "error").increment(1);
            error!(code = %code, error = %e, "Redirect lookup failed");
            return unavailable_page();
        }
    };

    let Some(location) = location_header(&link.url) else {
        counter!("tinylink_redirects_total", "outcome" => "error").increment(1);
        error!(code = %code, "Stored URL cannot be sent as a Location header");
        return unavailable_page();
    };

    counter!("tinylink_redirects_total", "outcome" => "found").increment(1);
    enqueue_click(&state, ClickEvent::new(code));

    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Hands the click to the worker without waiting.
fn enqueue_click(state: &AppState, event: ClickEvent) {
    match state.click_sender.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(event)) => {
            counter!("tinylink_click_events_dropped_total").increment(1);
            warn!(code = %event.code, "Click queue full, click dropped");
        }
        Err(TrySendError::Closed(event)) => {
            counter!("tinylink_click_events_dropped_total").increment(1);
            warn!(code = %event.code, "Click queue closed, click dropped");
        }
    }
}

/// Builds the `Location` value, falling back to the URL's ASCII
/// serialization for non-ASCII targets.
fn location_header(url: &str) -> Option<HeaderValue> {
    HeaderValue::try_from(url).ok().or_else(|| {
        let parsed = Url::parse(url).ok()?;
        HeaderValue::try_from(parsed.as_str()).ok()
    })
}
