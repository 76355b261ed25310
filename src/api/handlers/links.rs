//! Handlers for the link CRUD endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, DeleteResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every link, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "code": "MyLink1" }
/// ```
///
/// `code` is optional; a random 6-character code is allocated when it is
/// missing or empty.
///
/// # Errors
///
/// - 400 `invalid_url` for a bad URL or an unreadable JSON body
/// - 400 `invalid_code` for a malformed custom code
/// - 409 `code_conflict` if the code is taken
/// - 500 `allocation_exhausted` / `store_unavailable`
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::invalid_url(
            "Request body must be JSON with a url field",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    let payload = payload.normalized();
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.url, payload.code)
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Returns one link. Reading a link is not a click.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
pub async fn get_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(&code).await?;

    Ok(Json(link.into()))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// # Response
///
/// `200 {"ok": true}`; 404 if no link has this code.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.link_service.delete_link(&code).await?;

    Ok(Json(DeleteResponse { ok: true }))
}
