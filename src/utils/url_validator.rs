//! Validation of link target URLs.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Checks that `raw` parses as an absolute URL.
///
/// The input is not rewritten; callers store the original string. Relative
/// references (`/path`, `example.com`) are rejected.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] with the parser's reason.
pub fn validate_url(raw: &str) -> Result<Url, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::invalid_url("url is required", json!({})));
    }

    Url::parse(raw).map_err(|e| {
        AppError::invalid_url("Invalid URL", json!({ "reason": e.to_string() }))
    })
}
