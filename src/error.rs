//! Application error type shared by every layer.
//!
//! Each variant is one of the error kinds a caller can observe. The JSON
//! endpoints render them as:
//!
//! ```json
//! { "error": { "code": "code_conflict", "message": "...", "details": { } } }
//! ```
//!
//! The redirect path never renders these as JSON; it maps them onto HTML pages
//! (see [`crate::api::handlers::redirect`]).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::utils::db_error::is_unique_violation_on_code;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// The target URL is missing or not an absolute URL.
    #[error("{message}")]
    InvalidUrl { message: String, details: Value },

    /// A short code does not match `[A-Za-z0-9]{6,8}`.
    #[error("{message}")]
    InvalidCode { message: String, details: Value },

    /// The requested code is taken, or lost an insert race.
    #[error("{message}")]
    CodeConflict { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Every generated candidate collided with an existing code.
    #[error("{message}")]
    AllocationExhausted { message: String, details: Value },

    /// The store could not be reached or failed unexpectedly.
    #[error("{message}")]
    StoreUnavailable { message: String, details: Value },
}

impl AppError {
    pub fn invalid_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_code(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidCode {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::CodeConflict {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn allocation_exhausted(message: impl Into<String>, details: Value) -> Self {
        Self::AllocationExhausted {
            message: message.into(),
            details,
        }
    }

    pub fn store_unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
            details,
        }
    }

    /// HTTP status used when the error reaches a JSON endpoint.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidUrl { .. } | Self::InvalidCode { .. } => StatusCode::BAD_REQUEST,
            Self::CodeConflict { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::AllocationExhausted { .. } | Self::StoreUnavailable { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Stable identifier of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "invalid_url",
            Self::InvalidCode { .. } => "invalid_code",
            Self::CodeConflict { .. } => "code_conflict",
            Self::NotFound { .. } => "not_found",
            Self::AllocationExhausted { .. } => "allocation_exhausted",
            Self::StoreUnavailable { .. } => "store_unavailable",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (message, details) = match self {
            Self::InvalidUrl { message, details }
            | Self::InvalidCode { message, details }
            | Self::CodeConflict { message, details }
            | Self::NotFound { message, details }
            | Self::AllocationExhausted { message, details }
            | Self::StoreUnavailable { message, details } => (message.clone(), details.clone()),
        };

        ErrorInfo {
            code: self.kind(),
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_code(&e) {
            return AppError::conflict("Code already exists", json!({}));
        }

        tracing::error!(error = %e, "Store operation failed");
        AppError::store_unavailable("Store unavailable", json!({}))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors.field_errors();
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));

        // The URL is checked first, matching the order of the service checks.
        if fields.contains_key("url") {
            AppError::invalid_url("Invalid URL", details)
        } else {
            AppError::invalid_code("code must match [A-Za-z0-9]{6,8}", details)
        }
    }
}
