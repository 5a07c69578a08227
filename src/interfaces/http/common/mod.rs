//! Shared HTTP building blocks

mod validated_json;

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

/// Error envelope
///
/// Failed requests answer with `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload. `null` on error
    pub data: Option<T>,
    /// Error description. Omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

pub fn status_for(e: &DomainError) -> StatusCode {
    match e {
        DomainError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::ConstraintViolation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Session(_) | DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Translate a domain error into a transport response.
pub fn error_response(e: DomainError) -> ApiError {
    if !e.is_client_error() {
        error!(error = %e, "Request failed");
    }
    let status = status_for(&e);
    (status, Json(ApiResponse::error(e.to_string())))
}
