use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::asset::AssetError;
use common::storage::{InvalidIdentifier, StoreError};
use serde::Serialize;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`,
    /// `INVALID_IDENTIFIER`, `PAYLOAD_TOO_LARGE`, `NOT_FOUND`,
    /// `STORE_UNAVAILABLE`.
    #[schema(example = "INVALID_IDENTIFIER")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "invalid identifier 'not-a-valid-id': expected 24 hex characters")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    InvalidIdentifier(String),
    PayloadTooLarge(String),
    NotFound(String),
    StoreUnavailable(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR",
                    message: msg,
                },
            ),
            AppError::InvalidIdentifier(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "INVALID_IDENTIFIER",
                    message: msg,
                },
            ),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "PAYLOAD_TOO_LARGE",
                    message: msg,
                },
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    code: "NOT_FOUND",
                    message: msg,
                },
            ),
            AppError::StoreUnavailable(detail) => {
                tracing::error!("Store unavailable: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: "STORE_UNAVAILABLE",
                        message: "Database not available".into(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::StoreUnavailable(err.to_string())
    }
}

impl From<InvalidIdentifier> for AppError {
    fn from(err: InvalidIdentifier) -> Self {
        AppError::InvalidIdentifier(err.to_string())
    }
}

impl From<AssetError> for AppError {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::InvalidIdentifier(e) => e.into(),
            AssetError::NotFound(msg) => AppError::NotFound(msg),
            AssetError::PayloadTooLarge(e) => AppError::PayloadTooLarge(e.to_string()),
            AssetError::Upload(msg) => AppError::Validation(msg),
            AssetError::StoreUnavailable(e) => e.into(),
        }
    }
}
