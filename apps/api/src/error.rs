//! # API Error Handling
//!
//! Maps domain and database errors onto HTTP status codes and the JSON
//! envelope.
//!
//! ## Error Mapping
//! ```text
//! ┌──────────────────────────────────────────┬──────────────────────────────┐
//! │ Source                                   │ HTTP                         │
//! ├──────────────────────────────────────────┼──────────────────────────────┤
//! │ DbError::NotFound, ProductNotFound       │ 404 Not Found                │
//! │ ValidationError, TooManyItems, bad body  │ 400 Bad Request              │
//! │ InsufficientStock, AmountOverflow        │ 422 Unprocessable Entity     │
//! │ Foreign key violation                    │ 409 Conflict                 │
//! │ everything else                          │ 500 (logged, message masked) │
//! └──────────────────────────────────────────┴──────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use cashier_core::{CoreError, ValidationError};
use cashier_db::DbError;

use crate::response::ApiResponse;

/// Error returned from handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(CoreError::from(err).to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let status = match &err {
            CoreError::ProductNotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InsufficientStock { .. } | CoreError::AmountOverflow { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            CoreError::TooManyItems { .. } | CoreError::Validation(_) => StatusCode::BAD_REQUEST,
        };
        ApiError::new(status, err.to_string())
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => ApiError::not_found(err.to_string()),
            DbError::ForeignKeyViolation { .. } => {
                ApiError::new(StatusCode::CONFLICT, err.to_string())
            }
            DbError::Rule(rule) => rule.into(),
            other => {
                error!(error = %other, "Database operation failed");
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ApiResponse::error(self.message))).into_response()
    }
}
