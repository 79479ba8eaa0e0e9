//! # Address API Errors
//!
//! Error taxonomy for the HTTP surface, mapped onto status codes:
//! validation failures are 400, unknown ids are 404, and any store
//! failure is an opaque 500 logged server-side.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::model::ValidationError;
use crate::store::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Address API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing or invalid on create or update
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Update or delete addressed an id with no matching row
    #[error("Address not found")]
    NotFound,

    /// The store operation itself failed
    #[error("storage failure: {0}")]
    Persistence(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Persistence(err) = &self {
            tracing::error!(error = %err, "store operation failed");
        }
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(ValidationError::MissingField("road")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Persistence(StoreError::Database(sqlx::Error::RowNotFound)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_propagation() {
        let err = ApiError::from(ValidationError::UnknownCategory("Warehouse".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let body = ErrorResponse::from(&err);
        assert_eq!(body.code, 400);
        assert!(body.error.contains("Warehouse"));
    }
}
