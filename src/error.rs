//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::domain::Id;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Missing X-API-Key header")]
    MissingApiKey,

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),
}

impl AppError {
    pub fn not_found(resource: &'static str, id: Id) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, details) = match &self {
            // 400 Bad Request
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", Some(msg.clone()))
            }

            // 401 Unauthorized
            AppError::MissingApiKey => (StatusCode::UNAUTHORIZED, "missing_api_key", None),
            AppError::InvalidApiKey => (StatusCode::UNAUTHORIZED, "invalid_api_key", None),

            // 404 Not Found
            AppError::NotFound { resource, .. } => {
                (StatusCode::NOT_FOUND, "not_found", Some(resource.to_string()))
            }

            // Domain errors: rejected input, never partially applied
            AppError::Domain(domain_err) => {
                use crate::domain::DomainError;
                let status = match domain_err {
                    DomainError::NotAnInstructor(_) => StatusCode::UNPROCESSABLE_ENTITY,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, domain_err.error_code(), Some(domain_err.to_string()))
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            error_code: error_code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::InvalidApiKey, StatusCode::UNAUTHORIZED),
            (AppError::not_found("member", 3), StatusCode::NOT_FOUND),
            (
                AppError::Domain(DomainError::MissingField("nome")),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Domain(DomainError::NotAnInstructor(1)),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (AppError::MissingApiKey, StatusCode::UNAUTHORIZED),
        ];
        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn test_not_found_message() {
        let err = AppError::not_found("event", 9);
        assert_eq!(err.to_string(), "event not found: 9");
    }
}
