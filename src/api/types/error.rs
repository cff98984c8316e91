//! API error responses
//!
//! Error bodies carry `statusCode`/`errorMessage` keys, mirrored into the
//! actual HTTP status line.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    pub status_code: u16,
    pub error_message: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                status_code: status.as_u16(),
                error_message: message.into(),
            },
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { .. } => Self::not_found("Key not found"),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Configuration { message } => Self::internal(message),
            DomainError::StoreWrite { message }
            | DomainError::StoreExpire { message }
            | DomainError::StoreRead { message } => Self::internal(message),
            DomainError::Internal { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.body.status_code, self.body.error_message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Invalid user type: 'bogus'");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.body.status_code, 400);
        assert_eq!(err.body.error_message, "Invalid user type: 'bogus'");
    }

    #[test]
    fn test_not_found_conversion_uses_canonical_message() {
        let api_err: ApiError = DomainError::not_found("Slug '01ABC' not found").into();

        assert_eq!(api_err.status, StatusCode::NOT_FOUND);
        assert_eq!(api_err.body.error_message, "Key not found");
    }

    #[test]
    fn test_validation_conversion() {
        let api_err: ApiError = DomainError::validation("Invalid action: 'bogus'").into();
        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_store_errors_are_internal() {
        for err in [
            DomainError::store_write("hset failed"),
            DomainError::store_expire("expire failed"),
            DomainError::store_read("hgetall failed"),
        ] {
            let api_err: ApiError = err.into();
            assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::not_found("Key not found");
        let json = serde_json::to_string(&err.body).unwrap();

        assert_eq!(json, r#"{"statusCode":404,"errorMessage":"Key not found"}"#);
    }
}
