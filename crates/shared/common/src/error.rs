//! Unified error handling for HTTP.
//!
//! Provides a single error type that converts domain failures into Axum
//! HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{DomainError, ErrorCode, ErrorMessage, ExceptionKind, Violations};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error("Validation failed: {0}")]
    Validation(Violations),

    #[error("Invalid input: {0}")]
    MalformedBody(String),

    // Classified exceptions
    #[error("{message}")]
    Exception {
        kind: ExceptionKind,
        message: String,
        code: Option<ErrorCode>,
    },

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    #[serde(rename = "errorCode", skip_serializing_if = "Option::is_none")]
    error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    violations: Option<Violations>,
}

impl AppError {
    /// Exception kind this error is reported as
    pub fn kind(&self) -> ExceptionKind {
        match self {
            AppError::Validation(_) | AppError::MalformedBody(_) => ExceptionKind::BadRequest,
            AppError::Exception { kind, .. } => *kind,
            AppError::Internal(_) => ExceptionKind::Internal,
        }
    }

    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            other => other.kind().code(),
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(violations) => violations.first().to_string(),
            AppError::MalformedBody(msg) => msg.clone(),

            // Hide details for internal errors
            AppError::Exception {
                kind: ExceptionKind::Internal,
                message,
                ..
            }
            | AppError::Internal(message) => {
                tracing::error!("Internal error: {}", message);
                ErrorMessage::InternalError.to_string()
            }

            AppError::Exception { message, .. } => message.clone(),
        }
    }

    fn error_code(&self) -> Option<ErrorCode> {
        match self {
            AppError::Exception { code, .. } => *code,
            _ => None,
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.user_message();
        let error_code = self.error_code();
        let code = self.code().to_string();
        let violations = match self {
            AppError::Validation(violations) => Some(violations),
            _ => None,
        };

        let body = ErrorResponse {
            error: ErrorBody {
                code,
                message,
                error_code,
                violations,
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(violations) => AppError::Validation(violations),
            DomainError::Exception {
                kind,
                message,
                code,
            } => AppError::Exception {
                kind,
                message,
                code,
            },
        }
    }
}

impl From<Violations> for AppError {
    fn from(violations: Violations) -> Self {
        AppError::Validation(violations)
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, message: impl Into<String>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: impl Into<String>) -> AppResult<T> {
        self.ok_or_else(|| DomainError::not_found(message).into())
    }
}

/// Convenience constructors
impl AppError {
    pub fn malformed_body(msg: impl Into<String>) -> Self {
        AppError::MalformedBody(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use domain::{Violation, ViolationKind};
    use serde_json::{json, Value};

    use super::*;

    async fn body_json(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_status_follows_exception_kind() {
        for kind in ExceptionKind::ALL {
            let err = AppError::from(kind.raise("boom"));
            assert_eq!(err.status().as_u16(), kind.status().as_u16());
        }
    }

    #[test]
    fn test_internal_details_hidden() {
        let err = AppError::internal("db password leaked in trace");
        assert_eq!(err.user_message(), "An internal error ocurred, try again");

        let err = AppError::from(DomainError::internal("secret"));
        assert_eq!(err.user_message(), "An internal error ocurred, try again");
    }

    #[test]
    fn test_not_found_option() {
        let missing: Option<u8> = None;
        let err = missing.ok_or_not_found(ErrorMessage::UserNotFound).unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.user_message(), "User not found");
    }

    #[tokio::test]
    async fn test_validation_response_body() {
        let violations = Violations::single(Violation::of_kind("email", ViolationKind::InvalidEmail));
        let (status, body) = body_json(AppError::from(violations)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "email: Invalid Email",
                    "violations": [
                        { "field": "email", "kind": "invalid_email", "message": "Invalid Email" }
                    ]
                }
            })
        );
    }

    #[tokio::test]
    async fn test_exception_response_carries_error_code() {
        let err = DomainError::conflict(ErrorMessage::EmailInUse).with_code(ErrorCode::EmailInUse);
        let (status, body) = body_json(err.into()).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body,
            json!({
                "error": {
                    "code": "CONFLICT",
                    "message": "This email is already in use",
                    "errorCode": "email-in-use"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (status, body) = body_json(AppError::malformed_body("EOF while parsing")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
    }
}
