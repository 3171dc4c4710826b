//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

use crate::messages::ErrorCode;
use crate::status::{classify, ExceptionKind, StatusCode};
use crate::validation::Violations;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed validation; carries every field-level violation
    #[error("Validation failed: {0}")]
    Validation(Violations),

    /// Exception of a classified kind
    #[error("{message}")]
    Exception {
        kind: ExceptionKind,
        message: String,
        code: Option<ErrorCode>,
    },
}

impl DomainError {
    /// Raise the exception classified for `status`.
    ///
    /// Returns `None` when `status` is not an error status.
    pub fn from_status(status: StatusCode, message: impl Into<String>) -> Option<Self> {
        classify(status).map(|kind| kind.raise(message))
    }

    /// Attach a machine-readable error code
    pub fn with_code(self, error_code: ErrorCode) -> Self {
        match self {
            DomainError::Exception { kind, message, .. } => DomainError::Exception {
                kind,
                message,
                code: Some(error_code),
            },
            other => other,
        }
    }

    /// Exception kind this error is raised as
    pub fn kind(&self) -> ExceptionKind {
        match self {
            DomainError::Validation(_) => ExceptionKind::BadRequest,
            DomainError::Exception { kind, .. } => *kind,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.kind().status()
    }

    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            DomainError::Validation(_) => None,
            DomainError::Exception { code, .. } => *code,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ExceptionKind::BadRequest.raise(message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ExceptionKind::Unauthorized.raise(message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ExceptionKind::Forbidden.raise(message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ExceptionKind::NotFound.raise(message)
    }

    pub fn not_acceptable(message: impl Into<String>) -> Self {
        ExceptionKind::NotAcceptable.raise(message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ExceptionKind::Conflict.raise(message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ExceptionKind::Internal.raise(message)
    }
}

impl From<Violations> for DomainError {
    fn from(violations: Violations) -> Self {
        DomainError::Validation(violations)
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
