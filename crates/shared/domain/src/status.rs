//! Status codes and the exception kinds they classify to.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::error::DomainError;

/// HTTP-style status codes used by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum StatusCode {
    Ok = 200,
    Created = 201,
    MovedPermanently = 301,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    NotAcceptable = 406,
    Conflict = 409,
    Internal = 500,
}

impl StatusCode {
    pub const ALL: [StatusCode; 10] = [
        StatusCode::Ok,
        StatusCode::Created,
        StatusCode::MovedPermanently,
        StatusCode::BadRequest,
        StatusCode::Unauthorized,
        StatusCode::Forbidden,
        StatusCode::NotFound,
        StatusCode::NotAcceptable,
        StatusCode::Conflict,
        StatusCode::Internal,
    ];

    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Whether the code signals a failure (4xx or 5xx)
    pub const fn is_error(self) -> bool {
        self.as_u16() >= 400
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u16())
    }
}

/// Raised when a numeric code is outside the closed [`StatusCode`] set.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown status code: {0}")]
pub struct UnknownStatusCode(pub u16);

impl TryFrom<u16> for StatusCode {
    type Error = UnknownStatusCode;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        StatusCode::ALL
            .into_iter()
            .find(|status| status.as_u16() == code)
            .ok_or(UnknownStatusCode(code))
    }
}

impl From<StatusCode> for u16 {
    fn from(status: StatusCode) -> Self {
        status.as_u16()
    }
}

/// Transport-level error category raised for an error status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ExceptionKind {
    BadRequest,
    Conflict,
    Forbidden,
    Internal,
    NotAcceptable,
    NotFound,
    Unauthorized,
}

impl ExceptionKind {
    pub const ALL: [ExceptionKind; 7] = [
        ExceptionKind::BadRequest,
        ExceptionKind::Conflict,
        ExceptionKind::Forbidden,
        ExceptionKind::Internal,
        ExceptionKind::NotAcceptable,
        ExceptionKind::NotFound,
        ExceptionKind::Unauthorized,
    ];

    /// Status code this kind is raised for
    pub const fn status(self) -> StatusCode {
        match self {
            ExceptionKind::BadRequest => StatusCode::BadRequest,
            ExceptionKind::Conflict => StatusCode::Conflict,
            ExceptionKind::Forbidden => StatusCode::Forbidden,
            ExceptionKind::Internal => StatusCode::Internal,
            ExceptionKind::NotAcceptable => StatusCode::NotAcceptable,
            ExceptionKind::NotFound => StatusCode::NotFound,
            ExceptionKind::Unauthorized => StatusCode::Unauthorized,
        }
    }

    /// Error code for client
    pub const fn code(self) -> &'static str {
        match self {
            ExceptionKind::BadRequest => "BAD_REQUEST",
            ExceptionKind::Conflict => "CONFLICT",
            ExceptionKind::Forbidden => "FORBIDDEN",
            ExceptionKind::Internal => "INTERNAL_ERROR",
            ExceptionKind::NotAcceptable => "NOT_ACCEPTABLE",
            ExceptionKind::NotFound => "NOT_FOUND",
            ExceptionKind::Unauthorized => "UNAUTHORIZED",
        }
    }

    /// Standard reason phrase of the status
    pub const fn reason(self) -> &'static str {
        match self {
            ExceptionKind::BadRequest => "Bad Request",
            ExceptionKind::Conflict => "Conflict",
            ExceptionKind::Forbidden => "Forbidden",
            ExceptionKind::Internal => "Internal Server Error",
            ExceptionKind::NotAcceptable => "Not Acceptable",
            ExceptionKind::NotFound => "Not Found",
            ExceptionKind::Unauthorized => "Unauthorized",
        }
    }

    /// Build the exception of this kind carrying `message`.
    pub fn raise(self, message: impl Into<String>) -> DomainError {
        DomainError::Exception {
            kind: self,
            message: message.into(),
            code: None,
        }
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// Map a status code to the exception kind raised for it.
///
/// Returns `None` for success and redirect codes, which never raise.
pub const fn classify(status: StatusCode) -> Option<ExceptionKind> {
    match status {
        StatusCode::Ok | StatusCode::Created | StatusCode::MovedPermanently => None,
        StatusCode::BadRequest => Some(ExceptionKind::BadRequest),
        StatusCode::Unauthorized => Some(ExceptionKind::Unauthorized),
        StatusCode::Forbidden => Some(ExceptionKind::Forbidden),
        StatusCode::NotFound => Some(ExceptionKind::NotFound),
        StatusCode::NotAcceptable => Some(ExceptionKind::NotAcceptable),
        StatusCode::Conflict => Some(ExceptionKind::Conflict),
        StatusCode::Internal => Some(ExceptionKind::Internal),
    }
}
