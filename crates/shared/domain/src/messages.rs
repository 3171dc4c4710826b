//! Wire-visible error vocabulary.
//!
//! Codes and message texts are returned verbatim to API clients, so their
//! string forms must not change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCode {
    InvalidEmail,
    TokenNotFound,
    UserExists,
    EmailInUse,
    ResourceNotFound,
    Unauthorized,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 6] = [
        ErrorCode::InvalidEmail,
        ErrorCode::TokenNotFound,
        ErrorCode::UserExists,
        ErrorCode::EmailInUse,
        ErrorCode::ResourceNotFound,
        ErrorCode::Unauthorized,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidEmail => "invalid-email",
            ErrorCode::TokenNotFound => "token-not-found",
            ErrorCode::UserExists => "user-exists",
            ErrorCode::EmailInUse => "email-in-use",
            ErrorCode::ResourceNotFound => "resource-not-found",
            ErrorCode::Unauthorized => "unauthorized",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable error messages returned to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorMessage {
    EmailInUse,
    EnvironmentNotFound,
    ProjectNotFound,
    UserNotFound,
    InvalidEmail,
    RequiredField,
    Unauthorized,
    Forbidden,
    InvalidCredentials,
    InvalidEmailOrPass,
    InvalidToken,
    InternalError,
    MissingAuthSecret,
    EmailTemplateNotFound,
    MaxLength,
    InvalidUser,
    CannotChangeOwnStatus,
    CannotDeleteOwnUser,
    UserAlreadyAcceptedInvitation,
    UserAlreadyConfirmedEmail,
    UserIsNotActive,
    InvalidDomainFormat,
    NoCustomDomainFound,
    EmailNotFound,
    UserAlreadyInWaitlist,
    EmailTemplateRequiredEnabled,
}

impl ErrorMessage {
    pub const ALL: [ErrorMessage; 26] = [
        ErrorMessage::EmailInUse,
        ErrorMessage::EnvironmentNotFound,
        ErrorMessage::ProjectNotFound,
        ErrorMessage::UserNotFound,
        ErrorMessage::InvalidEmail,
        ErrorMessage::RequiredField,
        ErrorMessage::Unauthorized,
        ErrorMessage::Forbidden,
        ErrorMessage::InvalidCredentials,
        ErrorMessage::InvalidEmailOrPass,
        ErrorMessage::InvalidToken,
        ErrorMessage::InternalError,
        ErrorMessage::MissingAuthSecret,
        ErrorMessage::EmailTemplateNotFound,
        ErrorMessage::MaxLength,
        ErrorMessage::InvalidUser,
        ErrorMessage::CannotChangeOwnStatus,
        ErrorMessage::CannotDeleteOwnUser,
        ErrorMessage::UserAlreadyAcceptedInvitation,
        ErrorMessage::UserAlreadyConfirmedEmail,
        ErrorMessage::UserIsNotActive,
        ErrorMessage::InvalidDomainFormat,
        ErrorMessage::NoCustomDomainFound,
        ErrorMessage::EmailNotFound,
        ErrorMessage::UserAlreadyInWaitlist,
        ErrorMessage::EmailTemplateRequiredEnabled,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorMessage::EmailInUse => "This email is already in use",
            ErrorMessage::EnvironmentNotFound => "Environment not found",
            ErrorMessage::ProjectNotFound => "Project not found",
            ErrorMessage::UserNotFound => "User not found",
            ErrorMessage::InvalidEmail => "Invalid Email",
            ErrorMessage::RequiredField => "This field is required",
            ErrorMessage::Unauthorized => "Unauthorized access",
            ErrorMessage::Forbidden => "Forbidden access",
            ErrorMessage::InvalidCredentials => "Invalid credentials",
            ErrorMessage::InvalidEmailOrPass => "Invalid email or password",
            ErrorMessage::InvalidToken => "Invalid Token",
            // Misspelling is part of the published vocabulary.
            ErrorMessage::InternalError => "An internal error ocurred, try again",
            ErrorMessage::MissingAuthSecret => "Auth secret not found",
            ErrorMessage::EmailTemplateNotFound => "Email template not found",
            ErrorMessage::MaxLength => "Max length exceeded",
            ErrorMessage::InvalidUser => "Invalid user",
            ErrorMessage::CannotChangeOwnStatus => "You cannot change your own status",
            ErrorMessage::CannotDeleteOwnUser => "You cannot delete your own user",
            ErrorMessage::UserAlreadyAcceptedInvitation => "User already accepted invitation",
            ErrorMessage::UserAlreadyConfirmedEmail => "User already confirmed email",
            ErrorMessage::UserIsNotActive => "User is not active",
            ErrorMessage::InvalidDomainFormat => "Invalid domain format",
            ErrorMessage::NoCustomDomainFound => "No custom domain found for this environment",
            ErrorMessage::EmailNotFound => "Email not found",
            ErrorMessage::UserAlreadyInWaitlist => "You are already in our waitlist",
            ErrorMessage::EmailTemplateRequiredEnabled => {
                "This email template is required to be enabled"
            }
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ErrorMessage> for String {
    fn from(message: ErrorMessage) -> Self {
        message.as_str().to_string()
    }
}

impl Serialize for ErrorMessage {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
