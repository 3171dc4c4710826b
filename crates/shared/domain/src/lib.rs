//! Domain layer - input schemas, validation rules and error vocabulary.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Validators turn untyped JSON records into typed inputs or an ordered list
//! of violations; the status table classifies error codes into exception
//! kinds for the transport layer.

pub mod constants;
pub mod environment;
pub mod error;
pub mod messages;
pub mod password;
pub mod signup;
pub mod status;
pub mod validation;

pub use constants::*;
pub use environment::{
    AuthProvider, AuthSettingsUpdateInput, EnvironmentCreateInput, GeneralSettingsUpdateInput,
};
pub use error::{DomainError, DomainResult};
pub use messages::{ErrorCode, ErrorMessage};
pub use password::{is_strong_password, unmet_requirements, utf16_len, PasswordRequirement};
pub use signup::SignUpInput;
pub use status::{classify, ExceptionKind, StatusCode, UnknownStatusCode};
pub use validation::{ClosedEnum, Schema, Violation, ViolationKind, Violations};
