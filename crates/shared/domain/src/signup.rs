//! Sign-up input.

use serde::Serialize;
use validator::Validate;

use crate::validation::{Field, Record, Schema};

/// Sign-up request after validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct SignUpInput {
    /// Display name, unconstrained
    #[serde(skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "openapi", schema(example = "Jane Doe"))]
    pub full_name: Option<String>,
    /// Account email address
    #[validate(custom(function = "crate::validation::rules::email"))]
    #[cfg_attr(feature = "openapi", schema(example = "user@example.com"))]
    pub email: String,
    /// Optional password; absent for passwordless sign-up
    #[serde(skip_serializing)]
    #[validate(custom(function = "crate::validation::rules::password_strength"))]
    #[cfg_attr(feature = "openapi", schema(example = "Secure1!pass", min_length = 8))]
    pub password: Option<String>,
}

impl Schema for SignUpInput {
    const FIELDS: &'static [Field] = &[
        Field::new("fullName", "full_name"),
        Field::new("email", "email"),
        Field::new("password", "password"),
    ];

    fn extract(record: &mut Record<'_>) -> Self {
        Self {
            full_name: record.optional_string("fullName"),
            email: record.required_string("email"),
            password: record.nullable_string("password"),
        }
    }
}
