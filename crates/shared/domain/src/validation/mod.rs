//! Field-level validation.
//!
//! Schemas parse an untyped JSON record in two passes. The shape pass pulls
//! each declared field out of the record and checks presence and JSON type.
//! The rule pass runs the schema's `Validate` rules on the typed record.
//! Either pass reports problems as [`Violation`]s, never as panics.

mod record;
pub(crate) mod rules;

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use validator::Validate;

use crate::constants::{
    CODE_INVALID_EMAIL, CODE_INVALID_ENUM_VALUE, CODE_INVALID_TYPE, CODE_INVALID_URL,
    CODE_MAX_LENGTH, CODE_PATTERN_MISMATCH, CODE_REQUIRED, MESSAGE_INVALID_URL,
    MESSAGE_PATTERN_MISMATCH,
};
use crate::messages::ErrorMessage;

pub use record::{ClosedEnum, Record};

/// Category of a field violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Required,
    InvalidType,
    InvalidEmail,
    InvalidUrl,
    MaxLength,
    InvalidEnumValue,
    PatternMismatch,
}

impl ViolationKind {
    pub const fn code(&self) -> &'static str {
        match self {
            ViolationKind::Required => CODE_REQUIRED,
            ViolationKind::InvalidType => CODE_INVALID_TYPE,
            ViolationKind::InvalidEmail => CODE_INVALID_EMAIL,
            ViolationKind::InvalidUrl => CODE_INVALID_URL,
            ViolationKind::MaxLength => CODE_MAX_LENGTH,
            ViolationKind::InvalidEnumValue => CODE_INVALID_ENUM_VALUE,
            ViolationKind::PatternMismatch => CODE_PATTERN_MISMATCH,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            CODE_REQUIRED => Some(ViolationKind::Required),
            CODE_INVALID_TYPE => Some(ViolationKind::InvalidType),
            CODE_INVALID_EMAIL => Some(ViolationKind::InvalidEmail),
            CODE_INVALID_URL => Some(ViolationKind::InvalidUrl),
            CODE_MAX_LENGTH => Some(ViolationKind::MaxLength),
            CODE_INVALID_ENUM_VALUE => Some(ViolationKind::InvalidEnumValue),
            CODE_PATTERN_MISMATCH => Some(ViolationKind::PatternMismatch),
            _ => None,
        }
    }

    /// Message reported when the check itself does not supply one
    pub const fn default_message(&self) -> &'static str {
        match self {
            ViolationKind::Required => ErrorMessage::RequiredField.as_str(),
            ViolationKind::InvalidEmail => ErrorMessage::InvalidEmail.as_str(),
            ViolationKind::MaxLength => ErrorMessage::MaxLength.as_str(),
            ViolationKind::InvalidUrl => MESSAGE_INVALID_URL,
            ViolationKind::InvalidType
            | ViolationKind::InvalidEnumValue
            | ViolationKind::PatternMismatch => MESSAGE_PATTERN_MISMATCH,
        }
    }
}

/// A structured `(field, message)` pair describing why input failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Violation {
    /// Wire name of the offending field; empty for the record itself
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    /// Violation carrying the kind's default message
    pub fn of_kind(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self::new(field, kind, kind.default_message())
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Non-empty, ordered list of violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn single(violation: Violation) -> Self {
        Self(vec![violation])
    }

    /// Wrap `violations`, or `None` if there are none
    pub fn from_vec(violations: Vec<Violation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self(violations))
        }
    }

    pub fn first(&self) -> &Violation {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Violations reported against `field`
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.0.iter().filter(move |v| v.field == field)
    }

    /// Distinct field names, in report order
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for violation in &self.0 {
            if !fields.contains(&violation.field.as_str()) {
                fields.push(&violation.field);
            }
        }
        fields
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A declared schema field: its wire name and its Rust attribute name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub wire: &'static str,
    pub attr: &'static str,
}

impl Field {
    pub const fn new(wire: &'static str, attr: &'static str) -> Self {
        Self { wire, attr }
    }
}

/// An input record with declared fields and validation rules.
pub trait Schema: Validate + Sized {
    /// Fields in declaration order; violations are reported in this order
    const FIELDS: &'static [Field];

    /// Pull every declared field out of `record`.
    ///
    /// Fields that fail the shape pass are recorded on `record` and filled
    /// with a placeholder so the rule pass can still run on the others.
    fn extract(record: &mut Record<'_>) -> Self;

    /// Parse an untyped record into a typed, normalized value.
    fn parse(value: &Value) -> Result<Self, Violations> {
        let mut record = Record::new(value)?;
        let candidate = Self::extract(&mut record);
        record.finish(candidate, Self::FIELDS)
    }
}
