//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Password strength
// =============================================================================

/// Minimum password length, counted in UTF-16 code units
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum number of lowercase ASCII letters a password must contain
pub const MIN_PASSWORD_LOWERCASE: usize = 3;

/// Symbols accepted as the password's special character
pub const PASSWORD_SYMBOLS: &str = "!@#$&*";

// =============================================================================
// Environments
// =============================================================================

/// Maximum length of an environment name, counted in UTF-16 code units
pub const MAX_NAME_LENGTH: usize = 25;

// =============================================================================
// Violation codes
// =============================================================================

pub const CODE_REQUIRED: &str = "required";
pub const CODE_INVALID_TYPE: &str = "invalid_type";
pub const CODE_INVALID_EMAIL: &str = "invalid_email";
pub const CODE_INVALID_URL: &str = "invalid_url";
pub const CODE_MAX_LENGTH: &str = "max_length";
pub const CODE_INVALID_ENUM_VALUE: &str = "invalid_enum_value";
pub const CODE_PATTERN_MISMATCH: &str = "pattern_mismatch";

/// Message for a value that does not parse as an absolute URL with a host
pub const MESSAGE_INVALID_URL: &str = "Invalid url";

/// Message for a value rejected by a pattern rule
pub const MESSAGE_PATTERN_MISMATCH: &str = "Invalid";
