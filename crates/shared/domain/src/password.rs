//! Password strength rule.
//!
//! A strong password has at least [`MIN_PASSWORD_LENGTH`] UTF-16 code units, one
//! uppercase ASCII letter, one symbol from [`PASSWORD_SYMBOLS`], one digit and
//! [`MIN_PASSWORD_LOWERCASE`] lowercase ASCII letters anywhere in it. It must
//! be a single line. There is no upper bound on length; every check below is
//! a linear scan.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{MIN_PASSWORD_LENGTH, MIN_PASSWORD_LOWERCASE, PASSWORD_SYMBOLS};

static UPPERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern compiles"));
static SYMBOL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[!@#$&*]").expect("symbol pattern compiles"));
static DIGIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]").expect("digit pattern compiles"));
static LOWERCASE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]").expect("lowercase pattern compiles"));
// \n, \r, U+2028 and U+2029 all end a line.
static LINE_TERMINATOR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\n\r\x{2028}\x{2029}]").expect("line terminator pattern compiles"));

/// Length in UTF-16 code units, the unit clients measure strings in.
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// A single password requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRequirement {
    MinLength,
    Uppercase,
    Symbol,
    Digit,
    Lowercase,
    SingleLine,
}

impl PasswordRequirement {
    pub fn description(&self) -> String {
        match self {
            PasswordRequirement::MinLength => {
                format!("at least {} characters", MIN_PASSWORD_LENGTH)
            }
            PasswordRequirement::Uppercase => "an uppercase letter".to_string(),
            PasswordRequirement::Symbol => format!("one of {}", PASSWORD_SYMBOLS),
            PasswordRequirement::Digit => "a digit".to_string(),
            PasswordRequirement::Lowercase => {
                format!("at least {} lowercase letters", MIN_PASSWORD_LOWERCASE)
            }
            PasswordRequirement::SingleLine => "no line breaks".to_string(),
        }
    }
}

impl fmt::Display for PasswordRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// List every requirement `password` fails, in a fixed order.
pub fn unmet_requirements(password: &str) -> Vec<PasswordRequirement> {
    let mut unmet = Vec::new();

    if utf16_len(password) < MIN_PASSWORD_LENGTH {
        unmet.push(PasswordRequirement::MinLength);
    }
    if !UPPERCASE_REGEX.is_match(password) {
        unmet.push(PasswordRequirement::Uppercase);
    }
    if !SYMBOL_REGEX.is_match(password) {
        unmet.push(PasswordRequirement::Symbol);
    }
    if !DIGIT_REGEX.is_match(password) {
        unmet.push(PasswordRequirement::Digit);
    }
    if LOWERCASE_REGEX.find_iter(password).count() < MIN_PASSWORD_LOWERCASE {
        unmet.push(PasswordRequirement::Lowercase);
    }
    if LINE_TERMINATOR_REGEX.is_match(password) {
        unmet.push(PasswordRequirement::SingleLine);
    }

    unmet
}

/// Check a password against the strength rule.
pub fn is_strong_password(password: &str) -> bool {
    unmet_requirements(password).is_empty()
}
