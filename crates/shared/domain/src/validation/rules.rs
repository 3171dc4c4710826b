//! Custom rules plugged into `#[validate(custom(...))]`.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;
use validator::ValidationError;

use crate::constants::{
    CODE_INVALID_EMAIL, CODE_INVALID_URL, CODE_MAX_LENGTH, CODE_PATTERN_MISMATCH, MAX_NAME_LENGTH,
};
use crate::password::{is_strong_password, utf16_len};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern compiles")
});

/// Email address: dotted domain with an alphabetic TLD of two or more
/// letters, no leading dot and no consecutive dots.
pub fn email(value: &str) -> Result<(), ValidationError> {
    if !value.starts_with('.') && !value.contains("..") && EMAIL_REGEX.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::new(CODE_INVALID_EMAIL))
    }
}

/// Name no longer than [`MAX_NAME_LENGTH`] UTF-16 code units.
pub fn name_length(value: &str) -> Result<(), ValidationError> {
    if utf16_len(value) <= MAX_NAME_LENGTH {
        Ok(())
    } else {
        Err(ValidationError::new(CODE_MAX_LENGTH))
    }
}

/// Password must satisfy the strength rule.
pub fn password_strength(password: &str) -> Result<(), ValidationError> {
    if is_strong_password(password) {
        Ok(())
    } else {
        Err(ValidationError::new(CODE_PATTERN_MISMATCH))
    }
}

/// Absolute URL with at least a scheme and a host.
pub fn app_url(value: &str) -> Result<(), ValidationError> {
    match Url::parse(value) {
        Ok(url) if url.has_host() => Ok(()),
        _ => Err(ValidationError::new(CODE_INVALID_URL)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_url_requires_scheme_and_host() {
        assert!(app_url("https://app.example.com").is_ok());
        assert!(app_url("http://localhost:3000/callback").is_ok());
        assert!(app_url("example.com").is_err());
        assert!(app_url("mailto:someone@example.com").is_err());
        assert!(app_url("").is_err());
    }

    #[test]
    fn test_email_accepts_common_addresses() {
        assert!(email("user@example.com").is_ok());
        assert!(email("first.last+tag@mail.example.co.uk").is_ok());
        assert!(email("O'Brien@Example.COM").is_ok());
        assert!(email("user_1@sub-domain.example.io").is_ok());
    }

    #[test]
    fn test_email_rejects_single_label_domain() {
        assert!(email("user@localhost").is_err());
    }

    #[test]
    fn test_email_rejects_consecutive_dots() {
        assert!(email("a..b@example.com").is_err());
        assert!(email("user@example..com").is_err());
    }

    #[test]
    fn test_email_rejects_leading_dot() {
        assert!(email(".user@example.com").is_err());
    }

    #[test]
    fn test_email_rejects_one_letter_tld() {
        assert!(email("user@example.c").is_err());
    }

    #[test]
    fn test_email_rejects_ip_literal() {
        assert!(email("user@[127.0.0.1]").is_err());
        assert!(email("user@127.0.0.1").is_err());
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert!(email("not-an-email").is_err());
        assert!(email("user.@example.com").is_err());
        assert!(email("").is_err());
    }

    #[test]
    fn test_name_length_counts_utf16_units() {
        // Each emoji is two UTF-16 code units.
        assert!(name_length(&format!("{}a", "😀".repeat(12))).is_ok());
        assert!(name_length(&"😀".repeat(13)).is_err());
        assert!(name_length(&"é".repeat(25)).is_ok());
    }

    #[test]
    fn test_rule_error_codes() {
        assert_eq!(app_url("nope").unwrap_err().code, CODE_INVALID_URL);
        assert_eq!(email("nope").unwrap_err().code, CODE_INVALID_EMAIL);
        assert_eq!(name_length(&"n".repeat(26)).unwrap_err().code, CODE_MAX_LENGTH);
        assert_eq!(
            password_strength("weak").unwrap_err().code,
            CODE_PATTERN_MISMATCH
        );
        assert!(password_strength("Aa1!aaaa").is_ok());
    }
}
