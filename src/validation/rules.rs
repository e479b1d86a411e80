//! 常用验证规则

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

use super::ValidationResult;

/// Minimum password length accepted by the server.
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// 验证字段长度
///
/// Lengths are counted in characters. `max` of `None` means unbounded.
pub fn validate_length(value: &str, min: usize, max: Option<usize>) -> ValidationResult {
    if value.is_empty() {
        return ValidationResult::fail("This field is required");
    }

    let len = value.chars().count();
    if len < min {
        return ValidationResult::fail(format!("Minimum {} characters required", min));
    }

    if let Some(max) = max {
        if len > max {
            return ValidationResult::fail(format!("Maximum {} characters allowed", max));
        }
    }

    ValidationResult::ok()
}

/// Basic `local@domain.tld` shape check, not full RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::fail("Password is required");
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return ValidationResult::fail(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        ));
    }

    ValidationResult::ok()
}

pub fn is_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `validator` adapter around [`is_valid_email`].
pub fn email_rule(email: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        let mut err = ValidationError::new("invalid_email");
        err.message = Some("Please enter a valid email address".into());
        return Err(err);
    }
    Ok(())
}

/// `validator` adapter around [`validate_password`].
pub fn password_rule(password: &str) -> Result<(), ValidationError> {
    let result = validate_password(password);
    if !result.valid {
        let mut err = ValidationError::new("invalid_password");
        err.message = Some(result.message.into());
        return Err(err);
    }
    Ok(())
}
