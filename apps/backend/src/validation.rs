//! Field rules for request bodies. Request types implement [`Validate`] and
//! `ValidatedJson` runs it after deserializing.

use lazy_regex::regex_is_match;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub const NAME_MAX_CHARS: usize = 100;
pub const PASSWORD_MIN_BYTES: usize = 6;
/// bcrypt ignores everything past 72 bytes
pub const PASSWORD_MAX_BYTES: usize = 72;
pub const DIFFICULTIES: [&str; 3] = ["beginner", "intermediate", "advanced"];

pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

pub fn validate_email(email: &str) -> Result<(), AppError> {
    if regex_is_match!(
        r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
        email
    ) {
        Ok(())
    } else {
        Err(AppError::invalid(
            ErrorCode::InvalidEmail,
            "Invalid email address",
        ))
    }
}

/// `field` must be non-blank and at most 100 characters after trimming.
pub fn validate_name(field: &str, value: &str) -> Result<(), AppError> {
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(AppError::invalid(
            ErrorCode::InvalidName,
            format!("{field} is required"),
        ));
    }
    if len > NAME_MAX_CHARS {
        return Err(AppError::invalid(
            ErrorCode::InvalidName,
            format!("{field} must be at most {NAME_MAX_CHARS} characters"),
        ));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    let len = password.len();
    if len < PASSWORD_MIN_BYTES {
        return Err(AppError::invalid(
            ErrorCode::InvalidPassword,
            format!("Password must be at least {PASSWORD_MIN_BYTES} characters"),
        ));
    }
    if len > PASSWORD_MAX_BYTES {
        return Err(AppError::invalid(
            ErrorCode::InvalidPassword,
            format!("Password must be at most {PASSWORD_MAX_BYTES} bytes"),
        ));
    }
    Ok(())
}

/// Empty means "unspecified".
pub fn validate_difficulty(difficulty: &str) -> Result<(), AppError> {
    if difficulty.is_empty() || DIFFICULTIES.contains(&difficulty) {
        Ok(())
    } else {
        Err(AppError::invalid(
            ErrorCode::InvalidDifficulty,
            "Difficulty must be one of beginner, intermediate, advanced",
        ))
    }
}

/// Empty means "no URL"; otherwise an absolute http(s) URL with a host.
pub fn validate_url(field: &str, url: &str) -> Result<(), AppError> {
    if url.is_empty() || regex_is_match!(r"^https?://[^\s/?#]+(?:[/?#]\S*)?$"i, url) {
        Ok(())
    } else {
        Err(AppError::invalid(
            ErrorCode::InvalidUrl,
            format!("{field} must be an http(s) URL"),
        ))
    }
}

pub fn validate_reference_id(field: &str, id: i64) -> Result<(), AppError> {
    if id > 0 {
        Ok(())
    } else {
        Err(AppError::invalid(
            ErrorCode::InvalidId,
            format!("{field} must be a positive integer"),
        ))
    }
}

pub fn validate_non_negative(field: &str, value: i32) -> Result<(), AppError> {
    if value >= 0 {
        Ok(())
    } else {
        Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!("{field} must not be negative"),
        ))
    }
}

pub fn validate_required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!("{field} is required"),
        ))
    } else {
        Ok(())
    }
}
