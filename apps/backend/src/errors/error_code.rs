//! Error codes for the SmartForce API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the `code` field of
//! error responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authorization header absent
    UnauthorizedMissingHeader,
    /// Authorization header not of the form `Bearer <token>`
    UnauthorizedInvalidHeader,
    /// `Bearer ` with nothing after it
    UnauthorizedMissingToken,
    /// Token failed signature/structure/not-before checks
    UnauthorizedInvalidJwt,
    /// Token past its expiry
    UnauthorizedExpiredJwt,
    /// Token subject no longer exists
    UnauthorizedUserNotFound,
    /// Login failed (unknown email or wrong password, deliberately indistinguishable)
    InvalidCredentials,
    /// Authenticated but not the owner
    Forbidden,

    // Request Validation
    ValidationError,
    BadRequest,
    InvalidId,
    InvalidEmail,
    InvalidName,
    InvalidPassword,
    InvalidDifficulty,
    InvalidUrl,
    InvalidQuery,

    // Referenced entities absent
    UserNotFound,
    ProfessorNotFound,
    ExerciseNotFound,
    TrainingNotFound,
    RegistrationNotFound,
    NotFound,

    // Conflicts
    UniqueEmail,
    Conflict,

    /// Request budget for the window is spent
    RateLimited,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    HashingFailed,
    TokenSigningFailed,
    InternalError,
    ConfigError,
}

impl ErrorCode {
    /// Every code, for uniqueness checks.
    pub const ALL: &'static [ErrorCode] = &[
        Self::UnauthorizedMissingHeader,
        Self::UnauthorizedInvalidHeader,
        Self::UnauthorizedMissingToken,
        Self::UnauthorizedInvalidJwt,
        Self::UnauthorizedExpiredJwt,
        Self::UnauthorizedUserNotFound,
        Self::InvalidCredentials,
        Self::Forbidden,
        Self::ValidationError,
        Self::BadRequest,
        Self::InvalidId,
        Self::InvalidEmail,
        Self::InvalidName,
        Self::InvalidPassword,
        Self::InvalidDifficulty,
        Self::InvalidUrl,
        Self::InvalidQuery,
        Self::UserNotFound,
        Self::ProfessorNotFound,
        Self::ExerciseNotFound,
        Self::TrainingNotFound,
        Self::RegistrationNotFound,
        Self::NotFound,
        Self::UniqueEmail,
        Self::Conflict,
        Self::RateLimited,
        Self::DbError,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::HashingFailed,
        Self::TokenSigningFailed,
        Self::InternalError,
        Self::ConfigError,
    ];

    /// The canonical string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingHeader => "UNAUTHORIZED_MISSING_HEADER",
            Self::UnauthorizedInvalidHeader => "UNAUTHORIZED_INVALID_HEADER",
            Self::UnauthorizedMissingToken => "UNAUTHORIZED_MISSING_TOKEN",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::UnauthorizedUserNotFound => "UNAUTHORIZED_USER_NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidId => "INVALID_ID",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidName => "INVALID_NAME",
            Self::InvalidPassword => "INVALID_PASSWORD",
            Self::InvalidDifficulty => "INVALID_DIFFICULTY",
            Self::InvalidUrl => "INVALID_URL",
            Self::InvalidQuery => "INVALID_QUERY",

            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ProfessorNotFound => "PROFESSOR_NOT_FOUND",
            Self::ExerciseNotFound => "EXERCISE_NOT_FOUND",
            Self::TrainingNotFound => "TRAINING_NOT_FOUND",
            Self::RegistrationNotFound => "REGISTRATION_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::Conflict => "CONFLICT",
            Self::RateLimited => "RATE_LIMITED",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::HashingFailed => "HASHING_FAILED",
            Self::TokenSigningFailed => "TOKEN_SIGNING_FAILED",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
