use actix_web::http::header;
use actix_web::HttpRequest;

use crate::errors::ErrorCode;
use crate::AppError;

const BEARER_PREFIX: &str = "Bearer ";

/// Why an `Authorization` header did not yield a bearer token, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearerError {
    MissingHeader,
    InvalidFormat,
    EmptyToken,
}

impl BearerError {
    pub fn reason(&self) -> &'static str {
        match self {
            BearerError::MissingHeader => "missing_header",
            BearerError::InvalidFormat => "invalid_format",
            BearerError::EmptyToken => "empty_token",
        }
    }
}

impl From<BearerError> for AppError {
    fn from(e: BearerError) -> Self {
        match e {
            BearerError::MissingHeader => AppError::unauthorized(
                ErrorCode::UnauthorizedMissingHeader,
                "Authorization header required",
            ),
            BearerError::InvalidFormat => AppError::unauthorized(
                ErrorCode::UnauthorizedInvalidHeader,
                "Invalid authorization header format",
            ),
            BearerError::EmptyToken => {
                AppError::unauthorized(ErrorCode::UnauthorizedMissingToken, "Token required")
            }
        }
    }
}

/// Parse a header value of the form `Bearer <token>`.
///
/// The scheme is case-sensitive and followed by exactly one space. A bare
/// `Bearer` (trailing space stripped in transit) counts as an empty token.
pub fn parse_bearer(value: &str) -> Result<&str, BearerError> {
    if value == BEARER_PREFIX.trim_end() {
        return Err(BearerError::EmptyToken);
    }
    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(BearerError::InvalidFormat)?;
    if token.trim().is_empty() {
        return Err(BearerError::EmptyToken);
    }
    if token.chars().any(char::is_whitespace) {
        return Err(BearerError::InvalidFormat);
    }
    Ok(token)
}

/// Bearer token from the request headers; never touches the database.
pub fn bearer_from_request(req: &HttpRequest) -> Result<String, BearerError> {
    let raw = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::MissingHeader)?;
    // Non-visible-ASCII header bytes are a format error
    let value = raw.to_str().map_err(|_| BearerError::InvalidFormat)?;
    parse_bearer(value).map(str::to_string)
}
