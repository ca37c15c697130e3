use crate::error::AppError;
use crate::errors::ErrorCode;

/// Parse a `{id}` path segment; anything but a positive integer is "Invalid <entity> ID".
pub fn parse_id(raw: &str, entity: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::bad_request(ErrorCode::InvalidId, format!("Invalid {entity} ID")))
}
