//! bcrypt password hashing. The hash string is self-describing (`$2b$<cost>$<salt+hash>`).

use thiserror::Error;

use crate::errors::ErrorCode;
use crate::AppError;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
    #[error("hashing task aborted")]
    TaskAborted,
}

impl From<PasswordError> for AppError {
    fn from(_: PasswordError) -> Self {
        // The bcrypt detail stays in logs at the call site, never in the body
        AppError::internal(ErrorCode::HashingFailed, "Password processing failed")
    }
}

pub fn hash_password(password: &str, cost: u32) -> Result<String, PasswordError> {
    Ok(bcrypt::hash(password, cost)?)
}

/// `Ok(false)` on mismatch; `Err` only when `hash` is not a bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    Ok(bcrypt::verify(password, hash)?)
}

/// [`hash_password`] on the blocking pool.
pub async fn hash_password_blocking(password: String, cost: u32) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .map_err(|_| PasswordError::TaskAborted)?
}

/// [`verify_password`] on the blocking pool.
pub async fn verify_password_blocking(password: String, hash: String) -> Result<bool, PasswordError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|_| PasswordError::TaskAborted)?
}
