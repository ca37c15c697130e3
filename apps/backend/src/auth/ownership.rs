//! The single ownership rule for user-owned resources.

use crate::logging::security;
use crate::AppError;

pub fn is_owner(subject_id: i64, owner_id: i64) -> bool {
    subject_id == owner_id
}

/// `Forbidden` with `denial` as the client message unless `subject_id` owns the resource.
pub fn ensure_owner(subject_id: i64, owner_id: i64, denial: &str) -> Result<(), AppError> {
    if is_owner(subject_id, owner_id) {
        Ok(())
    } else {
        security::ownership_denied(subject_id, owner_id, denial);
        Err(AppError::forbidden(denial))
    }
}
