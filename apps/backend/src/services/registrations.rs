use time::OffsetDateTime;
use tracing::info;

use crate::auth::ownership::ensure_owner;
use crate::db::require_db;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::extractors::Pagination;
use crate::repos::registrations::{
    self, Registration, RegistrationCreate, RegistrationUpdate,
};
use crate::repos::trainings;
use crate::state::app_state::AppState;

fn registration_not_found() -> AppError {
    AppError::not_found(ErrorCode::RegistrationNotFound, "Registration not found")
}

/// Registrations belong to their user; nobody lists anyone else's.
pub async fn list_mine(
    state: &AppState,
    user_id: i64,
    page: Pagination,
) -> Result<Vec<Registration>, AppError> {
    let db = require_db(state)?;
    Ok(registrations::list_for_user(db, user_id, page.skip, page.limit).await?)
}

/// Sign `user_id` up for a training; `date` defaults to now.
pub async fn register_for_training(
    state: &AppState,
    user_id: i64,
    training_id: i64,
    date: Option<OffsetDateTime>,
) -> Result<Registration, AppError> {
    let db = require_db(state)?;
    if trainings::find_training(db, training_id).await?.is_none() {
        return Err(AppError::bad_request(
            ErrorCode::TrainingNotFound,
            "Training not found",
        ));
    }

    let registration = registrations::create_registration(
        db,
        RegistrationCreate {
            user_id,
            training_id,
            date: date.unwrap_or_else(OffsetDateTime::now_utc),
        },
    )
    .await?;
    info!(
        registration_id = registration.id,
        user_id, training_id, "training registration created"
    );
    Ok(registration)
}

pub async fn update_registration(
    state: &AppState,
    subject_id: i64,
    id: i64,
    dto: RegistrationUpdate,
) -> Result<Registration, AppError> {
    let db = require_db(state)?;
    let existing = registrations::find_registration(db, id)
        .await?
        .ok_or_else(registration_not_found)?;
    ensure_owner(
        subject_id,
        existing.user_id,
        "You can only update your own registrations",
    )?;

    registrations::update_registration(db, id, dto)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(..) => registration_not_found(),
            other => AppError::from(other),
        })
}

pub async fn delete_registration(
    state: &AppState,
    subject_id: i64,
    id: i64,
) -> Result<(), AppError> {
    let db = require_db(state)?;
    let existing = registrations::find_registration(db, id)
        .await?
        .ok_or_else(registration_not_found)?;
    ensure_owner(
        subject_id,
        existing.user_id,
        "You can only delete your own registrations",
    )?;

    if !registrations::soft_delete_registration(db, id).await? {
        return Err(registration_not_found());
    }
    info!(registration_id = id, "training registration soft-deleted");
    Ok(())
}
