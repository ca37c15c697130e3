use tracing::{error, info};

use crate::auth::ownership::ensure_owner;
use crate::auth::password::hash_password_blocking;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::extractors::Pagination;
use crate::logging::pii::Redacted;
use crate::repos::users::{self, User, UserCreate, UserUpdate};
use crate::state::app_state::AppState;

fn duplicate_email() -> AppError {
    AppError::conflict(ErrorCode::UniqueEmail, "User with this email already exists")
}

fn email_taken() -> AppError {
    AppError::conflict(ErrorCode::UniqueEmail, "Email already taken")
}

fn user_not_found() -> AppError {
    AppError::not_found(ErrorCode::UserNotFound, "User not found")
}

/// Hash `password` and insert a new account, 409 when the email is in use.
///
/// Shared by registration and the authenticated `POST /users`.
pub async fn create_account(
    state: &AppState,
    email: String,
    name: String,
    password: String,
) -> Result<User, AppError> {
    let password_hash = hash_password_blocking(password, state.security.bcrypt_cost)
        .await
        .map_err(|e| {
            error!(error = %e, "password hashing failed");
            AppError::from(e)
        })?;

    let user = with_txn(state, |txn| {
        Box::pin(async move {
            if users::find_user_by_email(txn, &email).await?.is_some() {
                return Err(duplicate_email());
            }
            // A soft-deleted row still holds its email in the unique index
            users::create_user(txn, UserCreate::new(email, name, password_hash))
                .await
                .map_err(|e| match e {
                    e if e.is_unique_email() => duplicate_email(),
                    other => AppError::from(other),
                })
        })
    })
    .await?;

    info!(user_id = user.id, email = %Redacted(&user.email), "user created");
    Ok(user)
}

pub async fn list_users(state: &AppState, page: Pagination) -> Result<Vec<User>, AppError> {
    let db = require_db(state)?;
    Ok(users::list_users(db, page.skip, page.limit).await?)
}

pub async fn get_user(state: &AppState, id: i64) -> Result<User, AppError> {
    let db = require_db(state)?;
    users::find_user_by_id(db, id)
        .await?
        .ok_or_else(user_not_found)
}

/// Owner-only partial update. A new email must not belong to another active account.
pub async fn update_user(
    state: &AppState,
    subject_id: i64,
    id: i64,
    dto: UserUpdate,
) -> Result<User, AppError> {
    ensure_owner(subject_id, id, "You can only update your own profile")?;

    let db = require_db(state)?;
    let current = users::find_user_by_id(db, id)
        .await?
        .ok_or_else(user_not_found)?;

    if let Some(email) = dto.email.as_deref() {
        if email != current.email {
            if let Some(other) = users::find_user_by_email(db, email).await? {
                if other.id != id {
                    return Err(email_taken());
                }
            }
        }
    }

    users::update_user(db, id, dto).await.map_err(|e| match e {
        e if e.is_unique_email() => email_taken(),
        DomainError::NotFound(..) => user_not_found(),
        other => AppError::from(other),
    })
}

pub async fn delete_user(state: &AppState, subject_id: i64, id: i64) -> Result<(), AppError> {
    ensure_owner(subject_id, id, "You can only delete your own profile")?;

    let db = require_db(state)?;
    if !users::soft_delete_user(db, id).await? {
        return Err(user_not_found());
    }
    info!(user_id = id, "user soft-deleted");
    Ok(())
}
