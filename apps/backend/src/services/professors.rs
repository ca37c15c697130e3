use tracing::info;

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::extractors::Pagination;
use crate::repos::professors::{self, Professor, ProfessorCreate, ProfessorUpdate};
use crate::state::app_state::AppState;

fn professor_not_found() -> AppError {
    AppError::not_found(ErrorCode::ProfessorNotFound, "Professor not found")
}

pub async fn list_professors(state: &AppState, page: Pagination) -> Result<Vec<Professor>, AppError> {
    let db = require_db(state)?;
    Ok(professors::list_professors(db, page.skip, page.limit).await?)
}

pub async fn get_professor(state: &AppState, id: i64) -> Result<Professor, AppError> {
    let db = require_db(state)?;
    professors::find_professor(db, id)
        .await?
        .ok_or_else(professor_not_found)
}

pub async fn create_professor(state: &AppState, dto: ProfessorCreate) -> Result<Professor, AppError> {
    let db = require_db(state)?;
    // The unique index reports duplicates, including soft-deleted rows
    let professor = professors::create_professor(db, dto).await?;
    info!(professor_id = professor.id, "professor created");
    Ok(professor)
}

pub async fn update_professor(
    state: &AppState,
    id: i64,
    dto: ProfessorUpdate,
) -> Result<Professor, AppError> {
    let db = require_db(state)?;
    professors::update_professor(db, id, dto)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(..) => professor_not_found(),
            e if e.is_unique_email() => {
                AppError::conflict(ErrorCode::UniqueEmail, "Email already taken")
            }
            other => AppError::from(other),
        })
}

pub async fn delete_professor(state: &AppState, id: i64) -> Result<(), AppError> {
    let db = require_db(state)?;
    if !professors::soft_delete_professor(db, id).await? {
        return Err(professor_not_found());
    }
    info!(professor_id = id, "professor soft-deleted");
    Ok(())
}
