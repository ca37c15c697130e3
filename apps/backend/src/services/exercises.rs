use tracing::info;

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::extractors::Pagination;
use crate::repos::exercises::{self, Exercise, ExerciseCreate, ExerciseFilter, ExerciseUpdate};
use crate::state::app_state::AppState;

fn exercise_not_found() -> AppError {
    AppError::not_found(ErrorCode::ExerciseNotFound, "Exercise not found")
}

pub async fn list_exercises(
    state: &AppState,
    filter: ExerciseFilter,
    page: Pagination,
) -> Result<Vec<Exercise>, AppError> {
    let db = require_db(state)?;
    Ok(exercises::list_exercises(db, filter, page.skip, page.limit).await?)
}

pub async fn muscle_groups(state: &AppState) -> Result<Vec<String>, AppError> {
    let db = require_db(state)?;
    Ok(exercises::muscle_groups(db).await?)
}

pub async fn get_exercise(state: &AppState, id: i64) -> Result<Exercise, AppError> {
    let db = require_db(state)?;
    exercises::find_exercise(db, id)
        .await?
        .ok_or_else(exercise_not_found)
}

pub async fn create_exercise(state: &AppState, dto: ExerciseCreate) -> Result<Exercise, AppError> {
    let db = require_db(state)?;
    let exercise = exercises::create_exercise(db, dto).await?;
    info!(exercise_id = exercise.id, "exercise created");
    Ok(exercise)
}

pub async fn update_exercise(
    state: &AppState,
    id: i64,
    dto: ExerciseUpdate,
) -> Result<Exercise, AppError> {
    let db = require_db(state)?;
    exercises::update_exercise(db, id, dto)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(..) => exercise_not_found(),
            other => AppError::from(other),
        })
}

pub async fn delete_exercise(state: &AppState, id: i64) -> Result<(), AppError> {
    let db = require_db(state)?;
    if !exercises::soft_delete_exercise(db, id).await? {
        return Err(exercise_not_found());
    }
    info!(exercise_id = id, "exercise soft-deleted");
    Ok(())
}
