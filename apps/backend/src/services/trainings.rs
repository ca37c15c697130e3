//! Trainings and their exercise lists. Only the owner may change a training.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::auth::ownership::ensure_owner;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::extractors::Pagination;
use crate::repos::exercises::{self, Exercise};
use crate::repos::professors;
use crate::repos::trainings::{
    self, Training, TrainingCreate, TrainingExercise, TrainingExerciseCreate, TrainingUpdate,
};
use crate::state::app_state::AppState;

/// One join row with the catalog entry it points at; `None` once that entry is deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExerciseDetail {
    pub link: TrainingExercise,
    pub exercise: Option<Exercise>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingDetail {
    pub training: Training,
    pub exercises: Vec<TrainingExerciseDetail>,
}

fn training_not_found() -> AppError {
    AppError::not_found(ErrorCode::TrainingNotFound, "Training not found")
}

// Referenced from a request body, so a bad id is the client's input error
fn professor_missing() -> AppError {
    AppError::bad_request(ErrorCode::ProfessorNotFound, "Professor not found")
}

fn exercise_missing() -> AppError {
    AppError::bad_request(ErrorCode::ExerciseNotFound, "Exercise not found")
}

async fn load_detail<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    training: Training,
) -> Result<TrainingDetail, AppError> {
    let links = trainings::exercises_of(conn, training.id).await?;
    let ids = links.iter().map(|l| l.exercise_id).collect();
    let catalog: HashMap<i64, Exercise> = exercises::find_exercises(conn, ids)
        .await?
        .into_iter()
        .map(|e| (e.id, e))
        .collect();

    let exercises = links
        .into_iter()
        .map(|link| {
            let exercise = catalog.get(&link.exercise_id).cloned();
            TrainingExerciseDetail { link, exercise }
        })
        .collect();

    Ok(TrainingDetail {
        training,
        exercises,
    })
}

async fn ensure_professor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    professor_id: i64,
) -> Result<(), AppError> {
    match professors::find_professor(conn, professor_id).await? {
        Some(_) => Ok(()),
        None => Err(professor_missing()),
    }
}

pub async fn list_trainings(state: &AppState, page: Pagination) -> Result<Vec<Training>, AppError> {
    let db = require_db(state)?;
    Ok(trainings::list_trainings(db, page.skip, page.limit).await?)
}

pub async fn get_training(state: &AppState, id: i64) -> Result<TrainingDetail, AppError> {
    let db = require_db(state)?;
    let training = trainings::find_training(db, id)
        .await?
        .ok_or_else(training_not_found)?;
    load_detail(db, training).await
}

/// `dto.user_id` is the caller; the route never takes it from the body.
pub async fn create_training(
    state: &AppState,
    dto: TrainingCreate,
) -> Result<TrainingDetail, AppError> {
    let db = require_db(state)?;
    ensure_professor(db, dto.professor_id).await?;

    let training = trainings::create_training(db, dto).await?;
    info!(
        training_id = training.id,
        user_id = training.user_id,
        "training created"
    );
    Ok(TrainingDetail {
        training,
        exercises: Vec::new(),
    })
}

pub async fn update_training(
    state: &AppState,
    subject_id: i64,
    id: i64,
    dto: TrainingUpdate,
) -> Result<TrainingDetail, AppError> {
    let db = require_db(state)?;
    let existing = trainings::find_training(db, id)
        .await?
        .ok_or_else(training_not_found)?;
    ensure_owner(
        subject_id,
        existing.user_id,
        "You can only update your own trainings",
    )?;

    if let Some(professor_id) = dto.professor_id {
        ensure_professor(db, professor_id).await?;
    }

    let training = trainings::update_training(db, id, dto)
        .await
        .map_err(|e| match e {
            DomainError::NotFound(..) => training_not_found(),
            other => AppError::from(other),
        })?;
    load_detail(db, training).await
}

pub async fn delete_training(state: &AppState, subject_id: i64, id: i64) -> Result<(), AppError> {
    let db = require_db(state)?;
    let existing = trainings::find_training(db, id)
        .await?
        .ok_or_else(training_not_found)?;
    ensure_owner(
        subject_id,
        existing.user_id,
        "You can only delete your own trainings",
    )?;

    if !trainings::soft_delete_training(db, id).await? {
        return Err(training_not_found());
    }
    info!(training_id = id, "training soft-deleted");
    Ok(())
}

/// Attach a catalog exercise to an owned training; checks and insert share one transaction.
pub async fn add_exercise(
    state: &AppState,
    subject_id: i64,
    dto: TrainingExerciseCreate,
) -> Result<TrainingExerciseDetail, AppError> {
    with_txn(state, |txn| {
        Box::pin(async move {
            let training = trainings::find_training(txn, dto.training_id)
                .await?
                .ok_or_else(training_not_found)?;
            ensure_owner(
                subject_id,
                training.user_id,
                "You can only modify your own trainings",
            )?;

            let exercise = exercises::find_exercise(txn, dto.exercise_id)
                .await?
                .ok_or_else(exercise_missing)?;

            let link = trainings::add_exercise(txn, dto).await?;
            info!(
                training_id = link.training_id,
                exercise_id = link.exercise_id,
                "exercise added to training"
            );
            Ok(TrainingExerciseDetail {
                link,
                exercise: Some(exercise),
            })
        })
    })
    .await
}
