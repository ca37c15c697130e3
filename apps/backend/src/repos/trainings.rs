//! Training repository functions, including the exercise join rows.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::trainings_sea as trainings_adapter;
use crate::entities::{training_exercises, trainings};
use crate::errors::domain::DomainError;

pub use trainings_adapter::{TrainingCreate, TrainingExerciseCreate, TrainingUpdate};

#[derive(Debug, Clone, PartialEq)]
pub struct Training {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub user_id: i64,
    pub professor_id: i64,
    pub repetitions: i32,
    pub sets: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<trainings::Model> for Training {
    fn from(m: trainings::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            user_id: m.user_id,
            professor_id: m.professor_id,
            repetitions: m.repetitions,
            sets: m.sets,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingExercise {
    pub id: i64,
    pub training_id: i64,
    pub exercise_id: i64,
    pub repetitions: i32,
    pub sets: i32,
    pub created_at: OffsetDateTime,
}

impl From<training_exercises::Model> for TrainingExercise {
    fn from(m: training_exercises::Model) -> Self {
        Self {
            id: m.id,
            training_id: m.training_id,
            exercise_id: m.exercise_id,
            repetitions: m.repetitions,
            sets: m.sets,
            created_at: m.created_at,
        }
    }
}

pub async fn find_training<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Training>, DomainError> {
    Ok(trainings_adapter::find_by_id(conn, id)
        .await?
        .map(Training::from))
}

pub async fn list_trainings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skip: u64,
    limit: u64,
) -> Result<Vec<Training>, DomainError> {
    let rows = trainings_adapter::list(conn, skip, limit).await?;
    Ok(rows.into_iter().map(Training::from).collect())
}

pub async fn create_training<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TrainingCreate,
) -> Result<Training, DomainError> {
    Ok(Training::from(
        trainings_adapter::create_training(conn, dto).await?,
    ))
}

pub async fn update_training<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: TrainingUpdate,
) -> Result<Training, DomainError> {
    Ok(Training::from(
        trainings_adapter::update_training(conn, id, dto).await?,
    ))
}

pub async fn soft_delete_training<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DomainError> {
    Ok(trainings_adapter::soft_delete(conn, id).await?)
}

pub async fn add_exercise<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TrainingExerciseCreate,
) -> Result<TrainingExercise, DomainError> {
    Ok(TrainingExercise::from(
        trainings_adapter::add_exercise(conn, dto).await?,
    ))
}

pub async fn exercises_of<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    training_id: i64,
) -> Result<Vec<TrainingExercise>, DomainError> {
    let rows = trainings_adapter::exercises_of(conn, training_id).await?;
    Ok(rows.into_iter().map(TrainingExercise::from).collect())
}
