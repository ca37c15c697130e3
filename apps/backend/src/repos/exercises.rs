//! Exercise catalog repository functions.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::exercises_sea as exercises_adapter;
use crate::entities::exercises;
use crate::errors::domain::DomainError;

pub use exercises_adapter::{ExerciseCreate, ExerciseFilter, ExerciseUpdate};

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub muscle_group: String,
    pub equipment: String,
    pub difficulty: String,
    pub instructions: String,
    pub image_url: String,
    pub video_url: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<exercises::Model> for Exercise {
    fn from(m: exercises::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            muscle_group: m.muscle_group,
            equipment: m.equipment,
            difficulty: m.difficulty,
            instructions: m.instructions,
            image_url: m.image_url,
            video_url: m.video_url,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub async fn find_exercise<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Exercise>, DomainError> {
    Ok(exercises_adapter::find_by_id(conn, id)
        .await?
        .map(Exercise::from))
}

pub async fn find_exercises<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: Vec<i64>,
) -> Result<Vec<Exercise>, DomainError> {
    let rows = exercises_adapter::find_by_ids(conn, ids).await?;
    Ok(rows.into_iter().map(Exercise::from).collect())
}

pub async fn list_exercises<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: ExerciseFilter,
    skip: u64,
    limit: u64,
) -> Result<Vec<Exercise>, DomainError> {
    let rows = exercises_adapter::list(conn, filter, skip, limit).await?;
    Ok(rows.into_iter().map(Exercise::from).collect())
}

pub async fn muscle_groups<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<String>, DomainError> {
    Ok(exercises_adapter::muscle_groups(conn).await?)
}

pub async fn create_exercise<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ExerciseCreate,
) -> Result<Exercise, DomainError> {
    Ok(Exercise::from(
        exercises_adapter::create_exercise(conn, dto).await?,
    ))
}

pub async fn update_exercise<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: ExerciseUpdate,
) -> Result<Exercise, DomainError> {
    Ok(Exercise::from(
        exercises_adapter::update_exercise(conn, id, dto).await?,
    ))
}

pub async fn soft_delete_exercise<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DomainError> {
    Ok(exercises_adapter::soft_delete(conn, id).await?)
}
