//! SeaORM adapter for `trainings` and their `training_exercises` join rows.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::{training_exercises, trainings};

pub mod dto;

pub use dto::{TrainingCreate, TrainingExerciseCreate, TrainingUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<trainings::Model>, sea_orm::DbErr> {
    trainings::Entity::find_by_id(id)
        .filter(trainings::Column::DeletedAt.is_null())
        .one(conn)
        .await
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skip: u64,
    limit: u64,
) -> Result<Vec<trainings::Model>, sea_orm::DbErr> {
    trainings::Entity::find()
        .filter(trainings::Column::DeletedAt.is_null())
        .order_by_asc(trainings::Column::Id)
        .offset(skip)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn create_training<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TrainingCreate,
) -> Result<trainings::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    trainings::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        description: Set(dto.description),
        user_id: Set(dto.user_id),
        professor_id: Set(dto.professor_id),
        repetitions: Set(dto.repetitions),
        sets: Set(dto.sets),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(conn)
    .await
}

pub async fn update_training<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: TrainingUpdate,
) -> Result<trainings::Model, sea_orm::DbErr> {
    let existing = find_by_id(conn, id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("trainings.id={id}")))?;

    let mut active = existing.into_active_model();
    if let Some(v) = dto.name {
        active.name = Set(v);
    }
    if let Some(v) = dto.description {
        active.description = Set(v);
    }
    if let Some(v) = dto.professor_id {
        active.professor_id = Set(v);
    }
    if let Some(v) = dto.repetitions {
        active.repetitions = Set(v);
    }
    if let Some(v) = dto.sets {
        active.sets = Set(v);
    }
    active.updated_at = Set(OffsetDateTime::now_utc());

    active.update(conn).await
}

pub async fn soft_delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let result = trainings::Entity::update_many()
        .col_expr(trainings::Column::DeletedAt, Expr::value(now))
        .col_expr(trainings::Column::UpdatedAt, Expr::value(now))
        .filter(trainings::Column::Id.eq(id))
        .filter(trainings::Column::DeletedAt.is_null())
        .exec(conn)
        .await?;
    Ok(result.rows_affected == 1)
}

pub async fn add_exercise<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TrainingExerciseCreate,
) -> Result<training_exercises::Model, sea_orm::DbErr> {
    training_exercises::ActiveModel {
        id: NotSet,
        training_id: Set(dto.training_id),
        exercise_id: Set(dto.exercise_id),
        repetitions: Set(dto.repetitions),
        sets: Set(dto.sets),
        created_at: Set(OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

/// Join rows of one training in insertion order.
pub async fn exercises_of<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    training_id: i64,
) -> Result<Vec<training_exercises::Model>, sea_orm::DbErr> {
    training_exercises::Entity::find()
        .filter(training_exercises::Column::TrainingId.eq(training_id))
        .order_by_asc(training_exercises::Column::Id)
        .all(conn)
        .await
}
