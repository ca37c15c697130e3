//! SeaORM adapter for the `exercises` catalog.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::exercises;

pub mod dto;

pub use dto::{ExerciseCreate, ExerciseFilter, ExerciseUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<exercises::Model>, sea_orm::DbErr> {
    exercises::Entity::find_by_id(id)
        .filter(exercises::Column::DeletedAt.is_null())
        .one(conn)
        .await
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: Vec<i64>,
) -> Result<Vec<exercises::Model>, sea_orm::DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    exercises::Entity::find()
        .filter(exercises::Column::Id.is_in(ids))
        .filter(exercises::Column::DeletedAt.is_null())
        .all(conn)
        .await
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: ExerciseFilter,
    skip: u64,
    limit: u64,
) -> Result<Vec<exercises::Model>, sea_orm::DbErr> {
    let mut query = exercises::Entity::find().filter(exercises::Column::DeletedAt.is_null());
    if let Some(muscle_group) = filter.muscle_group {
        query = query.filter(exercises::Column::MuscleGroup.eq(muscle_group));
    }
    if let Some(difficulty) = filter.difficulty {
        query = query.filter(exercises::Column::Difficulty.eq(difficulty));
    }
    query
        .order_by_asc(exercises::Column::Id)
        .offset(skip)
        .limit(limit)
        .all(conn)
        .await
}

/// Distinct non-empty muscle groups, sorted ascending.
pub async fn muscle_groups<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<String>, sea_orm::DbErr> {
    exercises::Entity::find()
        .select_only()
        .column(exercises::Column::MuscleGroup)
        .distinct()
        .filter(exercises::Column::DeletedAt.is_null())
        .filter(exercises::Column::MuscleGroup.ne(""))
        .order_by_asc(exercises::Column::MuscleGroup)
        .into_tuple::<String>()
        .all(conn)
        .await
}

pub async fn create_exercise<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ExerciseCreate,
) -> Result<exercises::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    exercises::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        description: Set(dto.description),
        muscle_group: Set(dto.muscle_group),
        equipment: Set(dto.equipment),
        difficulty: Set(dto.difficulty),
        instructions: Set(dto.instructions),
        image_url: Set(dto.image_url),
        video_url: Set(dto.video_url),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(conn)
    .await
}

pub async fn update_exercise<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: ExerciseUpdate,
) -> Result<exercises::Model, sea_orm::DbErr> {
    let existing = find_by_id(conn, id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("exercises.id={id}")))?;

    let mut active = existing.into_active_model();
    if let Some(v) = dto.name {
        active.name = Set(v);
    }
    if let Some(v) = dto.description {
        active.description = Set(v);
    }
    if let Some(v) = dto.muscle_group {
        active.muscle_group = Set(v);
    }
    if let Some(v) = dto.equipment {
        active.equipment = Set(v);
    }
    if let Some(v) = dto.difficulty {
        active.difficulty = Set(v);
    }
    if let Some(v) = dto.instructions {
        active.instructions = Set(v);
    }
    if let Some(v) = dto.image_url {
        active.image_url = Set(v);
    }
    if let Some(v) = dto.video_url {
        active.video_url = Set(v);
    }
    active.updated_at = Set(OffsetDateTime::now_utc());

    active.update(conn).await
}

pub async fn soft_delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let result = exercises::Entity::update_many()
        .col_expr(exercises::Column::DeletedAt, Expr::value(now))
        .col_expr(exercises::Column::UpdatedAt, Expr::value(now))
        .filter(exercises::Column::Id.eq(id))
        .filter(exercises::Column::DeletedAt.is_null())
        .exec(conn)
        .await?;
    Ok(result.rows_affected == 1)
}
