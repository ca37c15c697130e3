//! SeaORM adapter for `training_registrations`.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::training_registrations as registrations;

pub mod dto;

pub use dto::{RegistrationCreate, RegistrationUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<registrations::Model>, sea_orm::DbErr> {
    registrations::Entity::find_by_id(id)
        .filter(registrations::Column::DeletedAt.is_null())
        .one(conn)
        .await
}

pub async fn list_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    skip: u64,
    limit: u64,
) -> Result<Vec<registrations::Model>, sea_orm::DbErr> {
    registrations::Entity::find()
        .filter(registrations::Column::UserId.eq(user_id))
        .filter(registrations::Column::DeletedAt.is_null())
        .order_by_asc(registrations::Column::Date)
        .order_by_asc(registrations::Column::Id)
        .offset(skip)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn create_registration<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RegistrationCreate,
) -> Result<registrations::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    registrations::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        training_id: Set(dto.training_id),
        date: Set(dto.date),
        completed: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(conn)
    .await
}

pub async fn update_registration<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: RegistrationUpdate,
) -> Result<registrations::Model, sea_orm::DbErr> {
    let existing = find_by_id(conn, id).await?.ok_or_else(|| {
        sea_orm::DbErr::RecordNotFound(format!("training_registrations.id={id}"))
    })?;

    let mut active = existing.into_active_model();
    if let Some(date) = dto.date {
        active.date = Set(date);
    }
    if let Some(completed) = dto.completed {
        active.completed = Set(completed);
    }
    active.updated_at = Set(OffsetDateTime::now_utc());

    active.update(conn).await
}

pub async fn soft_delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let result = registrations::Entity::update_many()
        .col_expr(registrations::Column::DeletedAt, Expr::value(now))
        .col_expr(registrations::Column::UpdatedAt, Expr::value(now))
        .filter(registrations::Column::Id.eq(id))
        .filter(registrations::Column::DeletedAt.is_null())
        .exec(conn)
        .await?;
    Ok(result.rows_affected == 1)
}
