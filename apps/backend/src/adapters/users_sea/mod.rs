//! SeaORM adapter for the `users` table. Every read skips soft-deleted rows.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::users;

pub mod dto;

pub use dto::{UserCreate, UserUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(id)
        .filter(users::Column::DeletedAt.is_null())
        .one(conn)
        .await
}

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .filter(users::Column::DeletedAt.is_null())
        .one(conn)
        .await
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skip: u64,
    limit: u64,
) -> Result<Vec<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::DeletedAt.is_null())
        .order_by_asc(users::Column::Id)
        .offset(skip)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let user_active = users::ActiveModel {
        id: NotSet,
        email: Set(dto.email),
        name: Set(dto.name),
        password_hash: Set(dto.password_hash),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    };

    user_active.insert(conn).await
}

pub async fn update_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: UserUpdate,
) -> Result<users::Model, sea_orm::DbErr> {
    let existing = find_by_id(conn, id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("users.id={id}")))?;

    let mut user_active = existing.into_active_model();
    if let Some(email) = dto.email {
        user_active.email = Set(email);
    }
    if let Some(name) = dto.name {
        user_active.name = Set(name);
    }
    user_active.updated_at = Set(OffsetDateTime::now_utc());

    user_active.update(conn).await
}

/// Marks the row deleted. Returns whether an active row was affected.
pub async fn soft_delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let result = users::Entity::update_many()
        .col_expr(users::Column::DeletedAt, Expr::value(now))
        .col_expr(users::Column::UpdatedAt, Expr::value(now))
        .filter(users::Column::Id.eq(id))
        .filter(users::Column::DeletedAt.is_null())
        .exec(conn)
        .await?;
    Ok(result.rows_affected == 1)
}
