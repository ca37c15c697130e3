//! SeaORM adapter for the `professors` table.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::professors;

pub mod dto;

pub use dto::{ProfessorCreate, ProfessorUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<professors::Model>, sea_orm::DbErr> {
    professors::Entity::find_by_id(id)
        .filter(professors::Column::DeletedAt.is_null())
        .one(conn)
        .await
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skip: u64,
    limit: u64,
) -> Result<Vec<professors::Model>, sea_orm::DbErr> {
    professors::Entity::find()
        .filter(professors::Column::DeletedAt.is_null())
        .order_by_asc(professors::Column::Id)
        .offset(skip)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn create_professor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProfessorCreate,
) -> Result<professors::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    professors::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        email: Set(dto.email),
        phone: Set(dto.phone),
        bio: Set(dto.bio),
        specialties: Set(dto.specialties),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    }
    .insert(conn)
    .await
}

pub async fn update_professor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: ProfessorUpdate,
) -> Result<professors::Model, sea_orm::DbErr> {
    let existing = find_by_id(conn, id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("professors.id={id}")))?;

    let mut active = existing.into_active_model();
    if let Some(name) = dto.name {
        active.name = Set(name);
    }
    if let Some(email) = dto.email {
        active.email = Set(email);
    }
    if let Some(phone) = dto.phone {
        active.phone = Set(phone);
    }
    if let Some(bio) = dto.bio {
        active.bio = Set(bio);
    }
    if let Some(specialties) = dto.specialties {
        active.specialties = Set(specialties);
    }
    active.updated_at = Set(OffsetDateTime::now_utc());

    active.update(conn).await
}

pub async fn soft_delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();
    let result = professors::Entity::update_many()
        .col_expr(professors::Column::DeletedAt, Expr::value(now))
        .col_expr(professors::Column::UpdatedAt, Expr::value(now))
        .filter(professors::Column::Id.eq(id))
        .filter(professors::Column::DeletedAt.is_null())
        .exec(conn)
        .await?;
    Ok(result.rows_affected == 1)
}
