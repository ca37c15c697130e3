//! User repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::users_sea as users_adapter;
use crate::entities::users;
use crate::errors::domain::DomainError;

pub use users_adapter::{UserCreate, UserUpdate};

/// User domain model. Carries the hash for login; response types drop it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<users::Model> for User {
    fn from(m: users::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
            name: m.name,
            password_hash: m.password_hash,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub async fn find_user_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<User>, DomainError> {
    Ok(users_adapter::find_by_id(conn, id).await?.map(User::from))
}

pub async fn find_user_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<User>, DomainError> {
    Ok(users_adapter::find_by_email(conn, email)
        .await?
        .map(User::from))
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skip: u64,
    limit: u64,
) -> Result<Vec<User>, DomainError> {
    let rows = users_adapter::list(conn, skip, limit).await?;
    Ok(rows.into_iter().map(User::from).collect())
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<User, DomainError> {
    Ok(User::from(users_adapter::create_user(conn, dto).await?))
}

pub async fn update_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: UserUpdate,
) -> Result<User, DomainError> {
    Ok(User::from(users_adapter::update_user(conn, id, dto).await?))
}

pub async fn soft_delete_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DomainError> {
    Ok(users_adapter::soft_delete(conn, id).await?)
}
