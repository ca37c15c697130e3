//! Professor repository functions.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::professors_sea as professors_adapter;
use crate::entities::professors;
use crate::errors::domain::DomainError;

pub use professors_adapter::{ProfessorCreate, ProfessorUpdate};

#[derive(Debug, Clone, PartialEq)]
pub struct Professor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub specialties: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<professors::Model> for Professor {
    fn from(m: professors::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            bio: m.bio,
            specialties: m.specialties,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub async fn find_professor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Professor>, DomainError> {
    Ok(professors_adapter::find_by_id(conn, id)
        .await?
        .map(Professor::from))
}

pub async fn list_professors<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skip: u64,
    limit: u64,
) -> Result<Vec<Professor>, DomainError> {
    let rows = professors_adapter::list(conn, skip, limit).await?;
    Ok(rows.into_iter().map(Professor::from).collect())
}

pub async fn create_professor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProfessorCreate,
) -> Result<Professor, DomainError> {
    Ok(Professor::from(
        professors_adapter::create_professor(conn, dto).await?,
    ))
}

pub async fn update_professor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: ProfessorUpdate,
) -> Result<Professor, DomainError> {
    Ok(Professor::from(
        professors_adapter::update_professor(conn, id, dto).await?,
    ))
}

pub async fn soft_delete_professor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DomainError> {
    Ok(professors_adapter::soft_delete(conn, id).await?)
}
