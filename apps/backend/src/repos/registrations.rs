//! Training registration repository functions.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;

use crate::adapters::registrations_sea as registrations_adapter;
use crate::entities::training_registrations;
use crate::errors::domain::DomainError;

pub use registrations_adapter::{RegistrationCreate, RegistrationUpdate};

#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub id: i64,
    pub user_id: i64,
    pub training_id: i64,
    pub date: OffsetDateTime,
    pub completed: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<training_registrations::Model> for Registration {
    fn from(m: training_registrations::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            training_id: m.training_id,
            date: m.date,
            completed: m.completed,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub async fn find_registration<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<Option<Registration>, DomainError> {
    Ok(registrations_adapter::find_by_id(conn, id)
        .await?
        .map(Registration::from))
}

pub async fn list_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    skip: u64,
    limit: u64,
) -> Result<Vec<Registration>, DomainError> {
    let rows = registrations_adapter::list_for_user(conn, user_id, skip, limit).await?;
    Ok(rows.into_iter().map(Registration::from).collect())
}

pub async fn create_registration<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: RegistrationCreate,
) -> Result<Registration, DomainError> {
    Ok(Registration::from(
        registrations_adapter::create_registration(conn, dto).await?,
    ))
}

pub async fn update_registration<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
    dto: RegistrationUpdate,
) -> Result<Registration, DomainError> {
    Ok(Registration::from(
        registrations_adapter::update_registration(conn, id, dto).await?,
    ))
}

pub async fn soft_delete_registration<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i64,
) -> Result<bool, DomainError> {
    Ok(registrations_adapter::soft_delete(conn, id).await?)
}
