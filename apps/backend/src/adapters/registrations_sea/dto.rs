//! DTOs for registrations_sea adapter.

use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct RegistrationCreate {
    pub user_id: i64,
    pub training_id: i64,
    pub date: OffsetDateTime,
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationUpdate {
    pub date: Option<OffsetDateTime>,
    pub completed: Option<bool>,
}
