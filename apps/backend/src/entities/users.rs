use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

/// Deliberately not `Serialize`: `password_hash` must never leave the process.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trainings::Entity")]
    Trainings,
    #[sea_orm(has_many = "super::training_registrations::Entity")]
    TrainingRegistrations,
}

impl Related<super::trainings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trainings.def()
    }
}

impl Related<super::training_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingRegistrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
