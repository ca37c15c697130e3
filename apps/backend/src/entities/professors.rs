use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "professors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub specialties: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trainings::Entity")]
    Trainings,
}

impl Related<super::trainings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trainings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
