use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trainings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Owner
    pub user_id: i64,
    pub professor_id: i64,
    pub repetitions: i32,
    pub sets: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::professors::Entity",
        from = "Column::ProfessorId",
        to = "super::professors::Column::Id",
        on_delete = "Restrict"
    )]
    Professors,
    #[sea_orm(has_many = "super::training_exercises::Entity")]
    TrainingExercises,
    #[sea_orm(has_many = "super::training_registrations::Entity")]
    TrainingRegistrations,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::professors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professors.def()
    }
}

impl Related<super::training_exercises::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingExercises.def()
    }
}

impl Related<super::training_registrations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingRegistrations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
