use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "exercises")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub muscle_group: String,
    pub equipment: String,
    /// `beginner` | `intermediate` | `advanced`, or empty
    pub difficulty: String,
    #[sea_orm(column_type = "Text")]
    pub instructions: String,
    pub image_url: String,
    pub video_url: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub deleted_at: Option<OffsetDateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::training_exercises::Entity")]
    TrainingExercises,
}

impl Related<super::training_exercises::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingExercises.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
