use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    Name,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Professors {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Bio,
    Specialties,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Exercises {
    Table,
    Id,
    Name,
    Description,
    MuscleGroup,
    Equipment,
    Difficulty,
    Instructions,
    ImageUrl,
    VideoUrl,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Trainings {
    Table,
    Id,
    Name,
    Description,
    UserId,
    ProfessorId,
    Repetitions,
    Sets,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum TrainingExercises {
    Table,
    Id,
    TrainingId,
    ExerciseId,
    Repetitions,
    Sets,
    CreatedAt,
}

#[derive(Iden)]
enum TrainingRegistrations {
    Table,
    Id,
    UserId,
    TrainingId,
    Date,
    Completed,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

fn id_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

fn ts_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

fn deleted_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp_with_time_zone()
        .null()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(id_col(Users::Id))
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(ts_col(Users::CreatedAt))
                    .col(ts_col(Users::UpdatedAt))
                    .col(deleted_col(Users::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Professors::Table)
                    .if_not_exists()
                    .col(id_col(Professors::Id))
                    .col(ColumnDef::new(Professors::Name).string().not_null())
                    .col(
                        ColumnDef::new(Professors::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Professors::Phone)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Professors::Bio)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Professors::Specialties)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ts_col(Professors::CreatedAt))
                    .col(ts_col(Professors::UpdatedAt))
                    .col(deleted_col(Professors::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Exercises::Table)
                    .if_not_exists()
                    .col(id_col(Exercises::Id))
                    .col(ColumnDef::new(Exercises::Name).string().not_null())
                    .col(
                        ColumnDef::new(Exercises::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Exercises::MuscleGroup).string().not_null())
                    .col(
                        ColumnDef::new(Exercises::Equipment)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Exercises::Difficulty)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Exercises::Instructions)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Exercises::ImageUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Exercises::VideoUrl)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ts_col(Exercises::CreatedAt))
                    .col(ts_col(Exercises::UpdatedAt))
                    .col(deleted_col(Exercises::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_exercises_name")
                    .table(Exercises::Table)
                    .col(Exercises::Name)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Trainings::Table)
                    .if_not_exists()
                    .col(id_col(Trainings::Id))
                    .col(ColumnDef::new(Trainings::Name).string().not_null())
                    .col(
                        ColumnDef::new(Trainings::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Trainings::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Trainings::ProfessorId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Trainings::Repetitions)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Trainings::Sets)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ts_col(Trainings::CreatedAt))
                    .col(ts_col(Trainings::UpdatedAt))
                    .col(deleted_col(Trainings::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trainings_user_id")
                            .from(Trainings::Table, Trainings::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_trainings_professor_id")
                            .from(Trainings::Table, Trainings::ProfessorId)
                            .to(Professors::Table, Professors::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_trainings_user_id")
                    .table(Trainings::Table)
                    .col(Trainings::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrainingExercises::Table)
                    .if_not_exists()
                    .col(id_col(TrainingExercises::Id))
                    .col(
                        ColumnDef::new(TrainingExercises::TrainingId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainingExercises::ExerciseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainingExercises::Repetitions)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TrainingExercises::Sets)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ts_col(TrainingExercises::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_exercises_training_id")
                            .from(TrainingExercises::Table, TrainingExercises::TrainingId)
                            .to(Trainings::Table, Trainings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_exercises_exercise_id")
                            .from(TrainingExercises::Table, TrainingExercises::ExerciseId)
                            .to(Exercises::Table, Exercises::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrainingRegistrations::Table)
                    .if_not_exists()
                    .col(id_col(TrainingRegistrations::Id))
                    .col(
                        ColumnDef::new(TrainingRegistrations::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainingRegistrations::TrainingId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ts_col(TrainingRegistrations::Date))
                    .col(
                        ColumnDef::new(TrainingRegistrations::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ts_col(TrainingRegistrations::CreatedAt))
                    .col(ts_col(TrainingRegistrations::UpdatedAt))
                    .col(deleted_col(TrainingRegistrations::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_registrations_user_id")
                            .from(TrainingRegistrations::Table, TrainingRegistrations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_training_registrations_training_id")
                            .from(
                                TrainingRegistrations::Table,
                                TrainingRegistrations::TrainingId,
                            )
                            .to(Trainings::Table, Trainings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // children first
        manager
            .drop_table(
                Table::drop()
                    .table(TrainingRegistrations::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(TrainingExercises::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Trainings::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Exercises::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professors::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
