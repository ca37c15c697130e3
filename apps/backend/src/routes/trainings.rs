use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::extractors::{parse_id, CurrentUser, Pagination, ValidatedJson};
use crate::repos::trainings::{
    Training, TrainingCreate, TrainingExercise, TrainingExerciseCreate, TrainingUpdate,
};
use crate::routes::exercises::ExerciseResponse;
use crate::services::trainings::{self as training_service, TrainingDetail, TrainingExerciseDetail};
use crate::state::app_state::AppState;
use crate::validation::{validate_name, validate_non_negative, validate_reference_id, Validate};

#[derive(Debug, Serialize)]
pub struct TrainingExerciseResponse {
    pub id: i64,
    pub training_id: i64,
    pub exercise_id: i64,
    pub repetitions: i32,
    pub sets: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// `null` when the catalog entry was deleted after being attached
    pub exercise: Option<ExerciseResponse>,
}

impl From<TrainingExerciseDetail> for TrainingExerciseResponse {
    fn from(d: TrainingExerciseDetail) -> Self {
        let TrainingExercise {
            id,
            training_id,
            exercise_id,
            repetitions,
            sets,
            created_at,
        } = d.link;
        Self {
            id,
            training_id,
            exercise_id,
            repetitions,
            sets,
            created_at,
            exercise: d.exercise.map(ExerciseResponse::from),
        }
    }
}

/// A training; `exercises` is present on single-training responses only.
#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct TrainingResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub user_id: i64,
    pub professor_id: i64,
    pub repetitions: i32,
    pub sets: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub exercises: Option<Vec<TrainingExerciseResponse>>,
}

impl TrainingResponse {
    fn summary(t: Training) -> Self {
        Self {
            id: t.id,
            name: t.name,
            description: t.description,
            user_id: t.user_id,
            professor_id: t.professor_id,
            repetitions: t.repetitions,
            sets: t.sets,
            created_at: t.created_at,
            updated_at: t.updated_at,
            exercises: None,
        }
    }
}

impl From<TrainingDetail> for TrainingResponse {
    fn from(d: TrainingDetail) -> Self {
        Self {
            exercises: Some(d.exercises.into_iter().map(Into::into).collect()),
            ..Self::summary(d.training)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTrainingRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub professor_id: i64,
    #[serde(default)]
    pub repetitions: i32,
    #[serde(default)]
    pub sets: i32,
}

impl Validate for CreateTrainingRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate_name("Name", &self.name)?;
        validate_reference_id("professor_id", self.professor_id)?;
        validate_non_negative("repetitions", self.repetitions)?;
        validate_non_negative("sets", self.sets)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTrainingRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub professor_id: Option<i64>,
    pub repetitions: Option<i32>,
    pub sets: Option<i32>,
}

impl Validate for UpdateTrainingRequest {
    fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            validate_name("Name", name)?;
        }
        if let Some(id) = self.professor_id {
            validate_reference_id("professor_id", id)?;
        }
        if let Some(reps) = self.repetitions {
            validate_non_negative("repetitions", reps)?;
        }
        if let Some(sets) = self.sets {
            validate_non_negative("sets", sets)?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct AddExerciseRequest {
    pub exercise_id: i64,
    #[serde(default)]
    pub repetitions: i32,
    #[serde(default)]
    pub sets: i32,
}

impl Validate for AddExerciseRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate_reference_id("exercise_id", self.exercise_id)?;
        validate_non_negative("repetitions", self.repetitions)?;
        validate_non_negative("sets", self.sets)
    }
}

async fn list_trainings(
    _user: CurrentUser,
    page: Pagination,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let trainings = training_service::list_trainings(&app_state, page).await?;
    let body: Vec<TrainingResponse> = trainings.into_iter().map(TrainingResponse::summary).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn get_training(
    _user: CurrentUser,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "training")?;
    let detail = training_service::get_training(&app_state, id).await?;
    Ok(HttpResponse::Ok().json(TrainingResponse::from(detail)))
}

async fn create_training(
    user: CurrentUser,
    body: ValidatedJson<CreateTrainingRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let detail = training_service::create_training(
        &app_state,
        TrainingCreate {
            name: req.name,
            description: req.description,
            user_id: user.id,
            professor_id: req.professor_id,
            repetitions: req.repetitions,
            sets: req.sets,
        },
    )
    .await?;
    Ok(HttpResponse::Created().json(TrainingResponse::from(detail)))
}

async fn update_training(
    user: CurrentUser,
    path: web::Path<String>,
    body: ValidatedJson<UpdateTrainingRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "training")?;
    let req = body.into_inner();
    let detail = training_service::update_training(
        &app_state,
        user.id,
        id,
        TrainingUpdate {
            name: req.name,
            description: req.description,
            professor_id: req.professor_id,
            repetitions: req.repetitions,
            sets: req.sets,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(TrainingResponse::from(detail)))
}

async fn delete_training(
    user: CurrentUser,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "training")?;
    training_service::delete_training(&app_state, user.id, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn add_exercise(
    user: CurrentUser,
    path: web::Path<String>,
    body: ValidatedJson<AddExerciseRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let training_id = parse_id(&path, "training")?;
    let req = body.into_inner();
    let added = training_service::add_exercise(
        &app_state,
        user.id,
        TrainingExerciseCreate {
            training_id,
            exercise_id: req.exercise_id,
            repetitions: req.repetitions,
            sets: req.sets,
        },
    )
    .await?;
    Ok(HttpResponse::Created().json(TrainingExerciseResponse::from(added)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_trainings))
            .route(web::post().to(create_training)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_training))
            .route(web::put().to(update_training))
            .route(web::delete().to(delete_training)),
    )
    .service(web::resource("/{id}/exercises").route(web::post().to(add_exercise)));
}
