use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::extractors::{parse_id, CurrentUser, Pagination, ValidatedJson};
use crate::repos::exercises::{Exercise, ExerciseCreate, ExerciseFilter, ExerciseUpdate};
use crate::services::exercises as exercise_service;
use crate::state::app_state::AppState;
use crate::validation::{
    validate_difficulty, validate_name, validate_required, validate_url, Validate,
};

#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub muscle_group: String,
    pub equipment: String,
    pub difficulty: String,
    pub instructions: String,
    pub image_url: String,
    pub video_url: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Exercise> for ExerciseResponse {
    fn from(e: Exercise) -> Self {
        Self {
            id: e.id,
            name: e.name,
            description: e.description,
            muscle_group: e.muscle_group,
            equipment: e.equipment,
            difficulty: e.difficulty,
            instructions: e.instructions,
            image_url: e.image_url,
            video_url: e.video_url,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Catalog filters; pagination keys in the same query string are read separately.
#[derive(Debug, Default, Deserialize)]
pub struct ExerciseQuery {
    pub muscle_group: Option<String>,
    pub difficulty: Option<String>,
}

impl From<ExerciseQuery> for ExerciseFilter {
    fn from(q: ExerciseQuery) -> Self {
        // `?difficulty=` is "no filter", not "difficulty is empty"
        let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
        Self {
            muscle_group: non_empty(q.muscle_group),
            difficulty: non_empty(q.difficulty),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub muscle_group: String,
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub video_url: String,
}

impl Validate for CreateExerciseRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate_name("Name", &self.name)?;
        validate_required("Muscle group", &self.muscle_group)?;
        validate_difficulty(&self.difficulty)?;
        validate_url("Image URL", &self.image_url)?;
        validate_url("Video URL", &self.video_url)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateExerciseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub muscle_group: Option<String>,
    pub equipment: Option<String>,
    pub difficulty: Option<String>,
    pub instructions: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

impl Validate for UpdateExerciseRequest {
    fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            validate_name("Name", name)?;
        }
        if let Some(group) = &self.muscle_group {
            validate_required("Muscle group", group)?;
        }
        if let Some(difficulty) = &self.difficulty {
            validate_difficulty(difficulty)?;
        }
        if let Some(url) = &self.image_url {
            validate_url("Image URL", url)?;
        }
        if let Some(url) = &self.video_url {
            validate_url("Video URL", url)?;
        }
        Ok(())
    }
}

async fn list_exercises(
    page: Pagination,
    query: web::Query<ExerciseQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let filter = ExerciseFilter::from(query.into_inner());
    let exercises = exercise_service::list_exercises(&app_state, filter, page).await?;
    let body: Vec<ExerciseResponse> = exercises.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn muscle_groups(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let groups = exercise_service::muscle_groups(&app_state).await?;
    Ok(HttpResponse::Ok().json(groups))
}

async fn get_exercise(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "exercise")?;
    let exercise = exercise_service::get_exercise(&app_state, id).await?;
    Ok(HttpResponse::Ok().json(ExerciseResponse::from(exercise)))
}

async fn create_exercise(
    _user: CurrentUser,
    body: ValidatedJson<CreateExerciseRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let exercise = exercise_service::create_exercise(
        &app_state,
        ExerciseCreate {
            name: req.name,
            description: req.description,
            muscle_group: req.muscle_group,
            equipment: req.equipment,
            difficulty: req.difficulty,
            instructions: req.instructions,
            image_url: req.image_url,
            video_url: req.video_url,
        },
    )
    .await?;
    Ok(HttpResponse::Created().json(ExerciseResponse::from(exercise)))
}

async fn update_exercise(
    _user: CurrentUser,
    path: web::Path<String>,
    body: ValidatedJson<UpdateExerciseRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "exercise")?;
    let req = body.into_inner();
    let exercise = exercise_service::update_exercise(
        &app_state,
        id,
        ExerciseUpdate {
            name: req.name,
            description: req.description,
            muscle_group: req.muscle_group,
            equipment: req.equipment,
            difficulty: req.difficulty,
            instructions: req.instructions,
            image_url: req.image_url,
            video_url: req.video_url,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(ExerciseResponse::from(exercise)))
}

async fn delete_exercise(
    _user: CurrentUser,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "exercise")?;
    exercise_service::delete_exercise(&app_state, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_exercises))
            .route(web::post().to(create_exercise)),
    )
    // Registered before `/{id}` so it is not parsed as an id
    .service(web::resource("/muscle-groups").route(web::get().to(muscle_groups)))
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_exercise))
            .route(web::put().to(update_exercise))
            .route(web::delete().to(delete_exercise)),
    );
}
