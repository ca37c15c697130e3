use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::extractors::{parse_id, CurrentUser, Pagination, ValidatedJson};
use crate::repos::professors::{Professor, ProfessorCreate, ProfessorUpdate};
use crate::services::professors as professor_service;
use crate::state::app_state::AppState;
use crate::validation::{validate_email, validate_name, Validate};

#[derive(Debug, Serialize)]
pub struct ProfessorResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub specialties: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Professor> for ProfessorResponse {
    fn from(p: Professor) -> Self {
        Self {
            id: p.id,
            name: p.name,
            email: p.email,
            phone: p.phone,
            bio: p.bio,
            specialties: p.specialties,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProfessorRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub specialties: String,
}

impl Validate for CreateProfessorRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate_name("Name", &self.name)?;
        validate_email(&self.email)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfessorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub specialties: Option<String>,
}

impl Validate for UpdateProfessorRequest {
    fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            validate_name("Name", name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

async fn list_professors(
    page: Pagination,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let professors = professor_service::list_professors(&app_state, page).await?;
    let body: Vec<ProfessorResponse> = professors.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn get_professor(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "professor")?;
    let professor = professor_service::get_professor(&app_state, id).await?;
    Ok(HttpResponse::Ok().json(ProfessorResponse::from(professor)))
}

async fn create_professor(
    _user: CurrentUser,
    body: ValidatedJson<CreateProfessorRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let professor = professor_service::create_professor(
        &app_state,
        ProfessorCreate {
            name: req.name,
            email: req.email,
            phone: req.phone,
            bio: req.bio,
            specialties: req.specialties,
        },
    )
    .await?;
    Ok(HttpResponse::Created().json(ProfessorResponse::from(professor)))
}

async fn update_professor(
    _user: CurrentUser,
    path: web::Path<String>,
    body: ValidatedJson<UpdateProfessorRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "professor")?;
    let req = body.into_inner();
    let professor = professor_service::update_professor(
        &app_state,
        id,
        ProfessorUpdate {
            name: req.name,
            email: req.email,
            phone: req.phone,
            bio: req.bio,
            specialties: req.specialties,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(ProfessorResponse::from(professor)))
}

async fn delete_professor(
    _user: CurrentUser,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "professor")?;
    professor_service::delete_professor(&app_state, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_professors))
            .route(web::post().to(create_professor)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_professor))
            .route(web::put().to(update_professor))
            .route(web::delete().to(delete_professor)),
    );
}
