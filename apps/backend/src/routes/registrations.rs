use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::extractors::{parse_id, CurrentUser, Pagination, ValidatedJson};
use crate::repos::registrations::{Registration, RegistrationUpdate};
use crate::services::registrations as registration_service;
use crate::state::app_state::AppState;
use crate::validation::{validate_reference_id, Validate};

#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub id: i64,
    pub user_id: i64,
    pub training_id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Registration> for RegistrationResponse {
    fn from(r: Registration) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            training_id: r.training_id,
            date: r.date,
            completed: r.completed,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateRegistrationRequest {
    pub training_id: i64,
    /// RFC 3339; defaults to now
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
}

impl Validate for CreateRegistrationRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate_reference_id("training_id", self.training_id)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateRegistrationRequest {
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub date: Option<OffsetDateTime>,
    pub completed: Option<bool>,
}

impl Validate for UpdateRegistrationRequest {
    fn validate(&self) -> Result<(), AppError> {
        Ok(())
    }
}

async fn list_registrations(
    user: CurrentUser,
    page: Pagination,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let registrations = registration_service::list_mine(&app_state, user.id, page).await?;
    let body: Vec<RegistrationResponse> = registrations.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn create_registration(
    user: CurrentUser,
    body: ValidatedJson<CreateRegistrationRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let registration =
        registration_service::register_for_training(&app_state, user.id, req.training_id, req.date)
            .await?;
    Ok(HttpResponse::Created().json(RegistrationResponse::from(registration)))
}

async fn update_registration(
    user: CurrentUser,
    path: web::Path<String>,
    body: ValidatedJson<UpdateRegistrationRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "registration")?;
    let req = body.into_inner();
    let registration = registration_service::update_registration(
        &app_state,
        user.id,
        id,
        RegistrationUpdate {
            date: req.date,
            completed: req.completed,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(RegistrationResponse::from(registration)))
}

async fn delete_registration(
    user: CurrentUser,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "registration")?;
    registration_service::delete_registration(&app_state, user.id, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_registrations))
            .route(web::post().to(create_registration)),
    )
    .service(
        web::resource("/{id}")
            .route(web::put().to(update_registration))
            .route(web::delete().to(delete_registration)),
    );
}
