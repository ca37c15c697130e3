use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::extractors::{parse_id, CurrentUser, Pagination, ValidatedJson};
use crate::repos::users::{User, UserUpdate};
use crate::services::auth::AccountView;
use crate::services::users as user_service;
use crate::state::app_state::AppState;
use crate::validation::{validate_email, validate_name, validate_password, Validate};

/// Public view of an account; the password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            created_at: u.created_at,
        }
    }
}

impl From<AccountView> for UserResponse {
    fn from(a: AccountView) -> Self {
        Self {
            id: a.id,
            email: a.email,
            name: a.name,
            created_at: a.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl Validate for CreateUserRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate_email(&self.email)?;
        validate_name("Name", &self.name)?;
        validate_password(&self.password)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}

impl Validate for UpdateUserRequest {
    fn validate(&self) -> Result<(), AppError> {
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(name) = &self.name {
            validate_name("Name", name)?;
        }
        Ok(())
    }
}

async fn list_users(
    _user: CurrentUser,
    page: Pagination,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let users = user_service::list_users(&app_state, page).await?;
    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn get_user(
    _user: CurrentUser,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "user")?;
    let user = user_service::get_user(&app_state, id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

async fn create_user(
    _user: CurrentUser,
    body: ValidatedJson<CreateUserRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let user = user_service::create_account(&app_state, req.email, req.name, req.password).await?;
    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

async fn update_user(
    user: CurrentUser,
    path: web::Path<String>,
    body: ValidatedJson<UpdateUserRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "user")?;
    let req = body.into_inner();
    let updated = user_service::update_user(
        &app_state,
        user.id,
        id,
        UserUpdate {
            email: req.email,
            name: req.name,
        },
    )
    .await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}

async fn delete_user(
    user: CurrentUser,
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path, "user")?;
    user_service::delete_user(&app_state, user.id, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_users))
            .route(web::post().to(create_user)),
    )
    .service(
        web::resource("/{id}")
            .route(web::get().to(get_user))
            .route(web::put().to(update_user))
            .route(web::delete().to(delete_user)),
    );
}
