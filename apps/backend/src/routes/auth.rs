use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::{CurrentUser, ValidatedJson};
use crate::routes::users::UserResponse;
use crate::services::auth::{self as auth_service, AccountView, IssuedToken};
use crate::state::app_state::AppState;
use crate::validation::{
    validate_email, validate_name, validate_password, validate_required, Validate,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate_email(&self.email)?;
        validate_required("Password", &self.password)
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate_email(&self.email)?;
        validate_name("Name", &self.name)?;
        validate_password(&self.password)
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl From<IssuedToken> for TokenResponse {
    fn from(t: IssuedToken) -> Self {
        Self {
            access_token: t.access_token,
            token_type: "bearer",
            expires_in: t.expires_in,
            user: UserResponse::from(t.account),
        }
    }
}

async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let issued = auth_service::login(&app_state, req.email, req.password).await?;
    Ok(HttpResponse::Ok().json(TokenResponse::from(issued)))
}

async fn register(
    body: ValidatedJson<RegisterRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let issued = auth_service::register(&app_state, req.email, req.name, req.password).await?;
    Ok(HttpResponse::Created().json(TokenResponse::from(issued)))
}

async fn refresh(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let issued = auth_service::refresh(&app_state, &user)?;
    Ok(HttpResponse::Ok().json(TokenResponse::from(issued)))
}

async fn me(user: CurrentUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(UserResponse::from(AccountView::from(&user))))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)))
        .service(web::resource("/register").route(web::post().to(register)))
        .service(web::resource("/refresh").route(web::post().to(refresh)))
        .service(web::resource("/me").route(web::get().to(me)));
}
