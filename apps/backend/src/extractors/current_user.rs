use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use time::OffsetDateTime;

use super::auth_token::bearer_from_request;
use crate::auth::claims::Claims;
use crate::auth::jwt::{verify_access_token, TokenError};
use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::security;
use crate::repos::users;
use crate::state::app_state::AppState;

/// The authenticated caller, resolved from a bearer token to a live `users` row.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: OffsetDateTime,
    pub claims: Claims,
}

fn user_not_found() -> AppError {
    AppError::unauthorized(ErrorCode::UnauthorizedUserNotFound, "User not found")
}

/// Whether gate failures are reported as security events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejections {
    Log,
    /// Optional auth: a missing or bad credential just means anonymous.
    Quiet,
}

impl Rejections {
    fn report(self, reason: &str) {
        if self == Rejections::Log {
            security::access_rejected(reason);
        }
    }
}

/// Header -> token -> claims -> identity, failing at the first broken step.
///
/// Header checks run before any state or database access.
pub(crate) async fn resolve_current_user(
    req: &HttpRequest,
    rejections: Rejections,
) -> Result<CurrentUser, AppError> {
    let token = bearer_from_request(req).map_err(|e| {
        rejections.report(e.reason());
        AppError::from(e)
    })?;

    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        AppError::internal(ErrorCode::InternalError, "AppState not available")
    })?;

    let claims = verify_access_token(&token, &state.security).map_err(|e| {
        let reason = match e {
            TokenError::Expired => "token_expired",
            TokenError::NotYetValid => "token_not_yet_valid",
            TokenError::InvalidSignature => "invalid_signature",
            _ => "invalid_token",
        };
        rejections.report(reason);
        AppError::from(e)
    })?;

    let user_id = claims.user_id().ok_or_else(|| {
        rejections.report("invalid_subject");
        AppError::from(TokenError::Malformed)
    })?;

    let db = require_db(state)?;
    let user = users::find_user_by_id(db, user_id)
        .await?
        .ok_or_else(|| {
            rejections.report("user_not_found");
            user_not_found()
        })?;

    Ok(CurrentUser {
        id: user.id,
        email: user.email,
        name: user.name,
        created_at: user.created_at,
        claims,
    })
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move { resolve_current_user(&req, Rejections::Log).await })
    }
}
