//! Credential checks and token issuance behind the `/auth` routes.

use std::time::SystemTime;

use time::OffsetDateTime;
use tracing::error;

use crate::auth::jwt::mint_access_token;
use crate::auth::password::{hash_password_blocking, verify_password_blocking};
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::logging::security;
use crate::repos::users;
use crate::services::users::create_account;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// The account a token was issued for, as shown to clients.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountView {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: OffsetDateTime,
}

impl From<users::User> for AccountView {
    fn from(u: users::User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            name: u.name,
            created_at: u.created_at,
        }
    }
}

impl From<&CurrentUser> for AccountView {
    fn from(u: &CurrentUser) -> Self {
        Self {
            id: u.id,
            email: u.email.clone(),
            name: u.name.clone(),
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: i64,
    pub account: AccountView,
}

fn issue(account: AccountView, security: &SecurityConfig) -> Result<IssuedToken, AppError> {
    let access_token = mint_access_token(
        account.id,
        &account.email,
        security.access_token_ttl_minutes,
        SystemTime::now(),
        security,
    )?;
    Ok(IssuedToken {
        access_token,
        expires_in: security.access_token_ttl_seconds(),
        account,
    })
}

pub async fn register(
    state: &AppState,
    email: String,
    name: String,
    password: String,
) -> Result<IssuedToken, AppError> {
    let user = create_account(state, email, name, password).await?;
    issue(AccountView::from(user), &state.security)
}

/// Unknown email and wrong password both end in `invalid_credentials`.
pub async fn login(state: &AppState, email: String, password: String) -> Result<IssuedToken, AppError> {
    let db = require_db(state)?;

    let Some(user) = users::find_user_by_email(db, &email).await? else {
        // Spend one hash so an unknown email costs the same as a wrong password
        let _ = hash_password_blocking(password, state.security.bcrypt_cost).await;
        security::login_failed("unknown_email", &email);
        return Err(AppError::invalid_credentials());
    };

    let matches = verify_password_blocking(password, user.password_hash.clone())
        .await
        .map_err(|e| {
            error!(user_id = user.id, error = %e, "stored password hash unusable");
            AppError::from(e)
        })?;
    if !matches {
        security::login_failed("wrong_password", &email);
        return Err(AppError::invalid_credentials());
    }

    security::login_succeeded(user.id);
    issue(AccountView::from(user), &state.security)
}

/// A fresh token for an identity the gate already resolved.
pub fn refresh(state: &AppState, current: &CurrentUser) -> Result<IssuedToken, AppError> {
    issue(AccountView::from(current), &state.security)
}
