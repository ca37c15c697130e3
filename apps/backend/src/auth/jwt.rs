use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{crypto, decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use super::claims::Claims;
use crate::errors::ErrorCode;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signature or algorithm mismatch")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("token not yet valid")]
    NotYetValid,
    #[error("token malformed")]
    Malformed,
    #[error("token signing failed: {0}")]
    Signing(String),
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Expired => {
                AppError::unauthorized(ErrorCode::UnauthorizedExpiredJwt, "Token expired")
            }
            TokenError::InvalidSignature | TokenError::NotYetValid | TokenError::Malformed => {
                AppError::unauthorized(ErrorCode::UnauthorizedInvalidJwt, "Invalid token")
            }
            TokenError::Signing(_) => {
                AppError::internal(ErrorCode::TokenSigningFailed, "Failed to issue token")
            }
        }
    }
}

fn unix_seconds(t: SystemTime) -> Result<i64, TokenError> {
    t.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| TokenError::Signing("clock before unix epoch".to_string()))
}

/// Mint an access token: `iat = nbf = now`, `exp = now + ttl_minutes * 60`.
///
/// A non-positive TTL yields a token that is already expired.
pub fn mint_access_token(
    user_id: i64,
    email: &str,
    ttl_minutes: i64,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, TokenError> {
    let iat = unix_seconds(now)?;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        iat,
        nbf: iat,
        exp: iat.saturating_add(ttl_minutes.saturating_mul(60)),
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Verify signature, algorithm, `nbf` and `exp` with zero leeway.
///
/// Valid only strictly before `exp`. Identity existence is not checked here.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, TokenError> {
    verify_access_token_at(token, SystemTime::now(), security)
}

/// The signature covers `header.payload` and is checked before either
/// segment is decoded, so a change to any byte of a three-segment token is
/// `InvalidSignature`. Anything else is `Malformed`.
fn check_signature(
    token: &str,
    key: &DecodingKey,
    security: &SecurityConfig,
) -> Result<(), TokenError> {
    let Some((signed, signature)) = token.rsplit_once('.') else {
        return Err(TokenError::Malformed);
    };
    if signed.split('.').count() != 2 {
        return Err(TokenError::Malformed);
    }
    match crypto::verify(signature, signed.as_bytes(), key, security.algorithm) {
        Ok(true) => Ok(()),
        // An undecodable signature segment is a tampered signature too
        Ok(false) | Err(_) => Err(TokenError::InvalidSignature),
    }
}

pub fn verify_access_token_at(
    token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(&security.jwt_secret);
    check_signature(token, &key, security)?;

    // Pin to the configured algorithm; time checks are done below against `now`.
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;
    validation.validate_exp = false;
    validation.validate_nbf = false;
    validation.set_required_spec_claims(&["exp", "nbf", "sub"]);

    let claims = decode::<Claims>(token, &key, &validation)
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::ImmatureSignature => TokenError::NotYetValid,
        _ => TokenError::Malformed,
    })?;

    let now = unix_seconds(now).map_err(|_| TokenError::Malformed)?;
    if now >= claims.exp {
        return Err(TokenError::Expired);
    }
    if now < claims.nbf {
        return Err(TokenError::NotYetValid);
    }
    Ok(claims)
}
