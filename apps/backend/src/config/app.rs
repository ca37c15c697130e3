//! Process configuration, read once from the environment at startup.

use std::env;
use std::fmt;
use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./smart_force.db";
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;
pub const DEFAULT_RATE_LIMIT_PER_MINUTE: u64 = 60;

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub secret_key: String,
    pub algorithm: Algorithm,
    pub access_token_expire_minutes: i64,
    pub bcrypt_cost: u32,
    pub environment: String,
    pub log_level: String,
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub rate_limit_per_minute: u64,
}

// Hand-written so the signing secret never reaches a log line.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url)
            .field("secret_key", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .field(
                "access_token_expire_minutes",
                &self.access_token_expire_minutes,
            )
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("environment", &self.environment)
            .field("log_level", &self.log_level)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("allowed_origins", &self.allowed_origins)
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let secret_key = get("SECRET_KEY").ok_or_else(|| {
            AppError::config("Required environment variable 'SECRET_KEY' is not set")
        })?;

        let algorithm = match get("ALGORITHM") {
            Some(raw) => parse_algorithm(&raw)?,
            None => Algorithm::HS256,
        };

        let access_token_expire_minutes =
            parse_or("ACCESS_TOKEN_EXPIRE_MINUTES", get, DEFAULT_TOKEN_TTL_MINUTES)?;

        let bcrypt_cost = parse_or("BCRYPT_COST", get, bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(AppError::config(format!(
                "BCRYPT_COST must be between 4 and 31, got {bcrypt_cost}"
            )));
        }

        let allowed_origins = get("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            secret_key,
            algorithm,
            access_token_expire_minutes,
            bcrypt_cost,
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", get, 8000)?,
            allowed_origins,
            rate_limit_per_minute: parse_or(
                "RATE_LIMIT_PER_MINUTE",
                get,
                DEFAULT_RATE_LIMIT_PER_MINUTE,
            )?,
        })
    }

    pub fn security(&self) -> SecurityConfig {
        SecurityConfig::new(self.secret_key.as_bytes())
            .with_algorithm(self.algorithm)
            .with_ttl_minutes(self.access_token_expire_minutes)
            .with_bcrypt_cost(self.bcrypt_cost)
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

fn parse_or<T, G>(key: &str, get: G, default: T) -> Result<T, AppError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{key} must be a number, got '{raw}'"))),
        None => Ok(default),
    }
}

fn parse_algorithm(raw: &str) -> Result<Algorithm, AppError> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(AppError::config(format!(
            "ALGORITHM must be one of HS256, HS384, HS512, got '{other}'"
        ))),
    }
}
