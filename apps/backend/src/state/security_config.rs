use std::fmt;

use jsonwebtoken::Algorithm;

/// Signing and hashing parameters, fixed at startup and shared read-only.
#[derive(Clone)]
pub struct SecurityConfig {
    /// Symmetric signing key for access tokens
    pub jwt_secret: Vec<u8>,
    /// HMAC algorithm (defaults to HS256)
    pub algorithm: Algorithm,
    pub access_token_ttl_minutes: i64,
    pub bcrypt_cost: u32,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            access_token_ttl_minutes: 30,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_ttl_minutes(mut self, minutes: i64) -> Self {
        self.access_token_ttl_minutes = minutes;
        self
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// `expires_in` reported to clients, in seconds.
    pub fn access_token_ttl_seconds(&self) -> i64 {
        self.access_token_ttl_minutes * 60
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .field("access_token_ttl_minutes", &self.access_token_ttl_minutes)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}
