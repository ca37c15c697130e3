//! Claims carried by backend-issued access tokens.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// `users.id` rendered as a decimal string
    pub sub: String,
    /// Email at issuance; not re-read on verify
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Not-before (seconds since epoch)
    pub nbf: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// The identity id, or `None` if `sub` is not a positive integer.
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse::<i64>().ok().filter(|id| *id > 0)
    }
}
