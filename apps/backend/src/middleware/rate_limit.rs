//! Global fixed-window rate limiting.
//!
//! One bucket for all callers: `RATE_LIMIT_PER_MINUTE` requests per 60s.
//! Wire it as
//!
//! ```ignore
//! let backend = InMemoryBackend::builder().build(); // once, outside the app factory
//! RateLimiter::builder(backend.clone(), rate_limit_config(n).build())
//!     .add_headers()
//!     .request_denied_response(move |_| rate_limited_response(n))
//!     .build()
//! ```

use std::time::Duration;

use actix_extensible_rate_limit::backend::SimpleInputFunctionBuilder;
use actix_web::{HttpResponse, ResponseError};

use crate::error::AppError;
use crate::logging::security;

pub const WINDOW: Duration = Duration::from_secs(60);

/// No key components: every request draws from the same bucket.
pub fn rate_limit_config(per_minute: u64) -> SimpleInputFunctionBuilder {
    SimpleInputFunctionBuilder::new(WINDOW, per_minute)
}

/// 429 in the standard error shape.
pub fn rate_limited_response(limit: u64) -> HttpResponse {
    security::rate_limit_hit(limit);
    AppError::too_many_requests().error_response()
}
