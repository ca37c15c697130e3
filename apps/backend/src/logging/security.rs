//! Security events, logged with a stable `event` field for alerting.

use tracing::{info, warn};

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A login attempt failed. `reason` stays server-side; clients always see "Invalid credentials".
pub fn login_failed(reason: &str, email: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        email = %Redacted(email),
        reason,
        "Authentication failure"
    );
}

pub fn login_succeeded(user_id: i64) {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "SECURITY_LOGIN_SUCCEEDED",
        %trace_id,
        user_id,
        "Authentication success"
    );
}

/// The request gate refused a bearer credential.
pub fn access_rejected(reason: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_ACCESS_REJECTED",
        %trace_id,
        reason,
        "Bearer credential rejected"
    );
}

/// The global request budget for the current window is spent.
pub fn rate_limit_hit(limit: u64) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_RATE_LIMIT_HIT",
        %trace_id,
        limit,
        "Rate limit exceeded"
    );
}

/// An authenticated identity tried to mutate someone else's resource.
pub fn ownership_denied(subject_id: i64, owner_id: i64, resource: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_OWNERSHIP_DENIED",
        %trace_id,
        subject_id,
        owner_id,
        resource,
        "Ownership check failed"
    );
}
