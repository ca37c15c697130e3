//! Assertions for the backend's JSON error contract, without depending on backend types.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend error body.
#[derive(Debug, Deserialize)]
pub struct ErrorBodyLike {
    pub error: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert status, `error` message, `code` and trace-id parity (body vs `x-trace-id` header).
/// Returns the parsed body for further checks.
pub async fn assert_error_response(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
    expected_error: &str,
) -> ErrorBodyLike {
    assert_eq!(resp.status(), expected_status);

    let trace_header = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .expect("x-trace-id header should be present");

    let body = actix_web::test::read_body(resp).await;
    let parsed: ErrorBodyLike = serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "error body should be JSON with error/code/trace_id, got: {}",
            String::from_utf8_lossy(&body)
        )
    });

    assert_eq!(parsed.error, expected_error);
    assert_eq!(parsed.code, expected_code);
    assert_eq!(
        parsed.trace_id, trace_header,
        "trace_id in body should match x-trace-id header"
    );
    assert!(!parsed.trace_id.is_empty());

    parsed
}
