use actix_web::http::{header, Method, StatusCode};
use actix_web::test;

use crate::common::assert_error;
use crate::support::app_builder::create_test_app;
use crate::support::test_state::build_state_without_db;

fn header_value<'a>(headers: &'a header::HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[actix_web::test]
async fn hardening_headers_on_success_and_error() {
    let app = create_test_app(build_state_without_db())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let ok = test::call_service(&app, req).await;
    assert_eq!(ok.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
    let denied = test::call_service(&app, req).await;

    for headers in [ok.headers(), denied.headers()] {
        assert_eq!(header_value(headers, "x-content-type-options"), Some("nosniff"));
        assert_eq!(header_value(headers, "x-frame-options"), Some("DENY"));
        assert_eq!(header_value(headers, "referrer-policy"), Some("no-referrer"));
        // Test app runs as non-production
        assert!(headers.get("strict-transport-security").is_none());
    }

    assert_error(
        denied,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_MISSING_HEADER",
        "Authorization header required",
    )
    .await;
}

#[actix_web::test]
async fn cors_preflight_for_allowed_origin() {
    let app = create_test_app(build_state_without_db())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/api/v1/trainings")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization,content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
        header_value(resp.headers(), "access-control-allow-origin"),
        Some("http://localhost:3000")
    );
    assert_eq!(
        header_value(resp.headers(), "access-control-max-age"),
        Some("3600")
    );
}

#[actix_web::test]
async fn trace_id_is_exposed_to_browsers() {
    let app = create_test_app(build_state_without_db())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let exposed = header_value(resp.headers(), "access-control-expose-headers")
        .unwrap_or_default()
        .to_ascii_lowercase();
    assert!(exposed.contains("x-trace-id"));
    assert!(resp.headers().contains_key("x-trace-id"));
}
