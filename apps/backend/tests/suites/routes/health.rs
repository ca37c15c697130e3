use actix_web::http::StatusCode;
use actix_web::test;

use crate::common::json_body;
use crate::support::test_state::build_state_without_db;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn healthy_with_a_migrated_database() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("x-trace-id"));
    let body = json_body(resp, StatusCode::OK).await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["migrations"].as_str().is_some_and(|m| m.starts_with('m')));
    assert!(body["time"].is_string());
    Ok(())
}

#[actix_web::test]
async fn reports_missing_database_without_failing() {
    let app = create_test_app(build_state_without_db())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "unavailable");
}

#[actix_web::test]
async fn unknown_route_is_404() {
    let app = create_test_app(build_state_without_db())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/api/v1/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
