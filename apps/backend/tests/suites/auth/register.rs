use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::unique_helpers::unique_email;
use serde_json::json;

use crate::common::{assert_error, json_body};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn register_returns_token_and_account() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let email = unique_email("athlete");
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "email": email, "name": "Ana", "password": "secret123" }))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::CREATED).await;

    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["expires_in"], 30 * 60);
    assert!(!body["access_token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], email.as_str());
    assert_eq!(body["user"]["name"], "Ana");
    assert!(body["user"]["id"].as_i64().unwrap() > 0);
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("hashed_password").is_none());
    Ok(())
}

#[actix_web::test]
async fn duplicate_email_is_conflict() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let email = unique_email("dup");
    let payload = json!({ "email": email, "name": "First", "password": "secret123" });

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(&payload)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(&payload)
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::CONFLICT,
        "UNIQUE_EMAIL",
        "User with this email already exists",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn register_validates_fields() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let cases = [
        (
            json!({ "email": "not-an-email", "name": "Ana", "password": "secret123" }),
            "INVALID_EMAIL",
            "Invalid email address",
        ),
        (
            json!({ "email": unique_email("v"), "name": "   ", "password": "secret123" }),
            "INVALID_NAME",
            "Name is required",
        ),
        (
            json!({ "email": unique_email("v"), "name": "Ana", "password": "12345" }),
            "INVALID_PASSWORD",
            "Password must be at least 6 characters",
        ),
    ];

    for (payload, code, message) in cases {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(&payload)
            .to_request();
        assert_error(
            test::call_service(&app, req).await,
            StatusCode::BAD_REQUEST,
            code,
            message,
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn malformed_json_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
