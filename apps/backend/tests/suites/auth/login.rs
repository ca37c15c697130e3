use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;
use smartforce::{build_state, verify_access_token, Claims};

use crate::common::{assert_error, json_body};
use crate::support::auth::{register_account, TEST_PASSWORD};
use crate::support::build_test_state;
use crate::support::create_test_app;
use crate::support::test_state::test_security;

/// Register `a@x.com` / `A` / `secret1`, fail once on the password, then log in.
#[actix_web::test]
async fn single_letter_name_registers_and_logs_in() -> Result<(), Box<dyn std::error::Error>> {
    // Own database: the literal email must not collide with other runs
    let state = build_state(test_security())
        .with_db_url("sqlite::memory:")
        .build()
        .await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "email": "a@x.com", "name": "A", "password": "secret1" }))
        .to_request();
    let registered = json_body(test::call_service(&app, req).await, StatusCode::CREATED).await;
    assert!(registered["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(registered["user"]["email"], "a@x.com");
    assert_eq!(registered["user"]["name"], "A");
    let id = registered["user"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "a@x.com", "password": "secret2" }))
        .to_request();
    let body = assert_error(
        test::call_service(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "INVALID_CREDENTIALS",
        "Invalid credentials",
    )
    .await;
    assert_eq!(body.error, "Invalid credentials");

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "a@x.com", "password": "secret1" }))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let claims: Claims = verify_access_token(body["access_token"].as_str().unwrap(), &test_security())?;
    assert_eq!(claims.sub, id.to_string());
    Ok(())
}

#[actix_web::test]
async fn register_then_login_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let account = register_account(&app, "roundtrip").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": account.email, "password": "wrong-password" }))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "INVALID_CREDENTIALS",
        "Invalid credentials",
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": account.email, "password": TEST_PASSWORD }))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;

    let token = body["access_token"].as_str().unwrap();
    let claims: Claims = verify_access_token(token, &test_security())?;
    assert_eq!(claims.sub, account.id.to_string());
    assert_eq!(claims.email, account.email);
    assert_eq!(claims.exp - claims.iat, 30 * 60);
    assert_eq!(body["user"]["id"], account.id);
    Ok(())
}

#[actix_web::test]
async fn unknown_email_and_wrong_password_are_indistinguishable(
) -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let account = register_account(&app, "twin").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": account.email, "password": "not-the-password" }))
        .to_request();
    let wrong_password = test::call_service(&app, req).await;
    let wrong_password_headers = wrong_password.headers().clone();
    let wrong_password = assert_error(
        wrong_password,
        StatusCode::UNAUTHORIZED,
        "INVALID_CREDENTIALS",
        "Invalid credentials",
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "nobody-here@example.test", "password": "not-the-password" }))
        .to_request();
    let unknown = test::call_service(&app, req).await;
    let unknown_headers = unknown.headers().clone();
    let unknown = assert_error(
        unknown,
        StatusCode::UNAUTHORIZED,
        "INVALID_CREDENTIALS",
        "Invalid credentials",
    )
    .await;

    // Only the trace id differs
    assert_eq!(wrong_password.error, unknown.error);
    assert_eq!(wrong_password.code, unknown.code);
    assert_ne!(wrong_password.trace_id, unknown.trace_id);
    assert_eq!(
        wrong_password_headers.get("www-authenticate"),
        unknown_headers.get("www-authenticate")
    );
    Ok(())
}

#[actix_web::test]
async fn login_requires_a_password() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "someone@example.test", "password": "" }))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
        "Password is required",
    )
    .await;
    Ok(())
}
