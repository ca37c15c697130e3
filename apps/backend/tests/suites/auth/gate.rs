use actix_web::http::{header, StatusCode};
use actix_web::test;

use crate::common::assert_error;
use crate::support::auth::{mint_expired_token, mint_test_token, register_account};
use crate::support::test_state::build_state_without_db;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn header_checks_run_without_a_database() {
    let app = create_test_app(build_state_without_db())
        .with_prod_routes()
        .build()
        .await;

    let cases: [(Option<&str>, &str, &str); 4] = [
        (
            None,
            "UNAUTHORIZED_MISSING_HEADER",
            "Authorization header required",
        ),
        (
            Some("Basic dXNlcjpwYXNz"),
            "UNAUTHORIZED_INVALID_HEADER",
            "Invalid authorization header format",
        ),
        (Some("Bearer "), "UNAUTHORIZED_MISSING_TOKEN", "Token required"),
        (
            Some("Bearer not.a.jwt"),
            "UNAUTHORIZED_INVALID_JWT",
            "Invalid token",
        ),
    ];

    for (value, code, message) in cases {
        let mut req = test::TestRequest::get().uri("/api/v1/trainings");
        if let Some(value) = value {
            req = req.insert_header((header::AUTHORIZATION, value));
        }
        assert_error(
            test::call_service(&app, req.to_request()).await,
            StatusCode::UNAUTHORIZED,
            code,
            message,
        )
        .await;
    }
}

#[actix_web::test]
async fn expired_token_is_reported_as_expired() {
    let app = create_test_app(build_state_without_db())
        .with_prod_routes()
        .build()
        .await;

    let token = mint_expired_token(1, "gone@example.test");
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_EXPIRED_JWT",
        "Token expired",
    )
    .await;
}

#[actix_web::test]
async fn token_for_missing_user_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let token = mint_test_token(987_654, "ghost@example.test");
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_USER_NOT_FOUND",
        "User not found",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn deleted_account_token_stops_working() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;

    let account = register_account(&app, "leaver").await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/users/{}", account.id))
        .insert_header(account.bearer())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(account.bearer())
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_USER_NOT_FOUND",
        "User not found",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn token_signed_with_another_key_is_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let account = register_account(&app, "forged").await;

    let foreign = smartforce::SecurityConfig::new("some-other-key");
    let forged = smartforce::mint_access_token(
        account.id,
        &account.email,
        30,
        std::time::SystemTime::now(),
        &foreign,
    )?;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {forged}")))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_INVALID_JWT",
        "Invalid token",
    )
    .await;
    Ok(())
}
