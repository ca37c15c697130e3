use actix_web::http::StatusCode;
use actix_web::test;
use smartforce::verify_access_token;

use crate::common::json_body;
use crate::support::auth::register_account;
use crate::support::test_state::test_security;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn me_returns_the_caller() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let account = register_account(&app, "me").await;

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(account.bearer())
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;

    assert_eq!(body["id"], account.id);
    assert_eq!(body["email"], account.email.as_str());
    assert_eq!(body["name"], "Test Athlete");
    assert!(body["created_at"].is_string());
    Ok(())
}

#[actix_web::test]
async fn refresh_issues_a_token_for_the_same_subject() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let account = register_account(&app, "refresh").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .insert_header(account.bearer())
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;

    let token = body["access_token"].as_str().unwrap();
    let claims = verify_access_token(token, &test_security())?;
    assert_eq!(claims.user_id(), Some(account.id));
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["id"], account.id);

    // The new token authenticates on its own
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    Ok(())
}

#[actix_web::test]
async fn index_names_the_viewer_only_with_a_valid_token() -> Result<(), Box<dyn std::error::Error>>
{
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let account = register_account(&app, "viewer").await;

    let req = test::TestRequest::get().uri("/").to_request();
    let anonymous = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(anonymous["name"], "SmartForce API");
    assert_eq!(anonymous["api"], "/api/v1");
    assert!(anonymous["viewer"].is_null());

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header(account.bearer())
        .to_request();
    let named = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(named["viewer"]["id"], account.id);
    Ok(())
}
