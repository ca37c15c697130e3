use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::unique_helpers::unique_email;
use serde_json::json;

use crate::common::{assert_error, json_body};
use crate::support::auth::register_account;
use crate::support::fixtures::create_professor;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn reads_are_public_writes_need_a_token() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let staff = register_account(&app, "staff").await;
    let id = create_professor(&app, &staff).await;

    let req = test::TestRequest::get().uri("/api/v1/professors").to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert!(body
        .as_array()
        .unwrap()
        .iter()
        .any(|p| p["id"].as_i64() == Some(id)));

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/professors/{id}"))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["name"], "Coach Rita");
    assert_eq!(body["specialties"], "strength");
    assert_eq!(body["phone"], "");

    let req = test::TestRequest::post()
        .uri("/api/v1/professors")
        .set_json(json!({ "name": "Anon", "email": unique_email("anon") }))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::UNAUTHORIZED,
        "UNAUTHORIZED_MISSING_HEADER",
        "Authorization header required",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn professor_emails_are_unique() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let staff = register_account(&app, "staff").await;

    let email = unique_email("coach");
    let payload = json!({ "name": "Coach One", "email": email });
    let req = test::TestRequest::post()
        .uri("/api/v1/professors")
        .insert_header(staff.bearer())
        .set_json(&payload)
        .to_request();
    let first = json_body(test::call_service(&app, req).await, StatusCode::CREATED).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/professors")
        .insert_header(staff.bearer())
        .set_json(&payload)
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::CONFLICT,
        "UNIQUE_EMAIL",
        "Professor with this email already exists",
    )
    .await;

    let second = create_professor(&app, &staff).await;
    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/professors/{second}"))
        .insert_header(staff.bearer())
        .set_json(json!({ "email": first["email"] }))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::CONFLICT,
        "UNIQUE_EMAIL",
        "Email already taken",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn update_and_delete_professor() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let staff = register_account(&app, "staff").await;
    let id = create_professor(&app, &staff).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/professors/{id}"))
        .insert_header(staff.bearer())
        .set_json(json!({ "bio": "Ten years of coaching", "phone": "555-0100" }))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["bio"], "Ten years of coaching");
    assert_eq!(body["phone"], "555-0100");
    assert_eq!(body["name"], "Coach Rita");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/professors/{id}"))
        .insert_header(staff.bearer())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/professors/{id}"))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::NOT_FOUND,
        "PROFESSOR_NOT_FOUND",
        "Professor not found",
    )
    .await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/professors/{id}"))
        .insert_header(staff.bearer())
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::NOT_FOUND,
        "PROFESSOR_NOT_FOUND",
        "Professor not found",
    )
    .await;
    Ok(())
}
