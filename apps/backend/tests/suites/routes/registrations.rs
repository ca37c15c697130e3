use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::json;

use crate::common::{assert_error, json_body};
use crate::support::auth::{register_account, TestAccount};
use crate::support::fixtures::{create_professor, create_training};
use crate::support::{build_test_state, create_test_app};

async fn training_for<S, B>(app: &S, account: &TestAccount) -> i64
where
    S: actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<B>,
        Error = actix_web::Error,
    >,
    B: actix_web::body::MessageBody,
{
    let professor = create_professor(app, account).await;
    create_training(app, account, professor).await
}

#[actix_web::test]
async fn register_with_explicit_and_default_date() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let athlete = register_account(&app, "athlete").await;
    let training = training_for(&app, &athlete).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/registrations")
        .insert_header(athlete.bearer())
        .set_json(json!({ "training_id": training, "date": "2026-03-01T09:00:00Z" }))
        .to_request();
    let dated = json_body(test::call_service(&app, req).await, StatusCode::CREATED).await;
    assert_eq!(dated["user_id"], athlete.id);
    assert_eq!(dated["training_id"], training);
    assert_eq!(dated["date"], "2026-03-01T09:00:00Z");
    assert_eq!(dated["completed"], false);

    let req = test::TestRequest::post()
        .uri("/api/v1/registrations")
        .insert_header(athlete.bearer())
        .set_json(json!({ "training_id": training }))
        .to_request();
    let defaulted = json_body(test::call_service(&app, req).await, StatusCode::CREATED).await;
    assert!(defaulted["date"].is_string());
    Ok(())
}

#[actix_web::test]
async fn unknown_training_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let athlete = register_account(&app, "athlete").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/registrations")
        .insert_header(athlete.bearer())
        .set_json(json!({ "training_id": 777777 }))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "TRAINING_NOT_FOUND",
        "Training not found",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn listing_shows_only_the_callers_registrations() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let alice = register_account(&app, "alice").await;
    let bob = register_account(&app, "bob").await;
    let training = training_for(&app, &alice).await;

    for account in [&alice, &bob] {
        let req = test::TestRequest::post()
            .uri("/api/v1/registrations")
            .insert_header(account.bearer())
            .set_json(json!({ "training_id": training }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/registrations")
        .insert_header(bob.bearer())
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["user_id"], bob.id);
    Ok(())
}

#[actix_web::test]
async fn only_the_owner_may_update_or_cancel() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let owner = register_account(&app, "owner").await;
    let other = register_account(&app, "other").await;
    let training = training_for(&app, &owner).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/registrations")
        .insert_header(owner.bearer())
        .set_json(json!({ "training_id": training }))
        .to_request();
    let created = json_body(test::call_service(&app, req).await, StatusCode::CREATED).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/registrations/{id}"))
        .insert_header(other.bearer())
        .set_json(json!({ "completed": true }))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::FORBIDDEN,
        "FORBIDDEN",
        "You can only update your own registrations",
    )
    .await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/registrations/{id}"))
        .insert_header(other.bearer())
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::FORBIDDEN,
        "FORBIDDEN",
        "You can only delete your own registrations",
    )
    .await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/registrations/{id}"))
        .insert_header(owner.bearer())
        .set_json(json!({ "completed": true, "date": "2026-04-02T18:30:00Z" }))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["completed"], true);
    assert_eq!(body["date"], "2026-04-02T18:30:00Z");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/registrations/{id}"))
        .insert_header(owner.bearer())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/registrations/{id}"))
        .insert_header(owner.bearer())
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::NOT_FOUND,
        "REGISTRATION_NOT_FOUND",
        "Registration not found",
    )
    .await;
    Ok(())
}
