//! Catalog rows created through the API, as a client would.

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, Error};
use backend_test_support::unique_helpers::{unique_email, unique_str};
use serde_json::{json, Value};

use super::auth::TestAccount;
use crate::common::json_body;

async fn post_json<S, B>(app: &S, account: &TestAccount, uri: &str, payload: Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .insert_header(account.bearer())
        .set_json(payload)
        .to_request();
    json_body(test::call_service(app, req).await, StatusCode::CREATED).await
}

pub async fn create_professor<S, B>(app: &S, account: &TestAccount) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let body = post_json(
        app,
        account,
        "/api/v1/professors",
        json!({ "name": "Coach Rita", "email": unique_email("coach"), "specialties": "strength" }),
    )
    .await;
    body["id"].as_i64().expect("professor id")
}

pub async fn create_exercise<S, B>(
    app: &S,
    account: &TestAccount,
    muscle_group: &str,
    difficulty: &str,
) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let body = post_json(
        app,
        account,
        "/api/v1/exercises",
        json!({
            "name": unique_str("lift"),
            "muscle_group": muscle_group,
            "difficulty": difficulty,
        }),
    )
    .await;
    body["id"].as_i64().expect("exercise id")
}

pub async fn create_training<S, B>(app: &S, account: &TestAccount, professor_id: i64) -> i64
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let body = post_json(
        app,
        account,
        "/api/v1/trainings",
        json!({
            "name": "Leg day",
            "description": "squats and lunges",
            "professor_id": professor_id,
            "repetitions": 10,
            "sets": 3,
        }),
    )
    .await;
    body["id"].as_i64().expect("training id")
}
