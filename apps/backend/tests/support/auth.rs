use std::time::{Duration, SystemTime};

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{header, StatusCode};
use actix_web::{test, Error};
use backend_test_support::unique_helpers::unique_email;
use serde_json::json;
use smartforce::mint_access_token;

use super::test_state::test_security;
use crate::common::json_body;

pub const TEST_PASSWORD: &str = "secret123";

/// A registered account as the client sees it.
#[derive(Debug, Clone)]
pub struct TestAccount {
    pub id: i64,
    pub email: String,
    pub token: String,
}

impl TestAccount {
    pub fn bearer(&self) -> (header::HeaderName, String) {
        bearer_header(&self.token)
    }
}

pub fn bearer_header(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

/// Token signed with the test secret, valid for the default TTL.
pub fn mint_test_token(user_id: i64, email: &str) -> String {
    let security = test_security();
    mint_access_token(
        user_id,
        email,
        security.access_token_ttl_minutes,
        SystemTime::now(),
        &security,
    )
    .expect("mint test token")
}

/// Token whose `exp` passed an hour ago.
pub fn mint_expired_token(user_id: i64, email: &str) -> String {
    let security = test_security();
    let two_hours_ago = SystemTime::now() - Duration::from_secs(2 * 3600);
    mint_access_token(user_id, email, 60, two_hours_ago, &security).expect("mint expired token")
}

/// Register a fresh account through the API.
pub async fn register_account<S, B>(app: &S, prefix: &str) -> TestAccount
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let email = unique_email(prefix);
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "email": email, "name": "Test Athlete", "password": TEST_PASSWORD }))
        .to_request();
    let body = json_body(test::call_service(app, req).await, StatusCode::CREATED).await;

    TestAccount {
        id: body["user"]["id"].as_i64().expect("user id"),
        email,
        token: body["access_token"]
            .as_str()
            .expect("access token")
            .to_string(),
    }
}
