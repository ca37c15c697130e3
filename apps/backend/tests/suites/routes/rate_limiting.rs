use actix_extensible_rate_limit::backend::memory::InMemoryBackend;
use actix_extensible_rate_limit::RateLimiter;
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use smartforce::middleware::{rate_limit_config, rate_limited_response};
use smartforce::{routes, RequestTrace};

use crate::common::assert_error;
use crate::support::test_state::build_state_without_db;

const LIMIT: u64 = 3;

#[actix_web::test]
async fn requests_past_the_window_budget_get_429() {
    let backend = InMemoryBackend::builder().build();
    let limiter = RateLimiter::builder(backend, rate_limit_config(LIMIT).build())
        .add_headers()
        .request_denied_response(|_| rate_limited_response(LIMIT))
        .build();

    let app = test::init_service(
        App::new()
            .wrap(limiter)
            .wrap(RequestTrace)
            .app_data(web::Data::new(build_state_without_db()))
            .configure(routes::configure),
    )
    .await;

    for expected_remaining in (0..LIMIT).rev() {
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("x-ratelimit-remaining")
                .and_then(|v| v.to_str().ok()),
            Some(expected_remaining.to_string().as_str())
        );
    }

    // The bucket is global, so a different route is refused too
    let req = test::TestRequest::get().uri("/").to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::TOO_MANY_REQUESTS,
        "RATE_LIMITED",
        "Too many requests",
    )
    .await;
}
