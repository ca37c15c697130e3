//! HTTP surface: `/health`, the API index at `/`, and everything else under `/api/v1`.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::MaybeUser;
use crate::services::auth::AccountView;

pub mod auth;
pub mod exercises;
pub mod health;
pub mod professors;
pub mod registrations;
pub mod trainings;
pub mod users;

pub const API_PREFIX: &str = "/api/v1";

#[derive(Debug, Serialize)]
struct IndexResponse {
    name: &'static str,
    version: &'static str,
    api: &'static str,
    viewer: Option<users::UserResponse>,
}

/// API index; names the caller when a valid token accompanies the request.
async fn index(viewer: MaybeUser) -> Result<HttpResponse, AppError> {
    let viewer = viewer
        .into_inner()
        .map(|u| users::UserResponse::from(AccountView::from(&u)));
    Ok(HttpResponse::Ok().json(IndexResponse {
        name: "SmartForce API",
        version: env!("CARGO_PKG_VERSION"),
        api: API_PREFIX,
        viewer,
    }))
}

fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::debug!(error = %err, "rejected query string");
    AppError::bad_request(ErrorCode::InvalidQuery, "Invalid query parameters").into()
}

/// Register every route. Production and the test app builder share this.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .configure(health::configure_routes)
        .route("/", web::get().to(index))
        .service(
            web::scope(API_PREFIX)
                .service(web::scope("/auth").configure(auth::configure_routes))
                .service(web::scope("/users").configure(users::configure_routes))
                .service(web::scope("/professors").configure(professors::configure_routes))
                .service(web::scope("/exercises").configure(exercises::configure_routes))
                .service(web::scope("/trainings").configure(trainings::configure_routes))
                .service(
                    web::scope("/registrations").configure(registrations::configure_routes),
                ),
        );
}
