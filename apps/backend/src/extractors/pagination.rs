use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Deserialize;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub const DEFAULT_LIMIT: u64 = 100;
pub const MAX_LIMIT: u64 = 1000;

#[derive(Debug, Deserialize)]
struct PaginationParams {
    skip: Option<u64>,
    limit: Option<u64>,
}

/// `?skip=&limit=` with defaults 0/100; limits above 1000 are capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: u64,
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn from_query(query: &str) -> Result<Self, AppError> {
        let params = web::Query::<PaginationParams>::from_query(query)
            .map_err(|_| {
                AppError::bad_request(
                    ErrorCode::InvalidQuery,
                    "skip and limit must be non-negative integers",
                )
            })?
            .into_inner();

        let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 {
            return Err(AppError::bad_request(
                ErrorCode::InvalidQuery,
                "limit must be at least 1",
            ));
        }

        Ok(Self {
            skip: params.skip.unwrap_or(0),
            limit: limit.min(MAX_LIMIT),
        })
    }
}

impl FromRequest for Pagination {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_query(req.query_string()))
    }
}
