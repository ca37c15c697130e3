use std::future::Future;
use std::ops::{Deref, DerefMut};
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest};
use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use serde_json::Error as JsonError;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::trace_ctx;
use crate::validation::Validate;

/// Bodies larger than this are rejected before parsing.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// JSON request body, deserialized and then checked with the type's [`Validate`] rules.
///
/// Transport and parse failures are a sanitized 400 `BAD_REQUEST`; rule
/// failures keep the code and message the rule chose.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

fn bad_body(detail: impl Into<String>) -> AppError {
    AppError::bad_request(ErrorCode::BadRequest, detail)
}

/// A missing content type is tolerated; anything declared must be JSON.
fn check_content_type(req: &HttpRequest) -> Result<(), AppError> {
    let Some(value) = req.headers().get(header::CONTENT_TYPE) else {
        return Ok(());
    };
    let mime = value.to_str().unwrap_or("").to_ascii_lowercase();
    let essence = mime.split(';').next().unwrap_or("").trim();
    if essence == "application/json" || essence.ends_with("+json") {
        Ok(())
    } else {
        Err(bad_body("Content-Type must be application/json"))
    }
}

async fn read_body(mut payload: Payload) -> Result<Bytes, AppError> {
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| {
            warn!(trace_id = %trace_ctx::trace_id(), error = %e, "request body read failed");
            bad_body("Failed to read request body")
        })?;
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(bad_body("Request body too large"));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

/// Client-safe description of a parse failure. Field names come from our
/// own types; values from the body are never echoed.
fn describe_json_error(error: &JsonError) -> String {
    match error.classify() {
        Category::Syntax => format!("Invalid JSON at line {}", error.line()),
        Category::Eof => "Invalid JSON: unexpected end of input".to_string(),
        Category::Data => {
            let message = error.to_string();
            if let Some(field) = message
                .strip_prefix("missing field `")
                .and_then(|rest| rest.split('`').next())
            {
                format!("Missing field: {field}")
            } else {
                "Invalid JSON: wrong types for one or more fields".to_string()
            }
        }
        Category::Io => "Invalid JSON: I/O error while reading body".to_string(),
    }
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(bad_body("Request body required"));
    }
    serde_json::from_slice::<T>(body).map_err(|e| {
        debug!(
            trace_id = %trace_ctx::trace_id(),
            error = %Redacted(&e.to_string()),
            body_size = body.len(),
            "JSON parsing failed"
        );
        bad_body(describe_json_error(&e))
    })
}

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let content_type = check_content_type(req);
        let payload = payload.take();

        Box::pin(async move {
            content_type?;
            let body = read_body(payload).await?;
            let parsed: T = parse_body(&body)?;
            parsed.validate()?;
            Ok(ValidatedJson(parsed))
        })
    }
}
