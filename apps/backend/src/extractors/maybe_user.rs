use std::future::Future;
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use super::current_user::{resolve_current_user, CurrentUser, Rejections};
use crate::error::AppError;

/// Optional authentication: any gate failure means "anonymous", never an error.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<CurrentUser>);

impl MaybeUser {
    pub fn into_inner(self) -> Option<CurrentUser> {
        self.0
    }
}

impl FromRequest for MaybeUser {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let user = resolve_current_user(&req, Rejections::Quiet).await.ok();
            Ok(MaybeUser(user))
        })
    }
}
