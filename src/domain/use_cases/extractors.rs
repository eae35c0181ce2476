use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{errors::AppError, AppState};

/// Extractor guarding admin endpoints: requires `Authorization: Bearer <token>`
/// matching the configured admin token. Returns 401 otherwise.
/// Usage: add `_admin: AdminAccess` as a parameter to your handler function.
#[derive(Debug)]
pub struct AdminAccess;

impl FromRequest for AdminAccess {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState missing while checking admin access");
            return ready(Err(AppError::InternalError("Application state missing".into()).into()));
        };

        match bearer_token(req) {
            Some(token) if state.auth_handler.is_valid_token(&token) => {
                ready(Ok(AdminAccess))
            }
            _ => {
                tracing::warn!("Rejected request with missing or invalid admin token");
                ready(Err(AppError::UnauthorizedAccess.into()))
            }
        }
    }
}

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}
