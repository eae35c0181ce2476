use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::auth::LoginRequest, AppState};

/// Checks the configured username/password pair and hands back the fixed
/// admin token. A mismatch is a 401 with `{"success": false}`, matching
/// what the admin login form expects.
#[instrument(skip(state, credentials))]
pub async fn login(
    state: web::Data<AppState>,
    credentials: web::Json<LoginRequest>,
) -> impl Responder {
    match state.auth_handler.login(&credentials) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(_) => {
            tracing::warn!("Failed admin login attempt");
            HttpResponse::Unauthorized().json(serde_json::json!({"success": false}))
        }
    }
}
